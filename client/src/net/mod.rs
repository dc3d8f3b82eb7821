//! Outbound calls and data sources.
//!
//! SYSTEM CONTEXT
//! ==============
//! `form_submit` posts the contact form to the hosted form service,
//! `tracking` serves the mock shipment lookup, and `types` defines the
//! tracking records both the lookup and the track page share.

pub mod form_submit;
pub mod tracking;
pub mod types;
