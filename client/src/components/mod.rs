//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page shell (`header`, `footer`, `contact_button`, `scroll_progress`)
//! wraps every route. `client_body` and `client_only` guard hydration, and
//! `animate` binds animation schedules to component lifetimes.

pub mod animate;
pub mod client_body;
pub mod client_only;
pub mod contact_button;
pub mod footer;
pub mod header;
pub mod scroll_progress;
