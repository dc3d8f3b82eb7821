//! Component state containers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page keeps one of these in a signal and mutates it only through the
//! methods defined here, which keeps form and lookup rules browser-free.

pub mod contact;
pub mod tracking;
pub mod ui;
