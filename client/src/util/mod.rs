//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Animation planning, deep links, site settings, and logging are plain Rust
//! and unit-tested natively. Browser-only pieces (the animation driver and
//! the body attribute watch) sit behind the `hydrate` feature.

pub mod animation;
pub mod animator;
pub mod hydration;
pub mod links;
pub mod logging;
pub mod site_config;
