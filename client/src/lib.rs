//! # client
//!
//! Leptos + WASM frontend for the UAE Delivery Express marketing site.
//!
//! The same component tree is compiled twice: with `ssr` it is rendered to
//! static HTML by the `site-export` binary, and with `hydrate` it runs in the
//! browser to attach the interactive pieces (contact form, tracking lookup,
//! FAQ accordion, animation schedules, and the hydration-safety shim).

#![recursion_limit = "512"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the statically rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    util::logging::init(util::logging::LoggingConfig::from_build_env());
    leptos::mount::hydrate_body(app::App);
}
