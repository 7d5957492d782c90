//! # contract-admin
//!
//! Leptos + WASM admin panel for a smart-contract backend.
//!
//! The crate drives the page's interactive surfaces: a collapsible control
//! panel, inline parameter forms, confirmable pause/unpause buttons with a
//! confirmation dialog, and a toast notification stack. All sequencing
//! lives in the pure `state` module; `util` carries it out against the
//! browser, and `net` talks to the action endpoints.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
