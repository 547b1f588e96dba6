//! # admin-console
//!
//! Leptos + WASM client for the multi-language business-admin console:
//! dashboard, live-chat inbox, and OTP-based authentication.
//!
//! The load-bearing piece is the route-guard pipeline in [`routing`]:
//! language-prefix normalization, auth gating, and permission gating run in
//! a fixed order on every path change, yielding at most one loop-safe
//! redirect per pass. Everything else is view and glue around those facts.

pub mod app;
pub mod components;
pub mod config;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod storage;

/// Browser entry point: mount the app over the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
