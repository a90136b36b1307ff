//! # tasklist-client
//!
//! Leptos + WASM frontend for the to-do list.
//!
//! Tasks live either in browser `localStorage` or behind an external REST
//! collaborator, chosen by [`config::ClientConfig`]. The crate contains the
//! page, its components, application state, the REST client, and browser
//! storage helpers. Built with `hydrate` for the browser and `ssr` for the
//! host binary.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install diagnostics and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_ok() {
        log::debug!("console logging ready");
    }
    leptos::mount::hydrate_body(app::App);
}
