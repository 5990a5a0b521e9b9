//! # whiteboard-client
//!
//! Leptos + WASM frontend for the collaborative whiteboard.
//!
//! This crate contains pages, components, application state, wire types,
//! and the bearer-authenticated REST client.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating whiteboard client");
    leptos::mount::hydrate_body(app::App);
}
