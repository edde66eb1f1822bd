//! # parkboard
//!
//! Leptos + WASM dashboard for a parking-lot reservation backend.
//!
//! This crate contains the page, components, application state, the REST
//! client for the `/api/parking/*` surface, and the poll/refresh driver that
//! keeps the local mirror in step with the server. The backend itself is an
//! external collaborator; everything here is browser-side.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod sync;
pub mod util;

/// WASM entry point: installs the panic/console hooks and hydrates the
/// server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
