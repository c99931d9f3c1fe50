//! # reports-client
//!
//! Leptos + WASM frontend for the reports module of the line-of-business app.
//!
//! This crate contains the report list and report submissions pages, the
//! generic sortable/paginated table (`table` + `components::tabular_view`),
//! role gating, the REST helpers that talk to the reports backend, and the
//! theme palette.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod table;
pub mod theme;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
