//! # advisor-client
//!
//! Leptos + WASM frontend for the insurance advisory desk. Every screen is a
//! thin view over the advisory backend's REST API: customer capture forms,
//! needs-analysis and recommendation dashboards, product comparison tables,
//! market data, and PDF download/share actions.
//!
//! No business rules live here. Coverage estimates, premiums, scores and PDF
//! rendering all come from the backend; this crate fetches, formats and
//! renders them.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
