//! # client
//!
//! Leptos frontend for the Raíces Vivas community-tourism marketplace.
//!
//! This crate contains pages, components, per-view state models, mock
//! marketplace data and the simulated submission layer. It renders on the
//! server through the `ssr` feature and hydrates in the browser through the
//! `hydrate` feature.

pub mod app;
pub mod components;
pub mod data;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entrypoint: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating raices-vivas");
    leptos::mount::hydrate_body(app::App);
}

