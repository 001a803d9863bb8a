//! # client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! This crate contains the page, section components, browser-free state
//! models, and the small browser glue (mailto hand-off, reveal-on-scroll
//! observer). The server crate renders it with SSR; the `hydrate` feature
//! builds the WASM bundle that takes over in the browser.

pub mod app;
pub mod components;
pub mod pages;
pub mod site;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating portfolio");
    leptos::mount::hydrate_body(app::App);
}
