// lib.rs - Root module for the mentor_directory library
//
// The web application lives under `web_app`; `fixtures` holds reusable
// roster builders for tests and local runs.

/// The fixtures module contains reusable mentor rosters
pub mod fixtures;

/// The Leptos application: model, components, pages, and host API
pub mod web_app;

/// WASM entry point, called by the hydration script emitted by the host.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::web_app::App;

    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::hydrate_body(App);
}
