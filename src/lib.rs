//! # userhub
//!
//! Leptos + WASM user directory: lists users from a remote API, filters them
//! by name, and lets a visitor edit a profile locally. Edits are kept in
//! `localStorage` as per-user overrides merged over the fetched record, and
//! a light/dark theme preference is shared by every page.
//!
//! The `state` modules hold all of the logic and are plain Rust; `pages` and
//! `components` wire them to the DOM. Build for the browser with the `csr`
//! feature; `trunk serve` picks it up from `index.html`.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
