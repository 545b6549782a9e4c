//! # svg2code
//!
//! Client-only SVG viewer and converter built with Leptos + WASM.
//! Upload or paste SVG markup, preview it rendered against an adjustable
//! background, copy the source to the clipboard, or download the serialized
//! DOM state as `image.svg`.
//!
//! This crate contains the page, components, application state, and
//! browser-facing utility modules. Everything runs client-side; there is no
//! server component and nothing is persisted across sessions.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: install diagnostics hooks and mount the app.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
