//! # kit-studio
//!
//! Leptos + WASM front-end for the content-kit generation backend.
//! Collects a topic, renders the generated kit (hooks, titles, description,
//! tags, thumbnail, shorts, long script), supports per-section regeneration
//! and plain-text export, and lists recently generated kits for reload.
//!
//! The backend is a language-model-backed service, so response payloads can
//! arrive partial or loosely shaped; the `net::coerce` layer normalizes them
//! and `state::kit` reconciles regenerated sections without losing data.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point — hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
