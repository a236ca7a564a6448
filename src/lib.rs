//! # probe
//!
//! Leptos + WASM client that renders a single square, slides it 100px to the
//! right over one second, and probes a URL at the same time; the response
//! picks the square's final color.
//!
//! The crate splits browser plumbing from the observable contract: `state`
//! and `util` are plain Rust exercised by native tests, while `components`
//! and `net` touch the DOM and network behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// Browser entry point: route panics to the console, start logging, mount.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
