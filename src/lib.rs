//! # portfolio-client
//!
//! WASM interactivity for the single-page portfolio site: color theme
//! resolution and persistence, the mobile navigation drawer, scroll-linked
//! nav highlighting, in-page anchor scrolling and the simulated contact form.
//!
//! Page state and its rules (`state`, `controller`, `util`) compile and test
//! natively. The `dom` layer attaches them to the live document and is built
//! with the `hydrate` feature.

pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    if let Err(err) = dom::mount() {
        log::error!("portfolio controller failed to start: {err}");
    }
}
