//! Browser attachment layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portfolio markup is rendered ahead of time; this layer finds the
//! elements it needs, builds the controller and wires events. Everything here
//! except the element presence check needs a live document and is compiled
//! only with the `hydrate` feature.

pub mod elements;

#[cfg(feature = "hydrate")]
pub mod bindings;
#[cfg(feature = "hydrate")]
pub mod render;

#[cfg(feature = "hydrate")]
use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
#[cfg(feature = "hydrate")]
use crate::controller::ThemeAndNavController;
#[cfg(feature = "hydrate")]
use crate::error::InitError;
#[cfg(feature = "hydrate")]
use crate::util::host::HostSignals;
#[cfg(feature = "hydrate")]
use crate::util::storage::BrowserStore;

/// Attach the controller to the current document.
///
/// Defers to `DOMContentLoaded` when the document is still parsing.
///
/// # Errors
///
/// Returns [`InitError`] when there is no window/document, or immediately when
/// the document is already parsed and required elements are missing.
#[cfg(feature = "hydrate")]
pub fn mount() -> Result<(), InitError> {
    use wasm_bindgen::{JsCast, closure::Closure};

    let window = web_sys::window().ok_or(InitError::NoWindow)?;
    let document = window.document().ok_or(InitError::NoDocument)?;

    if document.ready_state() != "loading" {
        return attach(&window, &document);
    }

    let target = document.clone();
    let on_ready = Closure::once_into_js(move || {
        if let Err(err) = attach(&window, &document) {
            log::error!("portfolio controller failed to start: {err}");
        }
    });
    if let Err(err) = target.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
        log::warn!("failed to defer startup: {err:?}");
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
fn attach(window: &web_sys::Window, document: &web_sys::Document) -> Result<(), InitError> {
    let raw_config = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    let config = SiteConfig::from_optional_json(raw_config.as_deref());

    let elements = elements::PageElements::resolve(document, &config.ids)?;
    let host = HostSignals::read(window);
    let controller = ThemeAndNavController::initialize(&config, host, &BrowserStore);
    log::info!(
        "portfolio controller ready: theme={} shortcuts={} touch={}",
        controller.theme().as_str(),
        controller.shortcuts_enabled(),
        controller.touch_toggle_enabled()
    );

    let page = bindings::Page::new(elements, config, controller);
    bindings::bind_all(&page);
    Ok(())
}
