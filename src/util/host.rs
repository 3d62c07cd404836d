//! Read-only signals from the browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Signals are sampled once into a plain struct so controller logic never
//! touches `web_sys` directly. Viewport width is re-read per event by the DOM
//! layer since it changes; the capability flags do not.

/// Snapshot of host capabilities and preferences.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HostSignals {
    /// `(prefers-color-scheme: dark)` matches.
    pub prefers_dark: bool,
    /// `(hover: hover)` matches; a mouse-like primary pointer.
    pub hover_capable: bool,
    /// Touch events are exposed on `window`.
    pub touch_capable: bool,
    /// `window.innerWidth` in CSS pixels.
    pub viewport_width: f64,
}

impl Default for HostSignals {
    fn default() -> Self {
        Self {
            prefers_dark: false,
            hover_capable: true,
            touch_capable: false,
            viewport_width: 1280.0,
        }
    }
}

impl HostSignals {
    /// Sample the live browser. Missing APIs read as the defaults.
    #[cfg(feature = "hydrate")]
    pub fn read(window: &web_sys::Window) -> Self {
        let defaults = Self::default();
        Self {
            prefers_dark: media_matches(window, "(prefers-color-scheme: dark)").unwrap_or(defaults.prefers_dark),
            hover_capable: media_matches(window, "(hover: hover)").unwrap_or(defaults.hover_capable),
            touch_capable: js_has_property(window, "ontouchstart"),
            viewport_width: viewport_width(window).unwrap_or(defaults.viewport_width),
        }
    }
}

#[cfg(feature = "hydrate")]
fn media_matches(window: &web_sys::Window, query: &str) -> Option<bool> {
    match window.match_media(query) {
        Ok(Some(list)) => Some(list.matches()),
        Ok(None) | Err(_) => None,
    }
}

#[cfg(feature = "hydrate")]
fn js_has_property(window: &web_sys::Window, name: &str) -> bool {
    let name = wasm_bindgen::JsValue::from_str(name);
    js_sys::Reflect::has(window.as_ref(), &name).unwrap_or(false)
}

/// Current `window.innerWidth`.
#[cfg(feature = "hydrate")]
pub fn viewport_width(window: &web_sys::Window) -> Option<f64> {
    match window.inner_width() {
        Ok(value) => value.as_f64(),
        Err(_) => None,
    }
}
