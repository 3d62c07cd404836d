//! Site configuration.
//!
//! Defaults match the portfolio markup and stylesheet. A page may override any
//! field with a JSON block:
//!
//! ```html
//! <script type="application/json" id="site-config">{"navBreakpointPx": 900}</script>
//! ```
//!
//! Missing keys keep their defaults and unknown keys are ignored.

use serde::Deserialize;

use crate::error::InitError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Id of the optional `<script type="application/json">` override block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Element ids the controller binds to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub theme_toggle: String,
    pub hamburger: String,
    pub nav_menu: String,
    pub nav_overlay: String,
    /// Optional; the form feature is skipped when absent.
    pub contact_form: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            theme_toggle: "themeToggle".to_owned(),
            hamburger: "hamburgerMenu".to_owned(),
            nav_menu: "navMenu".to_owned(),
            nav_overlay: "navOverlay".to_owned(),
            contact_form: "contactForm".to_owned(),
        }
    }
}

impl ElementIds {
    /// Ids that must exist for the controller to start.
    pub fn required(&self) -> [&str; 4] {
        [
            self.theme_toggle.as_str(),
            self.hamburger.as_str(),
            self.nav_menu.as_str(),
            self.nav_overlay.as_str(),
        ]
    }
}

/// Tunables for the theme, navigation and form behavior.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Durable storage key holding `"light"` or `"dark"`.
    pub storage_key: String,
    /// Attribute on `<html>` read by the stylesheet.
    pub theme_attribute: String,
    /// Widest viewport (inclusive) treated as mobile for the drawer.
    pub nav_breakpoint_px: f64,
    /// Keyboard shortcuts are bound only when the load-time width exceeds this.
    pub desktop_min_width_px: f64,
    pub resize_debounce_ms: u32,
    /// Delay before the post-toggle email chrome fix and transition cleanup.
    pub theme_followup_ms: u32,
    /// How far ahead of a section's top the scroll spy switches to it.
    pub scroll_spy_lead_px: f64,
    pub navbar_compact_after_px: f64,
    /// Fixed header height subtracted from anchor scroll targets.
    pub anchor_offset_px: f64,
    pub form_sending_ms: u32,
    pub form_sent_ms: u32,
    pub ids: ElementIds,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_owned(),
            theme_attribute: "data-theme".to_owned(),
            nav_breakpoint_px: 767.0,
            desktop_min_width_px: 768.0,
            resize_debounce_ms: 250,
            theme_followup_ms: 50,
            scroll_spy_lead_px: 100.0,
            navbar_compact_after_px: 100.0,
            anchor_offset_px: 80.0,
            form_sending_ms: 1500,
            form_sent_ms: 2000,
            ids: ElementIds::default(),
        }
    }
}

impl SiteConfig {
    /// Parse an override block.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::Config`] when `raw` is not a JSON object matching
    /// the field types.
    pub fn from_json(raw: &str) -> Result<Self, InitError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse an optional override block, logging and falling back to the
    /// defaults when it is malformed.
    pub fn from_optional_json(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                leptos::logging::warn!("{err}; using default site configuration");
                Self::default()
            }
        }
    }
}
