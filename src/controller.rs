//! Theme preference and navigation drawer controller.
//!
//! ARCHITECTURE
//! ============
//! One controller is constructed at startup and shared with every listener
//! closure. It owns the applied [`Theme`], the single [`NavMenuState`] flag and
//! the resize debounce generation. Storage is passed in per call so the
//! controller itself stays plain data.
//!
//! Every method returns what changed; the `dom` layer renders it through
//! [`crate::util::style`].
//!
//! TRADE-OFFS
//! ==========
//! A failed storage read or write switches the session to memory-only
//! persistence. The theme keeps working for the rest of the page lifetime and
//! the failure is logged once instead of surfacing in an event handler.

use crate::config::SiteConfig;
use crate::state::nav::{self, NavMenuState, NavTrigger};
use crate::state::theme::{self, Theme};
use crate::util::host::HostSignals;
use crate::util::storage::PreferenceStore;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Where theme changes are being persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Persistence {
    Durable,
    MemoryOnly,
}

/// Result of [`ThemeAndNavController::toggle_theme`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeChange {
    pub theme: Theme,
    /// `false` when the new value only lives in memory.
    pub persisted: bool,
}

/// Keyboard input the controller reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Ctrl+T when the page loaded at desktop width.
    ToggleTheme,
    /// Escape while the drawer is open.
    CloseMenu,
}

/// Generation handed out per resize event. Only the newest may settle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeToken(u64);

#[derive(Clone, Debug, PartialEq)]
pub struct ThemeAndNavController {
    theme: Theme,
    nav: NavMenuState,
    persistence: Persistence,
    storage_key: String,
    nav_breakpoint: f64,
    shortcuts_enabled: bool,
    touch_toggle: bool,
    resize_generation: u64,
}

impl ThemeAndNavController {
    /// Resolve the initial theme and capture load-time host capabilities.
    ///
    /// The drawer always starts closed.
    pub fn initialize(config: &SiteConfig, host: HostSignals, store: &impl PreferenceStore) -> Self {
        let (stored, persistence) = match store.get(&config.storage_key) {
            Ok(stored) => (stored, Persistence::Durable),
            Err(err) => {
                leptos::logging::warn!("{err}; theme preference will not persist this session");
                (None, Persistence::MemoryOnly)
            }
        };
        let theme = theme::resolve_initial(stored.as_deref(), host.prefers_dark);

        Self {
            theme,
            nav: NavMenuState::Closed,
            persistence,
            storage_key: config.storage_key.clone(),
            nav_breakpoint: config.nav_breakpoint_px,
            shortcuts_enabled: host.viewport_width > config.desktop_min_width_px,
            touch_toggle: host.touch_capable,
            resize_generation: 0,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn nav_state(&self) -> NavMenuState {
        self.nav
    }

    pub fn persistence(&self) -> Persistence {
        self.persistence
    }

    /// Whether the Ctrl+T shortcut was bound at load.
    pub fn shortcuts_enabled(&self) -> bool {
        self.shortcuts_enabled
    }

    /// Whether touch-start on the toggle should drive the theme directly.
    pub fn touch_toggle_enabled(&self) -> bool {
        self.touch_toggle
    }

    /// Flip the theme and persist it.
    pub fn toggle_theme(&mut self, store: &mut impl PreferenceStore) -> ThemeChange {
        self.theme = self.theme.toggled();
        let persisted = self.persist(store);
        ThemeChange {
            theme: self.theme,
            persisted,
        }
    }

    fn persist(&mut self, store: &mut impl PreferenceStore) -> bool {
        if self.persistence == Persistence::MemoryOnly {
            return false;
        }
        match store.set(&self.storage_key, self.theme.as_str()) {
            Ok(()) => true,
            Err(err) => {
                leptos::logging::warn!("{err}; theme preference will not persist this session");
                self.persistence = Persistence::MemoryOnly;
                false
            }
        }
    }

    /// Unconditionally flip the drawer.
    pub fn toggle_mobile_menu(&mut self) -> NavMenuState {
        self.nav = self.nav.toggled();
        self.nav
    }

    /// Route a UI event to the drawer. Returns the new state if it changed.
    pub fn dispatch_nav(&mut self, trigger: NavTrigger) -> Option<NavMenuState> {
        let next = nav::reduce(self.nav, trigger, self.nav_breakpoint)?;
        self.nav = next;
        Some(next)
    }

    /// Classify a `keydown`. `key` is `KeyboardEvent.key`.
    pub fn key_action(&self, key: &str, ctrl: bool) -> Option<KeyAction> {
        if key == "Escape" && self.nav.is_open() {
            return Some(KeyAction::CloseMenu);
        }
        if self.shortcuts_enabled && ctrl && key == "t" {
            return Some(KeyAction::ToggleTheme);
        }
        None
    }

    /// Record a resize event, superseding any pending one.
    pub fn begin_resize(&mut self) -> ResizeToken {
        self.resize_generation += 1;
        ResizeToken(self.resize_generation)
    }

    /// Debounced resize callback. Stale tokens are ignored.
    pub fn settle_resize(&mut self, token: ResizeToken, viewport_width: f64) -> Option<NavMenuState> {
        if token.0 != self.resize_generation {
            return None;
        }
        self.dispatch_nav(NavTrigger::ResizeSettled { viewport_width })
    }
}
