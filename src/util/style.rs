//! State-to-style mapping.
//!
//! Every visual effect the controller produces is computed here from plain
//! state; the DOM layer only copies the result onto elements. Nothing in this
//! module touches a document.

use crate::state::contact_form::ContactFormPhase;
use crate::state::nav::NavMenuState;
use crate::state::theme::Theme;

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

/// Marker class shared by the drawer elements and the highlighted nav link.
pub const ACTIVE_CLASS: &str = "active";

/// Body `transition` while a theme change animates.
pub const THEME_TRANSITION: &str = "background-color 0.5s, color 0.5s";

/// One inline style declaration, always written with `!important`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleDecl {
    pub property: &'static str,
    pub value: &'static str,
}

const fn decl(property: &'static str, value: &'static str) -> StyleDecl {
    StyleDecl { property, value }
}

/// Neutralizes browser autofill chrome on `input[type=email]`.
const EMAIL_CHROME_RESET: [StyleDecl; 5] = [
    decl("background", "transparent"),
    decl("background-image", "none"),
    decl("-webkit-appearance", "none"),
    decl("-moz-appearance", "none"),
    decl("appearance", "none"),
];

/// Rendered state of the hamburger, panel, overlay and body scroll lock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavView {
    /// Whether all three drawer elements carry [`ACTIVE_CLASS`].
    pub marker_active: bool,
    /// Body `overflow`; empty string clears the inline value.
    pub body_overflow: &'static str,
}

pub fn nav_view(state: NavMenuState) -> NavView {
    match state {
        NavMenuState::Open => NavView {
            marker_active: true,
            body_overflow: "hidden",
        },
        NavMenuState::Closed => NavView {
            marker_active: false,
            body_overflow: "",
        },
    }
}

/// Email input declarations.
///
/// `None` is the load-time pass: only the chrome reset. After a theme change
/// the theme's field colors are appended so they win over the browser's
/// autofill repaint.
pub fn email_input_styles(theme: Option<Theme>) -> Vec<StyleDecl> {
    let mut styles = EMAIL_CHROME_RESET.to_vec();
    match theme {
        Some(Theme::Light) => {
            styles.push(decl("background-color", "#f9fafb"));
            styles.push(decl("color", "#111827"));
        }
        Some(Theme::Dark) => {
            styles.push(decl("background-color", "transparent"));
            styles.push(decl("color", "#f8f9fa"));
        }
        None => {}
    }
    styles
}

/// Inline navbar style for the current scroll position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarStyle {
    pub padding: &'static str,
    pub box_shadow: &'static str,
}

pub fn navbar_style(compact: bool) -> NavbarStyle {
    if compact {
        NavbarStyle {
            padding: "0.8rem 0",
            box_shadow: "0 5px 20px var(--shadow)",
        }
    } else {
        NavbarStyle {
            padding: "1rem 0",
            box_shadow: "none",
        }
    }
}

/// Contact-form submit button rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitButtonView {
    pub icon_class: &'static str,
    pub label: String,
    pub disabled: bool,
    /// Inline `background`; empty string clears it.
    pub background: &'static str,
}

pub fn submit_button_view(phase: ContactFormPhase, idle_label: &str) -> SubmitButtonView {
    match phase {
        ContactFormPhase::Idle => SubmitButtonView {
            icon_class: "fas fa-paper-plane",
            label: idle_label.to_owned(),
            disabled: false,
            background: "",
        },
        ContactFormPhase::Sending => SubmitButtonView {
            icon_class: "fas fa-spinner fa-spin",
            label: "Sending...".to_owned(),
            disabled: true,
            background: "",
        },
        ContactFormPhase::Sent => SubmitButtonView {
            icon_class: "fas fa-check",
            label: "Message Sent!".to_owned(),
            disabled: true,
            background: "var(--success)",
        },
    }
}
