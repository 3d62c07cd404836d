//! Color theme value and first-load resolution.
//!
//! The stored form is the literal `"light"` or `"dark"`. Anything else in
//! storage is treated as if nothing had been stored.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// One of the two document color modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Literal written to storage and to the root theme attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored literal. Returns `None` for anything unrecognized.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Map the host `prefers-color-scheme` signal onto a theme.
    #[must_use]
    pub fn from_host(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Decide the theme applied on page load.
///
/// A recognized stored value wins; otherwise the host preference decides.
pub fn resolve_initial(stored: Option<&str>, host_prefers_dark: bool) -> Theme {
    stored
        .and_then(Theme::parse)
        .unwrap_or_else(|| Theme::from_host(host_prefers_dark))
}
