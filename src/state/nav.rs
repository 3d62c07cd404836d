//! Mobile navigation drawer state.
//!
//! DESIGN
//! ======
//! The drawer is one global flag. Every UI event that can affect it is mapped
//! to a [`NavTrigger`] and reduced here, so the hamburger, panel and overlay
//! markers can only ever be rendered from a single value.
//!
//! Only the hamburger toggles. Every other trigger is a close request, which
//! is a no-op on a closed drawer; a click that reaches several close handlers
//! in one interaction therefore closes exactly once.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Open/closed flag for the mobile navigation drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavMenuState {
    #[default]
    Closed,
    Open,
}

impl NavMenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// Event sources that may change the drawer state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavTrigger {
    /// Click on the hamburger control.
    Hamburger,
    /// Click on the backdrop overlay.
    Overlay,
    /// Click on a `.nav-link`.
    NavLink,
    /// Escape key anywhere in the document.
    Escape,
    /// Click outside both the panel and the hamburger, with the viewport width.
    OutsideClick { viewport_width: f64 },
    /// In-page anchor navigation, with the viewport width.
    AnchorNavigate { viewport_width: f64 },
    /// Debounced resize settled at this width.
    ResizeSettled { viewport_width: f64 },
}

/// What a trigger asks of the drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NavRequest {
    Toggle,
    Close,
    Ignore,
}

fn request_for(trigger: NavTrigger, breakpoint: f64) -> NavRequest {
    match trigger {
        NavTrigger::Hamburger => NavRequest::Toggle,
        NavTrigger::Overlay | NavTrigger::NavLink | NavTrigger::Escape => NavRequest::Close,
        NavTrigger::OutsideClick { viewport_width } | NavTrigger::AnchorNavigate { viewport_width } => {
            if viewport_width <= breakpoint {
                NavRequest::Close
            } else {
                NavRequest::Ignore
            }
        }
        NavTrigger::ResizeSettled { viewport_width } => {
            if viewport_width > breakpoint {
                NavRequest::Close
            } else {
                NavRequest::Ignore
            }
        }
    }
}

/// Reduce `trigger` against `current`.
///
/// Returns the new state only when it differs from `current`. `breakpoint` is
/// the widest viewport (inclusive) still considered mobile.
#[must_use]
pub fn reduce(current: NavMenuState, trigger: NavTrigger, breakpoint: f64) -> Option<NavMenuState> {
    let next = match request_for(trigger, breakpoint) {
        NavRequest::Toggle => current.toggled(),
        NavRequest::Close => NavMenuState::Closed,
        NavRequest::Ignore => current,
    };
    (next != current).then_some(next)
}
