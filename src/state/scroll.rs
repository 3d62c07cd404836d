//! Scroll-linked navigation highlighting.
//!
//! Sections are measured by the DOM layer on each scroll event and handed in
//! as plain [`SectionBounds`]; the active-section rule lives here so it can be
//! tested without a document.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Position of one `<section id=...>` landmark.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: f64,
}

/// Highlight state for navigation links.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollSpy {
    active: Option<String>,
}

impl ScrollSpy {
    /// Id of the section currently highlighted, if any.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Recompute the active section. Returns `true` when it changed.
    pub fn update(&mut self, sections: &[SectionBounds], scroll_y: f64, lead_px: f64) -> bool {
        let next = active_section(sections, scroll_y, lead_px).map(str::to_owned);
        if next == self.active {
            return false;
        }
        self.active = next;
        true
    }

    /// Whether a nav link with this `href` should carry the active marker.
    pub fn is_link_active(&self, href: &str) -> bool {
        match (&self.active, href.strip_prefix('#')) {
            (Some(id), Some(target)) => id == target,
            _ => false,
        }
    }
}

/// Last section (in document order) whose top, less `lead_px`, has been
/// scrolled past.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, lead_px: f64) -> Option<&str> {
    sections
        .iter()
        .rfind(|section| scroll_y >= section.offset_top - lead_px)
        .map(|section| section.id.as_str())
}

/// Whether the navbar should switch to its compact, shadowed style.
#[must_use]
pub fn navbar_compact(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

/// Section id targeted by an in-page anchor `href`.
///
/// A bare `"#"` and non-fragment hrefs have no target.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that brings a section to just below the fixed header.
#[must_use]
pub fn anchor_scroll_top(offset_top: f64, header_offset_px: f64) -> f64 {
    offset_top - header_offset_px
}
