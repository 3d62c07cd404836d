use super::*;

const LEAD: f64 = 100.0;

fn sections() -> Vec<SectionBounds> {
    vec![
        SectionBounds { id: "home".to_owned(), offset_top: 0.0 },
        SectionBounds { id: "about".to_owned(), offset_top: 800.0 },
        SectionBounds { id: "projects".to_owned(), offset_top: 1600.0 },
        SectionBounds { id: "contact".to_owned(), offset_top: 2600.0 },
    ]
}

#[test]
fn active_section_at_top_is_first_section() {
    assert_eq!(active_section(&sections(), 0.0, LEAD), Some("home"));
}

#[test]
fn active_section_switches_one_lead_before_section_top() {
    let sections = sections();
    assert_eq!(active_section(&sections, 699.0, LEAD), Some("home"));
    assert_eq!(active_section(&sections, 700.0, LEAD), Some("about"));
    assert_eq!(active_section(&sections, 2500.0, LEAD), Some("contact"));
}

#[test]
fn active_section_is_none_above_first_landmark() {
    let sections = vec![SectionBounds { id: "about".to_owned(), offset_top: 600.0 }];
    assert_eq!(active_section(&sections, 10.0, LEAD), None);
}

#[test]
fn active_section_of_empty_page_is_none() {
    assert_eq!(active_section(&[], 500.0, LEAD), None);
}

#[test]
fn update_reports_changes_only() {
    let sections = sections();
    let mut spy = ScrollSpy::default();
    assert!(spy.update(&sections, 0.0, LEAD));
    assert!(!spy.update(&sections, 50.0, LEAD));
    assert!(spy.update(&sections, 900.0, LEAD));
    assert_eq!(spy.active(), Some("about"));
}

#[test]
fn is_link_active_matches_hash_href_only() {
    let mut spy = ScrollSpy::default();
    spy.update(&sections(), 1700.0, LEAD);
    assert!(spy.is_link_active("#projects"));
    assert!(!spy.is_link_active("#about"));
    assert!(!spy.is_link_active("projects"));
    assert!(!spy.is_link_active("#"));
}

#[test]
fn no_link_is_active_without_a_section() {
    let spy = ScrollSpy::default();
    assert!(!spy.is_link_active("#home"));
}

#[test]
fn navbar_compacts_strictly_past_threshold() {
    assert!(!navbar_compact(0.0, 100.0));
    assert!(!navbar_compact(100.0, 100.0));
    assert!(navbar_compact(100.5, 100.0));
}

#[test]
fn anchor_target_strips_fragment_marker() {
    assert_eq!(anchor_target("#about"), Some("about"));
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target("about"), None);
    assert_eq!(anchor_target("https://example.com/#about"), None);
}

#[test]
fn anchor_scroll_top_subtracts_header() {
    assert_eq!(anchor_scroll_top(1600.0, 80.0), 1520.0);
    assert_eq!(anchor_scroll_top(40.0, 80.0), -40.0);
}
