use super::*;

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn as_str_matches_stored_literals() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
}

#[test]
fn parse_accepts_only_exact_literals() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("true"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn toggled_flips_between_both_values() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn resolve_initial_uses_host_preference_when_nothing_stored() {
    assert_eq!(resolve_initial(None, true), Theme::Dark);
    assert_eq!(resolve_initial(None, false), Theme::Light);
}

#[test]
fn resolve_initial_prefers_stored_value_over_host() {
    assert_eq!(resolve_initial(Some("dark"), false), Theme::Dark);
    assert_eq!(resolve_initial(Some("light"), true), Theme::Light);
}

#[test]
fn resolve_initial_ignores_garbage_in_storage() {
    assert_eq!(resolve_initial(Some("sepia"), true), Theme::Dark);
    assert_eq!(resolve_initial(Some("sepia"), false), Theme::Light);
}
