use super::*;

#[test]
fn missing_ids_is_empty_when_all_exist() {
    assert!(missing_ids([("themeToggle", true), ("navMenu", true)]).is_empty());
}

#[test]
fn missing_ids_lists_every_absent_id_in_order() {
    let missing = missing_ids([
        ("themeToggle", false),
        ("hamburgerMenu", false),
        ("navMenu", true),
        ("navOverlay", false),
    ]);
    assert_eq!(missing, vec!["themeToggle", "hamburgerMenu", "navOverlay"]);
}

#[test]
fn missing_document_landmarks_follow_configured_ids() {
    let missing = missing_ids([("themeToggle", true), ("navOverlay", false), ("html", true), ("body", false)]);
    assert_eq!(missing, vec!["navOverlay", "body"]);
}

#[test]
fn missing_elements_error_names_every_id() {
    let err = InitError::MissingElements(missing_ids([("themeToggle", false), ("navOverlay", false)]));
    assert_eq!(err.to_string(), "missing required elements: themeToggle, navOverlay");
}
