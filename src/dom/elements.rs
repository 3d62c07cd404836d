//! One-time lookup of the elements the controller binds to.
//!
//! All required ids are checked before failing so a broken template reports
//! every missing element at once.

#[cfg(any(feature = "hydrate", test))]
use crate::error::InitError;

#[cfg(feature = "hydrate")]
use crate::config::ElementIds;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use web_sys::{Document, Element, HtmlElement, HtmlFormElement};

#[cfg(test)]
#[path = "elements_test.rs"]
mod elements_test;

/// Ids whose lookup came back empty, in input order.
///
/// Each check pairs an id with whether its one lookup found an element.
pub fn missing_ids<'a>(checks: impl IntoIterator<Item = (&'a str, bool)>) -> Vec<String> {
    checks
        .into_iter()
        .filter(|(_, found)| !found)
        .map(|(id, _)| id.to_owned())
        .collect()
}

/// Typed handles to every element the controller touches directly.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
pub struct PageElements {
    pub document: Document,
    pub root: Element,
    pub body: HtmlElement,
    pub theme_toggle: HtmlElement,
    pub hamburger: HtmlElement,
    pub nav_menu: HtmlElement,
    pub nav_overlay: HtmlElement,
    pub contact_form: Option<HtmlFormElement>,
}

#[cfg(feature = "hydrate")]
impl PageElements {
    /// Resolve all handles.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::MissingElements`] naming every absent required id
    /// (and `html`/`body` if the document has none).
    pub fn resolve(document: &Document, ids: &ElementIds) -> Result<Self, InitError> {
        let [toggle, hamburger, menu, overlay] = ids.required().map(|id| html_by_id(document, id));
        let root = document.document_element();
        let body = document.body();

        match (root, body, toggle, hamburger, menu, overlay) {
            (Some(root), Some(body), Some(theme_toggle), Some(hamburger), Some(nav_menu), Some(nav_overlay)) => {
                Ok(Self {
                    document: document.clone(),
                    root,
                    body,
                    theme_toggle,
                    hamburger,
                    nav_menu,
                    nav_overlay,
                    contact_form: form_by_id(document, &ids.contact_form),
                })
            }
            (root, body, toggle, hamburger, menu, overlay) => {
                let [toggle_id, hamburger_id, menu_id, overlay_id] = ids.required();
                Err(InitError::MissingElements(missing_ids([
                    (toggle_id, toggle.is_some()),
                    (hamburger_id, hamburger.is_some()),
                    (menu_id, menu.is_some()),
                    (overlay_id, overlay.is_some()),
                    ("html", root.is_some()),
                    ("body", body.is_some()),
                ])))
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    match document.get_element_by_id(id)?.dyn_into::<HtmlElement>() {
        Ok(element) => Some(element),
        Err(_) => None,
    }
}

#[cfg(feature = "hydrate")]
fn form_by_id(document: &Document, id: &str) -> Option<HtmlFormElement> {
    match document.get_element_by_id(id)?.dyn_into::<HtmlFormElement>() {
        Ok(form) => Some(form),
        Err(_) => None,
    }
}
