//! Copy computed views onto the live document.
//!
//! Each function renders one concern from its view value; none of them decide
//! anything. DOM call failures are logged and skipped since they only affect
//! presentation.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement};

use crate::dom::elements::PageElements;
use crate::state::nav::NavMenuState;
use crate::state::scroll::ScrollSpy;
use crate::state::theme::Theme;
use crate::util::style::{self, ACTIVE_CLASS, NavbarStyle, StyleDecl, SubmitButtonView};

fn report<T>(result: Result<T, JsValue>, what: &str) {
    if let Err(err) = result {
        log::warn!("{what} failed: {err:?}");
    }
}

/// Write the theme literal to the root attribute.
pub fn apply_theme(root: &Element, attribute: &str, theme: Theme) {
    report(root.set_attribute(attribute, theme.as_str()), "set theme attribute");
}

/// Body `transition`; an empty value clears it.
pub fn set_body_transition(body: &HtmlElement, value: &str) {
    report(body.style().set_property("transition", value), "set body transition");
}

/// Render the drawer markers and body scroll lock from one state value.
pub fn apply_nav(elements: &PageElements, state: NavMenuState) {
    let view = style::nav_view(state);
    for element in [&elements.hamburger, &elements.nav_menu, &elements.nav_overlay] {
        report(
            element.class_list().toggle_with_force(ACTIVE_CLASS, view.marker_active),
            "toggle drawer marker",
        );
    }
    report(
        elements.body.style().set_property("overflow", view.body_overflow),
        "set body overflow",
    );
}

fn set_important(element: &HtmlElement, decls: &[StyleDecl]) {
    let style = element.style();
    for decl in decls {
        report(
            style.set_property_with_priority(decl.property, decl.value, "important"),
            "set email input style",
        );
    }
}

/// Apply the email-input chrome fix for `theme` (`None` on the load pass).
pub fn apply_email_styles(document: &Document, theme: Option<Theme>) {
    let decls = style::email_input_styles(theme);
    for input in html_elements(document, "input[type=\"email\"]") {
        set_important(&input, &decls);
    }
}

/// Move the active marker to the nav link matching the spy's section.
pub fn apply_nav_links(document: &Document, spy: &ScrollSpy) {
    for link in html_elements(document, ".nav-link") {
        let active = link.get_attribute("href").is_some_and(|href| spy.is_link_active(&href));
        report(link.class_list().toggle_with_force(ACTIVE_CLASS, active), "toggle nav link marker");
    }
}

pub fn apply_navbar(document: &Document, view: NavbarStyle) {
    let Some(navbar) = html_elements(document, ".navbar").into_iter().next() else {
        return;
    };
    let style = navbar.style();
    report(style.set_property("padding", view.padding), "set navbar padding");
    report(style.set_property("box-shadow", view.box_shadow), "set navbar shadow");
}

/// Replace the button content with an icon and a label.
pub fn apply_submit_button(document: &Document, button: &HtmlButtonElement, view: &SubmitButtonView) {
    button.set_text_content(None);
    match document.create_element("i") {
        Ok(icon) => {
            icon.set_class_name(view.icon_class);
            report(button.append_child(&icon), "append submit icon");
        }
        Err(err) => log::warn!("create submit icon failed: {err:?}"),
    }
    match document.create_element("span") {
        Ok(label) => {
            label.set_text_content(Some(view.label.as_str()));
            report(button.append_child(&label), "append submit label");
        }
        Err(err) => log::warn!("create submit label failed: {err:?}"),
    }
    button.set_disabled(view.disabled);
    report(button.style().set_property("background", view.background), "set submit background");
}

/// All elements matching `selector` that are `HTMLElement`s.
pub fn html_elements(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(err) => {
            log::warn!("query {selector} failed: {err:?}");
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(as_html)
        .collect()
}

fn as_html(node: web_sys::Node) -> Option<HtmlElement> {
    match node.dyn_into::<HtmlElement>() {
        Ok(element) => Some(element),
        Err(_) => None,
    }
}
