//! Event wiring between the page and the controller.
//!
//! ARCHITECTURE
//! ============
//! [`Page`] bundles the element handles, configuration and shared state. It is
//! cloned into each listener closure; the controller itself lives in a
//! `RwSignal`, so the clone is a handle copy and all closures see one state.
//! Window-level events go through Leptos' `window_event_listener`; element
//! listeners use a leaked `Closure`, since they live as long as the page.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Event, EventTarget, HtmlButtonElement, HtmlElement, HtmlFormElement, KeyboardEvent, Node};

use crate::config::SiteConfig;
use crate::controller::{KeyAction, ThemeAndNavController};
use crate::dom::elements::PageElements;
use crate::dom::render;
use crate::state::contact_form::{ContactFormState, FormStep};
use crate::state::nav::{NavMenuState, NavTrigger};
use crate::state::scroll::{self, ScrollSpy, SectionBounds};
use crate::util::host;
use crate::util::storage::BrowserStore;
use crate::util::style::{self, THEME_TRANSITION};

/// Shared handles captured by every listener.
#[derive(Clone)]
pub struct Page {
    pub elements: PageElements,
    pub config: Rc<SiteConfig>,
    pub controller: RwSignal<ThemeAndNavController>,
    pub scroll_spy: RwSignal<ScrollSpy>,
    pending_resize: Rc<RefCell<Option<Timeout>>>,
}

impl Page {
    pub fn new(elements: PageElements, config: SiteConfig, controller: ThemeAndNavController) -> Self {
        Self {
            elements,
            config: Rc::new(config),
            controller: RwSignal::new(controller),
            scroll_spy: RwSignal::new(ScrollSpy::default()),
            pending_resize: Rc::new(RefCell::new(None)),
        }
    }

    fn viewport_width(&self) -> f64 {
        host::viewport_width(&window()).unwrap_or_default()
    }
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("failed to bind {event} listener: {err:?}");
    }
    closure.forget();
}

// =============================================================
// Theme
// =============================================================

/// Flip the theme and schedule the email chrome fix and transition cleanup.
pub fn run_toggle_theme(page: &Page) {
    let mut store = BrowserStore;
    let Some(change) = page.controller.try_update(|c| c.toggle_theme(&mut store)) else {
        return;
    };
    log::debug!("theme -> {} (persisted: {})", change.theme.as_str(), change.persisted);

    let elements = &page.elements;
    render::apply_theme(&elements.root, &page.config.theme_attribute, change.theme);
    render::set_body_transition(&elements.body, THEME_TRANSITION);

    let document = elements.document.clone();
    let body = elements.body.clone();
    Timeout::new(page.config.theme_followup_ms, move || {
        render::apply_email_styles(&document, Some(change.theme));
        render::set_body_transition(&body, "");
    })
    .forget();
}

fn bind_theme(page: &Page) {
    let toggle: &EventTarget = page.elements.theme_toggle.as_ref();

    let on_click = page.clone();
    listen(toggle, "click", move |_| run_toggle_theme(&on_click));

    if page.controller.with_untracked(ThemeAndNavController::touch_toggle_enabled) {
        let on_touch = page.clone();
        listen(toggle, "touchstart", move |ev| {
            // Suppresses the synthesized click that would toggle a second time.
            ev.prevent_default();
            run_toggle_theme(&on_touch);
        });
    }
}

// =============================================================
// Navigation drawer
// =============================================================

fn render_nav_change(page: &Page, changed: Option<Option<NavMenuState>>) {
    if let Some(Some(state)) = changed {
        log::debug!("nav menu -> {state:?}");
        render::apply_nav(&page.elements, state);
    }
}

/// Route `trigger` through the controller and render any transition.
pub fn dispatch_nav(page: &Page, trigger: NavTrigger) {
    let changed = page.controller.try_update(|c| c.dispatch_nav(trigger));
    render_nav_change(page, changed);
}

fn event_is_inside(ev: &Event, containers: [&HtmlElement; 2]) -> bool {
    let Some(target) = ev.target() else {
        return false;
    };
    let Ok(target) = target.dyn_into::<Node>() else {
        return false;
    };
    containers.iter().any(|container| container.contains(Some(&target)))
}

fn bind_nav(page: &Page) {
    let on_hamburger = page.clone();
    listen(page.elements.hamburger.as_ref(), "click", move |ev| {
        ev.stop_propagation();
        let changed = on_hamburger.controller.try_update(|c| Some(c.toggle_mobile_menu()));
        render_nav_change(&on_hamburger, changed);
    });

    let on_overlay = page.clone();
    listen(page.elements.nav_overlay.as_ref(), "click", move |_| {
        dispatch_nav(&on_overlay, NavTrigger::Overlay);
    });

    for link in render::html_elements(&page.elements.document, ".nav-link") {
        let on_link = page.clone();
        listen(link.as_ref(), "click", move |_| dispatch_nav(&on_link, NavTrigger::NavLink));
    }

    let on_outside = page.clone();
    window_event_listener(ev::click, move |ev| {
        let elements = &on_outside.elements;
        if event_is_inside(&ev, [&elements.nav_menu, &elements.hamburger]) {
            return;
        }
        let viewport_width = on_outside.viewport_width();
        dispatch_nav(&on_outside, NavTrigger::OutsideClick { viewport_width });
    });
}

// =============================================================
// Keyboard
// =============================================================

fn bind_keys(page: &Page) {
    let on_key = page.clone();
    window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
        let action = on_key.controller.with_untracked(|c| c.key_action(&ev.key(), ev.ctrl_key()));
        match action {
            Some(KeyAction::CloseMenu) => dispatch_nav(&on_key, NavTrigger::Escape),
            Some(KeyAction::ToggleTheme) => {
                ev.prevent_default();
                run_toggle_theme(&on_key);
            }
            None => {}
        }
    });
}

// =============================================================
// Resize
// =============================================================

fn bind_resize(page: &Page) {
    let on_resize = page.clone();
    window_event_listener(ev::resize, move |_| {
        let Some(token) = on_resize.controller.try_update(ThemeAndNavController::begin_resize) else {
            return;
        };
        let settle = on_resize.clone();
        let timeout = Timeout::new(on_resize.config.resize_debounce_ms, move || {
            let viewport_width = settle.viewport_width();
            let changed = settle.controller.try_update(|c| c.settle_resize(token, viewport_width));
            render_nav_change(&settle, changed);
        });
        // Dropping the previous timeout cancels it.
        on_resize.pending_resize.borrow_mut().replace(timeout);
    });
}

// =============================================================
// Scroll spy and anchors
// =============================================================

fn measure_sections(page: &Page) -> Vec<SectionBounds> {
    render::html_elements(&page.elements.document, "section[id]")
        .into_iter()
        .map(|section| SectionBounds {
            id: section.id(),
            offset_top: f64::from(section.offset_top()),
        })
        .collect()
}

fn refresh_scroll(page: &Page) {
    let scroll_y = window().scroll_y().unwrap_or_default();
    let sections = measure_sections(page);
    let lead = page.config.scroll_spy_lead_px;
    if page.scroll_spy.try_update(|spy| spy.update(&sections, scroll_y, lead)) == Some(true) {
        page.scroll_spy
            .with_untracked(|spy| render::apply_nav_links(&page.elements.document, spy));
    }
    let compact = scroll::navbar_compact(scroll_y, page.config.navbar_compact_after_px);
    render::apply_navbar(&page.elements.document, style::navbar_style(compact));
}

fn bind_scroll(page: &Page) {
    let on_scroll = page.clone();
    window_event_listener(ev::scroll, move |_| refresh_scroll(&on_scroll));
}

fn scroll_to_anchor(page: &Page, href: &str) {
    let Some(id) = scroll::anchor_target(href) else {
        return;
    };
    let Some(target) = page.elements.document.get_element_by_id(id) else {
        return;
    };
    let Ok(target) = target.dyn_into::<HtmlElement>() else {
        return;
    };

    let viewport_width = page.viewport_width();
    dispatch_nav(page, NavTrigger::AnchorNavigate { viewport_width });

    let options = web_sys::ScrollToOptions::new();
    options.set_top(scroll::anchor_scroll_top(
        f64::from(target.offset_top()),
        page.config.anchor_offset_px,
    ));
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

fn bind_anchors(page: &Page) {
    for anchor in render::html_elements(&page.elements.document, "a[href^=\"#\"]") {
        let on_anchor = page.clone();
        let href_source = anchor.clone();
        listen(anchor.as_ref(), "click", move |ev| {
            ev.prevent_default();
            if let Some(href) = href_source.get_attribute("href") {
                scroll_to_anchor(&on_anchor, &href);
            }
        });
    }
}

// =============================================================
// Contact form
// =============================================================

#[derive(Clone)]
struct ContactForm {
    document: web_sys::Document,
    form: HtmlFormElement,
    button: HtmlButtonElement,
    state: RwSignal<ContactFormState>,
}

impl ContactForm {
    fn render(&self) {
        let view = self
            .state
            .with_untracked(|s| style::submit_button_view(s.phase(), s.label()));
        render::apply_submit_button(&self.document, &self.button, &view);
    }

    fn run(self, step: FormStep) {
        self.render();
        match step {
            FormStep::Schedule { after_ms } => {
                Timeout::new(after_ms, move || {
                    if let Some(Some(next)) = self.state.try_update(ContactFormState::timer_elapsed) {
                        self.run(next);
                    }
                })
                .forget();
            }
            FormStep::Reset => self.form.reset(),
        }
    }
}

fn submit_button(form: &HtmlFormElement) -> Option<HtmlButtonElement> {
    match form.query_selector(".submit-btn") {
        Ok(Some(element)) => match element.dyn_into::<HtmlButtonElement>() {
            Ok(button) => Some(button),
            Err(_) => None,
        },
        Ok(None) | Err(_) => None,
    }
}

fn bind_contact_form(page: &Page) {
    let Some(form) = page.elements.contact_form.clone() else {
        log::info!("no contact form on page");
        return;
    };
    let Some(button) = submit_button(&form) else {
        log::warn!("contact form has no .submit-btn; submission simulation disabled");
        return;
    };
    let label = match button.query_selector("span") {
        Ok(Some(span)) => span.text_content().unwrap_or_default(),
        Ok(None) | Err(_) => button.text_content().unwrap_or_default(),
    };

    let contact = ContactForm {
        document: page.elements.document.clone(),
        form: form.clone(),
        button,
        state: RwSignal::new(ContactFormState::new(
            label.trim(),
            page.config.form_sending_ms,
            page.config.form_sent_ms,
        )),
    };
    listen(form.as_ref(), "submit", move |ev| {
        ev.prevent_default();
        if let Some(Some(step)) = contact.state.try_update(ContactFormState::submit) {
            contact.clone().run(step);
        }
    });
}

/// Attach every listener and render the initial state.
pub fn bind_all(page: &Page) {
    let theme = page.controller.with_untracked(ThemeAndNavController::theme);
    render::apply_theme(&page.elements.root, &page.config.theme_attribute, theme);
    render::apply_email_styles(&page.elements.document, None);
    render::apply_nav(&page.elements, NavMenuState::Closed);

    bind_theme(page);
    bind_nav(page);
    bind_keys(page);
    bind_resize(page);
    bind_scroll(page);
    bind_anchors(page);
    bind_contact_form(page);

    refresh_scroll(page);
}
