//! DOM listener wiring.
//!
//! Listeners live for the whole page, so their closures are leaked with
//! `forget()` once registered. Each one reads what the core needs from the
//! event, builds an [`Event`] and hands it to [`Host::dispatch`].

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, ErrorEvent, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Node,
};

use super::host::{BrowserScheduler, Host};
use super::page::{first, viewport_size};
use crate::app::{Event, PageInventory};
use crate::consts::DATA_SRC_ATTRIBUTE;
use crate::nav::ScrollMetrics;
use crate::util::Debounced;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Register `handler` for `name` on `target` for the lifetime of the page.
pub(super) fn listen(target: &EventTarget, name: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if let Err(err) = target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref()) {
        log::warn!("failed to listen for {name}: {err:?}");
    }
    closure.forget();
}

/// Wire every page listener. Runs after the controllers are initialized.
pub(super) fn wire(host: &Rc<Host>, inventory: &PageInventory) {
    wire_theme(host);
    wire_navigation(host);
    wire_contact(host);
    wire_skill_tags(host);
    wire_projects(host);
    wire_images(host);
    if inventory.intersection_supported {
        wire_fade_ins(host);
        wire_lazy_images(host, &inventory.lazy_images);
    }
    wire_diagnostics(host);
}

fn on_click(host: &Rc<Host>, target: &EventTarget, event: impl Fn() -> Event + 'static) {
    let host = Rc::clone(host);
    listen(target, "click", move |_| host.dispatch(event()));
}

fn wire_theme(host: &Rc<Host>) {
    if let Some(toggle) = &host.page.theme_toggle {
        on_click(host, toggle, || Event::ThemeToggleClicked);
    }
}

fn wire_navigation(host: &Rc<Host>) {
    for anchor in &host.page.anchors {
        let link = anchor.clone();
        let handle = Rc::clone(host);
        listen(anchor, "click", move |event| {
            event.prevent_default();
            let target_top = link
                .get_attribute("href")
                .and_then(|href| handle.document.query_selector(&href).unwrap_or(None))
                .and_then(|target| target.dyn_ref::<HtmlElement>().map(|el| f64::from(el.offset_top())));
            handle.dispatch(Event::AnchorClicked { target_top });
        });
    }

    let handle = Rc::clone(host);
    listen(&host.window, "scroll", move |_| {
        let metrics = scroll_metrics(&handle);
        handle.dispatch(Event::Scrolled(metrics));
    });

    if let Some(button) = &host.page.menu_button {
        on_click(host, button, || Event::MenuButtonClicked);
    }
    for link in &host.page.nav_link_items {
        on_click(host, link, || Event::NavLinkClicked);
    }

    let handle = Rc::clone(host);
    listen(&host.document, "click", move |event| {
        let clicked = event.target().and_then(|target| target.dyn_ref::<Node>().cloned());
        let inside_navbar = match (&handle.page.navbar, clicked) {
            (Some(navbar), Some(node)) => navbar.contains(Some(&node)),
            _ => false,
        };
        handle.dispatch(Event::DocumentClicked { inside_navbar });
    });

    let handle = Rc::clone(host);
    listen(&host.window, "resize", move |_| {
        let (width, _) = viewport_size(&handle.window, &handle.document);
        handle.dispatch(Event::Resized { width });
    });
}

fn scroll_metrics(host: &Host) -> ScrollMetrics {
    let scroll_top = match host.window.scroll_y() {
        Ok(offset) => offset,
        Err(err) => {
            log::debug!("scrollY unavailable: {err:?}");
            0.0
        }
    };
    let document_height = host.document.document_element().map_or(0.0, |root| f64::from(root.scroll_height()));
    let (_, viewport_height) = viewport_size(&host.window, &host.document);
    ScrollMetrics { scroll_top, document_height, viewport_height }
}

fn wire_contact(host: &Rc<Host>) {
    let Some(form) = &host.page.contact_form else {
        return;
    };
    let handle = Rc::clone(host);
    listen(form, "submit", move |event| {
        event.prevent_default();
        let fields = handle.page.form_fields();
        let timestamp = String::from(js_sys::Date::new_0().to_iso_string());
        handle.dispatch(Event::ContactSubmitted { fields, timestamp });
    });
}

fn wire_skill_tags(host: &Rc<Host>) {
    for (index, tag) in host.page.skill_tags.iter().enumerate() {
        on_click(host, tag, move || Event::SkillTagClicked { index });
    }
}

fn wire_projects(host: &Rc<Host>) {
    for (index, card) in host.page.project_cards.iter().enumerate() {
        let handle = Rc::clone(host);
        listen(card, "mouseenter", move |_| handle.dispatch(Event::ProjectHovered { index, entered: true }));
        let handle = Rc::clone(host);
        listen(card, "mouseleave", move |_| handle.dispatch(Event::ProjectHovered { index, entered: false }));
    }

    for link in &host.page.project_links {
        let anchor = link.clone();
        let handle = Rc::clone(host);
        listen(link, "click", move |event| {
            event.prevent_default();
            let link_text = anchor.text_content().unwrap_or_default();
            let project_title = enclosing_title(&anchor);
            handle.dispatch(Event::ProjectLinkClicked { link_text, project_title });
        });
    }
}

fn enclosing_title(link: &Element) -> Option<String> {
    let card = first(link.closest(".project-card"))?;
    first(card.query_selector(".project-title"))?.text_content()
}

/// Resume button listeners. The button is created by the host at startup.
pub(super) fn wire_resume_button(host: &Rc<Host>, button: &Element) {
    let handle = Rc::clone(host);
    listen(button, "mouseenter", move |_| handle.dispatch(Event::ResumeHovered { entered: true }));
    let handle = Rc::clone(host);
    listen(button, "mouseleave", move |_| handle.dispatch(Event::ResumeHovered { entered: false }));
    on_click(host, button, || Event::ResumeClicked);
}

fn wire_images(host: &Rc<Host>) {
    for (index, image) in host.page.images.iter().enumerate() {
        let handle = Rc::clone(host);
        listen(image, "load", move |_| handle.dispatch(Event::ImageLoaded { index }));
    }
}

// =============================================================================
// INTERSECTION OBSERVERS
// =============================================================================

fn observer(callback: &ObserverCallback, init: Option<&IntersectionObserverInit>) -> Option<IntersectionObserver> {
    let function: &js_sys::Function = callback.as_ref().unchecked_ref();
    let created = match init {
        Some(init) => IntersectionObserver::new_with_options(function, init),
        None => IntersectionObserver::new(function),
    };
    match created {
        Ok(observer) => Some(observer),
        Err(err) => {
            log::warn!("IntersectionObserver construction failed: {err:?}");
            None
        }
    }
}

/// Targets of the intersecting entries, in delivery order.
fn intersecting(entries: &js_sys::Array) -> Vec<Element> {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_ref::<IntersectionObserverEntry>().cloned())
        .filter(IntersectionObserverEntry::is_intersecting)
        .map(|entry| entry.target())
        .collect()
}

fn wire_fade_ins(host: &Rc<Host>) {
    let (threshold, root_margin) = {
        let app = host.app();
        let animation = &app.config().animation;
        (animation.fade_in_threshold, animation.fade_in_root_margin.clone())
    };
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    init.set_root_margin(&root_margin);

    let handle = Rc::clone(host);
    let callback: ObserverCallback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
        for target in intersecting(&entries) {
            if let Some(index) = handle.page.fade_ins.iter().position(|el| *el == target) {
                handle.dispatch(Event::FadeInIntersected { index });
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    if let Some(observer) = observer(&callback, Some(&init)) {
        for el in &host.page.fade_ins {
            observer.observe(el);
        }
    }
    callback.forget();
}

fn wire_lazy_images(host: &Rc<Host>, lazy: &[usize]) {
    if lazy.is_empty() {
        return;
    }
    let handle = Rc::clone(host);
    let callback: ObserverCallback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
        for target in intersecting(&entries) {
            if let Some(index) = handle.page.images.iter().position(|el| *el == target) {
                let data_src = target.get_attribute(DATA_SRC_ATTRIBUTE);
                handle.dispatch(Event::ImageIntersected { index, data_src });
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    if let Some(observer) = observer(&callback, None) {
        for image in lazy.iter().filter_map(|index| host.page.images.get(*index)) {
            observer.observe(image);
        }
        *host.lazy_observer.borrow_mut() = Some(observer);
    }
    callback.forget();
}

// =============================================================================
// DIAGNOSTICS
// =============================================================================

fn wire_diagnostics(host: &Rc<Host>) {
    let wait_ms = host.app().config().resize_log_debounce_ms;
    let resized = Debounced::new(BrowserScheduler, wait_ms, false, |(width, height): (f64, f64)| {
        log::debug!("window resized to {width}x{height}");
    });
    let handle = Rc::clone(host);
    listen(&host.window, "resize", move |_| resized.call(viewport_size(&handle.window, &handle.document)));

    let handle = Rc::clone(host);
    listen(&host.document, "visibilitychange", move |_| {
        if handle.document.hidden() {
            log::info!("tab hidden");
        } else {
            log::info!("tab visible");
        }
    });

    listen(&host.window, "error", |event| match event.dyn_ref::<ErrorEvent>() {
        Some(error) => log::error!("uncaught error: {} ({}:{})", error.message(), error.filename(), error.lineno()),
        None => log::error!("uncaught error: {:?}", event.type_()),
    });
}
