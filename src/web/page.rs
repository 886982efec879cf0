//! Element lookup.
//!
//! Every selector is resolved once when the host starts. Later lookups go
//! through [`Page::resolve`], which maps a [`Target`] back to the element it
//! was scanned from. Elements that were missing at scan time stay missing;
//! effects addressed to them are dropped.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, NodeList, Window,
};

use crate::app::PageInventory;
use crate::consts::{CONFIG_SCRIPT_ID, DATA_SRC_ATTRIBUTE, MENU_OPEN_CLASS, RESUME_BUTTON_ID};
use crate::contact::FormFields;
use crate::effect::Target;

pub struct Page {
    document: Document,
    pub theme_toggle: Option<Element>,
    theme_icon: Option<Element>,
    pub navbar: Option<Element>,
    scroll_progress: Option<Element>,
    pub menu_button: Option<Element>,
    nav_links: Option<Element>,
    /// `<a>` elements inside `.nav-links`.
    pub nav_link_items: Vec<Element>,
    /// Same-page anchors, `a[href^="#"]`.
    pub anchors: Vec<Element>,
    hero_title: Option<Element>,
    pub fade_ins: Vec<Element>,
    pub skill_cards: Vec<Element>,
    pub skill_tags: Vec<Element>,
    pub project_cards: Vec<Element>,
    project_headers: Vec<Option<Element>>,
    project_contents: Vec<Option<Element>>,
    pub project_links: Vec<Element>,
    pub images: Vec<Element>,
    pub contact_form: Option<HtmlFormElement>,
}

impl Page {
    #[must_use]
    pub fn scan(document: &Document) -> Self {
        let theme_toggle = query(document, ".theme-toggle");
        let theme_icon = theme_toggle.as_ref().and_then(|toggle| first(toggle.query_selector("i")));
        let nav_links = query(document, ".nav-links");
        let nav_link_items = nav_links.as_ref().map(|links| children(links, "a")).unwrap_or_default();
        let project_cards = query_all(document, ".project-card");
        let project_headers = project_cards.iter().map(|card| first(card.query_selector(".project-header"))).collect();
        let project_contents = project_cards.iter().map(|card| first(card.query_selector(".project-content"))).collect();
        let contact_form = document
            .get_element_by_id("contact-form")
            .and_then(|form| form.dyn_ref::<HtmlFormElement>().cloned());

        Self {
            document: document.clone(),
            theme_toggle,
            theme_icon,
            navbar: query(document, ".navbar"),
            scroll_progress: query(document, ".scroll-progress"),
            menu_button: query(document, ".mobile-menu-btn"),
            nav_links,
            nav_link_items,
            anchors: query_all(document, "a[href^=\"#\"]"),
            hero_title: query(document, ".hero-title"),
            fade_ins: query_all(document, ".fade-in"),
            skill_cards: query_all(document, ".skill-card"),
            skill_tags: query_all(document, ".skill-tag"),
            project_cards,
            project_headers,
            project_contents,
            project_links: query_all(document, ".project-link"),
            images: query_all(document, "img"),
            contact_form,
        }
    }

    #[must_use]
    pub fn inventory(&self, window: &Window) -> PageInventory {
        let intersection_supported =
            js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
        let system_prefers_dark = match window.match_media("(prefers-color-scheme: dark)") {
            Ok(Some(query)) => query.matches(),
            Ok(None) | Err(_) => false,
        };
        PageInventory {
            fade_ins: self.fade_ins.len(),
            skills_grid: self.fade_ins.iter().position(|el| el.class_list().contains("skills-grid")),
            skill_cards: self.skill_cards.len(),
            skill_tags: self.skill_tags.len(),
            project_cards: self.project_cards.len(),
            images: self.images.len(),
            lazy_images: self
                .images
                .iter()
                .enumerate()
                .filter(|(_, img)| img.has_attribute(DATA_SRC_ATTRIBUTE))
                .map(|(index, _)| index)
                .collect(),
            has_hero_title: self.hero_title.is_some(),
            has_contact_form: self.contact_form.is_some(),
            intersection_supported,
            system_prefers_dark,
            menu_open: self.nav_links.as_ref().is_some_and(|links| links.class_list().contains(MENU_OPEN_CLASS)),
        }
    }

    #[must_use]
    pub fn resolve(&self, target: Target) -> Option<Element> {
        match target {
            Target::Root => self.document.document_element(),
            Target::ThemeIcon => self.theme_icon.clone(),
            Target::Navbar => self.navbar.clone(),
            Target::ScrollProgress => self.scroll_progress.clone(),
            Target::NavLinks => self.nav_links.clone(),
            Target::HeroTitle => self.hero_title.clone(),
            Target::ResumeButton => self.document.get_element_by_id(RESUME_BUTTON_ID),
            Target::FadeIn(index) => self.fade_ins.get(index).cloned(),
            Target::SkillCard(index) => self.skill_cards.get(index).cloned(),
            Target::SkillTag(index) => self.skill_tags.get(index).cloned(),
            Target::ProjectHeader(index) => self.project_headers.get(index).cloned().flatten(),
            Target::ProjectContent(index) => self.project_contents.get(index).cloned().flatten(),
            Target::Image(index) => self.images.get(index).cloned(),
        }
    }

    /// Current values of `#name`, `#email`, `#subject` and `#message`.
    #[must_use]
    pub fn form_fields(&self) -> FormFields {
        FormFields {
            name: field_value(&self.document, "name"),
            email: field_value(&self.document, "email"),
            subject: field_value(&self.document, "subject"),
            message: field_value(&self.document, "message"),
        }
    }
}

/// JSON text of `<script type="application/json" id="portfolio-config">`.
#[must_use]
pub fn inline_config(document: &Document) -> Option<String> {
    document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|script| script.text_content())
        .filter(|text| !text.trim().is_empty())
}

/// Viewport width and height, falling back to the root element's client box.
#[must_use]
pub fn viewport_size(window: &Window, document: &Document) -> (f64, f64) {
    let root = document.document_element();
    let width = dimension(window.inner_width())
        .or_else(|| root.as_ref().map(|el| f64::from(el.client_width())))
        .unwrap_or(0.0);
    let height = dimension(window.inner_height())
        .or_else(|| root.as_ref().map(|el| f64::from(el.client_height())))
        .unwrap_or(0.0);
    (width, height)
}

fn dimension(value: Result<JsValue, JsValue>) -> Option<f64> {
    match value {
        Ok(value) => value.as_f64().filter(|v| *v > 0.0),
        Err(_) => None,
    }
}

pub(super) fn first(result: Result<Option<Element>, JsValue>) -> Option<Element> {
    match result {
        Ok(found) => found,
        Err(err) => {
            log::warn!("selector lookup failed: {err:?}");
            None
        }
    }
}

fn query(document: &Document, selector: &str) -> Option<Element> {
    first(document.query_selector(selector))
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    elements(document.query_selector_all(selector), selector)
}

fn children(parent: &Element, selector: &str) -> Vec<Element> {
    elements(parent.query_selector_all(selector), selector)
}

fn elements(result: Result<NodeList, JsValue>, selector: &str) -> Vec<Element> {
    match result {
        Ok(list) => (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .collect(),
        Err(err) => {
            log::warn!("selector {selector} failed: {err:?}");
            Vec::new()
        }
    }
}

fn field_value(document: &Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}
