//! Applies effects to the live document.
//!
//! ARCHITECTURE
//! ============
//! `Host` is the only owner of browser handles. It forwards DOM events into
//! [`Portfolio`], applies the returned effects in order, and turns
//! [`Effect::Schedule`] into `gloo_timers` timeouts that call back into
//! [`Portfolio::run_task`]. Pending timers are kept by id with their
//! timeline so `CancelTimeline` can drop them; dropping a `Timeout` clears
//! it. Failed DOM calls are logged and skipped.

use std::cell::{Cell, Ref, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, ScrollBehavior, ScrollToOptions, Window,
};

use super::listeners;
use super::page::Page;
use crate::app::{Event, Portfolio};
use crate::config::PortfolioConfig;
use crate::consts::RESUME_BUTTON_ID;
use crate::effect::{Effect, Target, Task, TimelineId};
use crate::error::{PortfolioError, Result};
use crate::notice::{Notice, NoticeId};
use crate::styles::{NOTICE_ICON_STYLE, RESUME_BUTTON_STYLE, notice_style};
use crate::util::Scheduler;

/// [`Scheduler`] backed by `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

struct PendingTimer {
    timeline: Option<TimelineId>,
    _timeout: Timeout,
}

pub struct Host {
    app: RefCell<Portfolio>,
    pub(super) page: Page,
    pub(super) window: Window,
    pub(super) document: Document,
    scheduler: BrowserScheduler,
    timers: RefCell<HashMap<u64, PendingTimer>>,
    next_timer: Cell<u64>,
    notices: RefCell<HashMap<NoticeId, Element>>,
    pub(super) lazy_observer: RefCell<Option<IntersectionObserver>>,
    frame: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl Host {
    /// Scan the document, initialize every controller, then wire listeners.
    pub fn start(config: PortfolioConfig) -> Result<Rc<Self>> {
        let window = web_sys::window().ok_or(PortfolioError::MissingWindow)?;
        let document = window.document().ok_or(PortfolioError::MissingDocument)?;
        let page = Page::scan(&document);
        let inventory = page.inventory(&window);

        let host = Rc::new(Self {
            app: RefCell::new(Portfolio::new(config)),
            page,
            window,
            document,
            scheduler: BrowserScheduler,
            timers: RefCell::new(HashMap::new()),
            next_timer: Cell::new(0),
            notices: RefCell::new(HashMap::new()),
            lazy_observer: RefCell::new(None),
            frame: RefCell::new(None),
        });

        let effects = host.app.borrow_mut().start(&inventory);
        host.apply_all(effects);
        listeners::wire(&host, &inventory);
        Ok(host)
    }

    pub fn app(&self) -> Ref<'_, Portfolio> {
        self.app.borrow()
    }

    pub fn dispatch(self: &Rc<Self>, event: Event) {
        let effects = self.app.borrow_mut().handle(event);
        self.apply_all(effects);
    }

    fn apply_all(self: &Rc<Self>, effects: Vec<Effect>) {
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(self: &Rc<Self>, effect: Effect) {
        match effect {
            Effect::SetAttribute { target, name, value } => self.write(target, |el| el.set_attribute(name, &value)),
            Effect::SetClassName { target, value } => self.write(target, |el| {
                el.set_class_name(value);
                Ok(())
            }),
            Effect::AddClass { target, class } => self.write(target, |el| el.class_list().add_1(class)),
            Effect::RemoveClass { target, class } => self.write(target, |el| el.class_list().remove_1(class)),
            Effect::SetStyle { target, property, value } => self.write(target, |el| match el.dyn_ref::<HtmlElement>() {
                Some(html) => html.style().set_property(property, &value),
                None => Ok(()),
            }),
            Effect::SetText { target, text } => self.write(target, |el| {
                el.set_text_content(Some(&text));
                Ok(())
            }),
            Effect::ScrollTo { top } => {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                self.window.scroll_to_with_scroll_to_options(&options);
            }
            Effect::ResetForm => {
                if let Some(form) = &self.page.contact_form {
                    form.reset();
                }
            }
            Effect::ShowNotice(notice) => report("show notice", self.show_notice(&notice)),
            Effect::RemoveNotice(id) => {
                let removed = self.notices.borrow_mut().remove(&id);
                if let Some(el) = removed {
                    el.remove();
                }
            }
            Effect::InjectStyle { id, css } => report("inject style", self.inject_style(id, css)),
            Effect::MountResumeButton => report("mount resume button", self.mount_resume_button()),
            Effect::Unobserve(target) => {
                let observer = self.lazy_observer.borrow();
                if let (Some(observer), Some(el)) = (observer.as_ref(), self.page.resolve(target)) {
                    observer.unobserve(&el);
                }
            }
            Effect::OpenUrl { url } => {
                let opened = self.window.open_with_url_and_target_and_features(&url, "_blank", "noopener,noreferrer");
                report("open url", opened.map(drop));
            }
            Effect::RequestFrame => self.request_frame(),
            Effect::Schedule { delay_ms, task } => self.schedule(delay_ms, task),
            Effect::CancelTimeline(timeline) => {
                self.timers.borrow_mut().retain(|_, timer| timer.timeline != Some(timeline));
            }
        }
    }

    fn write(&self, target: Target, op: impl FnOnce(&Element) -> std::result::Result<(), JsValue>) {
        if let Some(el) = self.page.resolve(target) {
            report("dom write", op(&el));
        }
    }

    // --- Deferred work ---

    fn schedule(self: &Rc<Self>, delay_ms: u32, task: Task) {
        let id = self.next_timer.get() + 1;
        self.next_timer.set(id);
        let timeline = task.timeline;
        let host = Rc::downgrade(self);
        let timeout = self.scheduler.schedule(
            delay_ms,
            Box::new(move || {
                let Some(host) = host.upgrade() else {
                    return;
                };
                let fired = host.timers.borrow_mut().remove(&id);
                drop(fired);
                host.run_task(&task);
            }),
        );
        self.timers.borrow_mut().insert(id, PendingTimer { timeline, _timeout: timeout });
    }

    /// Run a due task, or cancel its timeline if its element has left the
    /// document.
    fn run_task(self: &Rc<Self>, task: &Task) {
        if let Some(target) = task.kind.target() {
            let attached = self.page.resolve(target).is_some_and(|el| el.is_connected());
            if !attached {
                log::debug!("{target:?} detached, dropping {:?}", task.kind);
                let effects = match task.timeline {
                    Some(timeline) => self.app.borrow_mut().cancel_timeline(timeline),
                    None => Vec::new(),
                };
                self.apply_all(effects);
                return;
            }
        }
        let effects = self.app.borrow_mut().run_task(task);
        self.apply_all(effects);
    }

    fn request_frame(self: &Rc<Self>) {
        let host = Rc::downgrade(self);
        let callback = Closure::wrap(Box::new(move |_ts: f64| {
            if let Some(host) = host.upgrade() {
                host.frame.borrow_mut().take();
                host.dispatch(Event::AnimationFrame);
            }
        }) as Box<dyn FnMut(f64)>);

        match self.window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(_) => *self.frame.borrow_mut() = Some(callback),
            Err(err) => {
                log::warn!("requestAnimationFrame failed: {err:?}");
                self.dispatch(Event::AnimationFrame);
            }
        }
    }

    // --- Created elements ---

    fn show_notice(&self, notice: &Notice) -> std::result::Result<(), JsValue> {
        let body = self.document.body().ok_or_else(|| JsValue::from_str("document has no body"))?;
        let toast = self.document.create_element("div")?;
        toast.set_attribute("style", &notice_style(notice.kind))?;
        toast.set_attribute("role", "status")?;

        let icon = self.document.create_element("i")?;
        icon.set_class_name(notice.kind.icon_class());
        icon.set_attribute("style", NOTICE_ICON_STYLE)?;
        toast.append_child(&icon)?;
        toast.append_child(&self.document.create_text_node(&notice.message))?;

        body.append_child(&toast)?;
        self.notices.borrow_mut().insert(notice.id, toast);
        Ok(())
    }

    fn inject_style(&self, id: &str, css: &str) -> std::result::Result<(), JsValue> {
        if self.document.get_element_by_id(id).is_some() {
            return Ok(());
        }
        let head = self.document.head().ok_or_else(|| JsValue::from_str("document has no head"))?;
        let style = self.document.create_element("style")?;
        style.set_id(id);
        style.set_text_content(Some(css));
        head.append_child(&style)?;
        Ok(())
    }

    fn mount_resume_button(self: &Rc<Self>) -> std::result::Result<(), JsValue> {
        if self.document.get_element_by_id(RESUME_BUTTON_ID).is_some() {
            return Ok(());
        }
        let body = self.document.body().ok_or_else(|| JsValue::from_str("document has no body"))?;
        let button = self.document.create_element("button")?;
        button.set_id(RESUME_BUTTON_ID);
        button.set_attribute("style", RESUME_BUTTON_STYLE)?;
        button.set_attribute("title", "Download Resume")?;
        let icon = self.document.create_element("i")?;
        icon.set_class_name("fas fa-download");
        button.append_child(&icon)?;
        body.append_child(&button)?;

        listeners::wire_resume_button(self, &button);
        Ok(())
    }
}

pub(super) fn report(what: &str, result: std::result::Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("{what} failed: {err:?}");
    }
}
