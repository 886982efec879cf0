//! JavaScript surface.
//!
//! A page loads the module and calls `boot()` once the document is parsed
//! (module scripts run after parsing, so a plain call at the end of the
//! module script is enough). `boot` returns a [`PortfolioHandle`] for
//! inspection from the console.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::host::{BrowserScheduler, Host};
use super::page::{inline_config, viewport_size};
use crate::app::Event;
use crate::config::PortfolioConfig;
use crate::error::PortfolioError;
use crate::util::{Debounced, Rect, Throttled, is_in_viewport, random_int};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Start the interactivity layer.
///
/// `config_json` overrides the inline `#portfolio-config` script. Invalid
/// JSON is logged and the defaults are used.
#[wasm_bindgen]
pub fn boot(config_json: Option<String>) -> Result<PortfolioHandle, JsValue> {
    let window = web_sys::window().ok_or(PortfolioError::MissingWindow)?;
    let document = window.document().ok_or(PortfolioError::MissingDocument)?;
    let raw = config_json.or_else(|| inline_config(&document));

    let (config, config_error) = match raw.as_deref().map(PortfolioConfig::from_json).transpose() {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(err) => (PortfolioConfig::default(), Some(err)),
    };
    if console_log::init_with_level(config.log_level()).is_err() {
        log::debug!("logger already installed");
    }
    if let Some(err) = config_error {
        log::error!("{err}; using defaults");
    }

    let host = Host::start(config)?;
    Ok(PortfolioHandle { host })
}

/// Read access to the running page state.
#[wasm_bindgen]
pub struct PortfolioHandle {
    host: Rc<Host>,
}

#[wasm_bindgen]
impl PortfolioHandle {
    /// `"light"` or `"dark"`.
    #[wasm_bindgen(getter)]
    pub fn theme(&self) -> String {
        self.host.app().theme().as_str().to_string()
    }

    /// Same as clicking the theme toggle. Returns the new theme.
    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&self) -> String {
        self.host.dispatch(Event::ThemeToggleClicked);
        self.theme()
    }

    #[wasm_bindgen(js_name = submissionCount)]
    pub fn submission_count(&self) -> usize {
        self.host.app().submissions().len()
    }

    /// The in-memory submission log as a JSON array.
    #[wasm_bindgen(js_name = submissionsJson)]
    pub fn submissions_json(&self) -> Result<String, JsValue> {
        let json = serde_json::to_string(self.host.app().submissions()).map_err(PortfolioError::from)?;
        Ok(json)
    }
}

// =============================================================================
// UTILITIES
// =============================================================================

fn invoke(callback: &js_sys::Function, arg: &JsValue) {
    if let Err(err) = callback.call1(&JsValue::NULL, arg) {
        log::warn!("wrapped callback threw: {err:?}");
    }
}

fn into_function(closure: Closure<dyn FnMut(JsValue)>) -> js_sys::Function {
    closure.into_js_value().unchecked_into()
}

/// Debounced wrapper around `callback`. The wrapper forwards its first
/// argument.
#[wasm_bindgen]
pub fn debounce(callback: js_sys::Function, wait_ms: u32, immediate: Option<bool>) -> js_sys::Function {
    let debounced =
        Debounced::new(BrowserScheduler, wait_ms, immediate.unwrap_or(false), move |arg: JsValue| invoke(&callback, &arg));
    into_function(Closure::wrap(Box::new(move |arg: JsValue| debounced.call(arg)) as Box<dyn FnMut(JsValue)>))
}

/// Throttled wrapper around `callback`. The wrapper forwards its first
/// argument.
#[wasm_bindgen]
pub fn throttle(callback: js_sys::Function, limit_ms: u32) -> js_sys::Function {
    let throttled = Throttled::new(BrowserScheduler, limit_ms, move |arg: JsValue| invoke(&callback, &arg));
    into_function(Closure::wrap(Box::new(move |arg: JsValue| {
        throttled.call(arg);
    }) as Box<dyn FnMut(JsValue)>))
}

#[wasm_bindgen(js_name = isInViewport)]
pub fn is_element_in_viewport(element: &Element) -> Result<bool, JsValue> {
    let window = web_sys::window().ok_or(PortfolioError::MissingWindow)?;
    let document = window.document().ok_or(PortfolioError::MissingDocument)?;
    let bounds = element.get_bounding_client_rect();
    let rect = Rect { top: bounds.top(), left: bounds.left(), bottom: bounds.bottom(), right: bounds.right() };
    let (width, height) = viewport_size(&window, &document);
    Ok(is_in_viewport(rect, width, height))
}

#[wasm_bindgen(js_name = randomInt)]
pub fn random_int_export(min: i32, max: i32) -> i32 {
    random_int(&mut rand::rng(), min, max)
}
