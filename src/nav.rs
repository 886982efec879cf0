//! Navigation: anchor smooth-scroll, scroll progress bar, adaptive navbar
//! background, and the mobile menu.
//!
//! The menu's open/closed flag is owned here ([`AppState::menu_open`]); the
//! navbar background reads [`AppState::theme`], which only the theme
//! controller writes.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::NavigationConfig;
use crate::consts::{
    MENU_OPEN_CLASS, NAVBAR_DARK_SOLID, NAVBAR_DARK_TRANSLUCENT, NAVBAR_LIGHT_SOLID, NAVBAR_LIGHT_TRANSLUCENT,
};
use crate::effect::{Effect, Target, style};
use crate::state::AppState;
use crate::theme::Theme;

/// Window scroll geometry sampled on a scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

/// Percentage of the scrollable range already scrolled, clamped to `[0, 100]`.
///
/// Content no taller than the viewport has nothing to scroll and reports `0`.
#[must_use]
pub fn scroll_progress(metrics: ScrollMetrics) -> f64 {
    let scrollable = metrics.document_height - metrics.viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    let percent = metrics.scroll_top / scrollable * 100.0;
    if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 100.0) }
}

/// Document offset to scroll to so the target clears the fixed navbar.
#[must_use]
pub fn anchor_offset(target_top: f64, navbar_offset: f64) -> f64 {
    target_top - navbar_offset
}

#[must_use]
pub fn navbar_background(theme: Theme, scroll_top: f64, threshold: f64) -> &'static str {
    let solid = scroll_top > threshold;
    match (theme, solid) {
        (Theme::Dark, true) => NAVBAR_DARK_SOLID,
        (Theme::Dark, false) => NAVBAR_DARK_TRANSLUCENT,
        (Theme::Light, true) => NAVBAR_LIGHT_SOLID,
        (Theme::Light, false) => NAVBAR_LIGHT_TRANSLUCENT,
    }
}

#[derive(Debug)]
pub struct NavigationController {
    config: NavigationConfig,
}

impl NavigationController {
    #[must_use]
    pub fn new(config: NavigationConfig) -> Self {
        Self { config }
    }

    /// Adopt the menu state the markup was served with.
    pub fn initialize(&self, state: &mut AppState, menu_open: bool) {
        state.menu_open = menu_open;
    }

    /// Same-page anchor click. `target_top` is the resolved element's
    /// document offset, or `None` when the selector matched nothing.
    pub fn on_anchor_click(&self, target_top: Option<f64>) -> Vec<Effect> {
        match target_top {
            Some(top) => vec![Effect::ScrollTo { top: anchor_offset(top, self.config.navbar_offset_px) }],
            None => Vec::new(),
        }
    }

    pub fn on_scroll(&self, state: &AppState, metrics: ScrollMetrics) -> Vec<Effect> {
        let percent = scroll_progress(metrics);
        let background = navbar_background(state.theme, metrics.scroll_top, self.config.solid_threshold_px);
        vec![
            style(Target::ScrollProgress, "width", format!("{percent}%")),
            style(Target::Navbar, "background", background),
        ]
    }

    pub fn on_menu_button(&self, state: &mut AppState) -> Vec<Effect> {
        state.menu_open = !state.menu_open;
        if state.menu_open {
            vec![Effect::AddClass { target: Target::NavLinks, class: MENU_OPEN_CLASS }]
        } else {
            Self::close(state)
        }
    }

    pub fn on_nav_link(&self, state: &mut AppState) -> Vec<Effect> {
        Self::close(state)
    }

    /// Any click on the page; clicks inside the navbar leave the menu alone.
    pub fn on_document_click(&self, state: &mut AppState, inside_navbar: bool) -> Vec<Effect> {
        if inside_navbar { Vec::new() } else { Self::close(state) }
    }

    pub fn on_resize(&self, state: &mut AppState, viewport_width: f64) -> Vec<Effect> {
        if viewport_width > self.config.mobile_breakpoint_px { Self::close(state) } else { Vec::new() }
    }

    fn close(state: &mut AppState) -> Vec<Effect> {
        state.menu_open = false;
        vec![Effect::RemoveClass { target: Target::NavLinks, class: MENU_OPEN_CLASS }]
    }
}
