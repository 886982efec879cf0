//! Light/dark theme switching.
//!
//! The active theme lives in [`AppState::theme`] and is mirrored onto the
//! `data-theme` attribute of `<html>`, where the stylesheet picks it up. A
//! toggle also records the choice in [`AppState::saved_theme`], which wins
//! over the system preference for the rest of the page load. Nothing is
//! written to storage: a reload goes back to the system preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

use crate::consts::{ICON_MOON, ICON_SUN, THEME_ATTRIBUTE};
use crate::effect::{Effect, Target};
use crate::state::AppState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value written to the `data-theme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Icon for the toggle button: the sun offers a way out of dark mode.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => ICON_MOON,
            Self::Dark => ICON_SUN,
        }
    }

    /// In-memory preference first, then the system color scheme.
    #[must_use]
    pub fn resolve(saved: Option<Self>, system_prefers_dark: bool) -> Self {
        match saved {
            Some(theme) => theme,
            None if system_prefers_dark => Self::Dark,
            None => Self::Light,
        }
    }
}

#[derive(Debug, Default)]
pub struct ThemeController {
    /// Site-configured starting theme; overrides the system preference.
    configured: Option<Theme>,
}

impl ThemeController {
    #[must_use]
    pub fn new(configured: Option<Theme>) -> Self {
        Self { configured }
    }

    /// Apply the resolved preference at startup.
    pub fn initialize(&self, state: &mut AppState, system_prefers_dark: bool) -> Vec<Effect> {
        let theme = Theme::resolve(state.saved_theme.or(self.configured), system_prefers_dark);
        log::debug!("initial theme {} (system prefers dark: {system_prefers_dark})", theme.as_str());
        Self::apply(state, theme)
    }

    /// Flip the theme and remember the choice for this page load.
    pub fn toggle(&self, state: &mut AppState) -> Vec<Effect> {
        let next = state.theme.toggled();
        state.saved_theme = Some(next);
        Self::apply(state, next)
    }

    fn apply(state: &mut AppState, theme: Theme) -> Vec<Effect> {
        state.theme = theme;
        vec![
            Effect::SetAttribute { target: Target::Root, name: THEME_ATTRIBUTE, value: theme.as_str().into() },
            Effect::SetClassName { target: Target::ThemeIcon, value: theme.icon_class() },
        ]
    }
}
