//! Controller tunables.
//!
//! Every field has a default from [`crate::consts`]. A page can override any
//! subset by embedding JSON in `<script type="application/json"
//! id="portfolio-config">` or by passing a JSON string to `boot`; keys that
//! are absent keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    FADE_IN_ROOT_MARGIN, FADE_IN_THRESHOLD, HERO_DELAY_MS, HERO_NAME, INFO_NOTICE_MS, MOBILE_BREAKPOINT_PX,
    NAVBAR_OFFSET_PX, NAVBAR_SOLID_THRESHOLD_PX, RESIZE_LOG_DEBOUNCE_MS, RESUME_URL, SKILL_STAGGER_MS,
    SUCCESS_NOTICE_MS, TYPE_SPEED_MS,
};
use crate::error::Result;
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub navigation: NavigationConfig,
    pub animation: AnimationConfig,
    pub notices: NoticeConfig,
    pub resume: ResumeConfig,
    /// Starting theme. Unset follows the system color scheme.
    pub theme: Option<Theme>,
    pub resize_log_debounce_ms: u32,
    /// `error`, `warn`, `info`, `debug` or `trace`. Unknown values fall back to `info`.
    pub log_level: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            navigation: NavigationConfig::default(),
            animation: AnimationConfig::default(),
            notices: NoticeConfig::default(),
            resume: ResumeConfig::default(),
            theme: None,
            resize_log_debounce_ms: RESIZE_LOG_DEBOUNCE_MS,
            log_level: "info".into(),
        }
    }
}

impl PortfolioConfig {
    /// Parse a (possibly partial) JSON override document.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.trim().parse().unwrap_or(log::Level::Info)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub navbar_offset_px: f64,
    pub solid_threshold_px: f64,
    pub mobile_breakpoint_px: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            navbar_offset_px: NAVBAR_OFFSET_PX,
            solid_threshold_px: NAVBAR_SOLID_THRESHOLD_PX,
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub fade_in_threshold: f64,
    pub fade_in_root_margin: String,
    pub skill_stagger_ms: u32,
    pub hero_delay_ms: u32,
    pub type_speed_ms: u32,
    pub hero_name: String,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            fade_in_threshold: FADE_IN_THRESHOLD,
            fade_in_root_margin: FADE_IN_ROOT_MARGIN.into(),
            skill_stagger_ms: SKILL_STAGGER_MS,
            hero_delay_ms: HERO_DELAY_MS,
            type_speed_ms: TYPE_SPEED_MS,
            hero_name: HERO_NAME.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    pub success_ms: u32,
    pub info_ms: u32,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self { success_ms: SUCCESS_NOTICE_MS, info_ms: INFO_NOTICE_MS }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeConfig {
    pub url: String,
    /// Show the placeholder notice before opening the link.
    pub placeholder_notice: bool,
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self { url: RESUME_URL.into(), placeholder_notice: true }
    }
}
