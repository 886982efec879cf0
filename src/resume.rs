//! Floating resume button.
//!
//! The button is mounted once at startup. A click opens the configured link
//! in a new browsing context; while the link is still the placeholder, a
//! notice says so first (`resume.placeholder_notice`).

#[cfg(test)]
#[path = "resume_test.rs"]
mod resume_test;

use crate::config::ResumeConfig;
use crate::effect::{Effect, Target, style};
use crate::notice::{self, NoticeKind};
use crate::state::AppState;

pub const PLACEHOLDER_MESSAGE: &str =
    "Floating resume download - Replace the configured resume URL with your actual resume link";

#[derive(Debug)]
pub struct ResumeController {
    config: ResumeConfig,
    notice_ms: u32,
}

impl ResumeController {
    #[must_use]
    pub fn new(config: ResumeConfig, notice_ms: u32) -> Self {
        Self { config, notice_ms }
    }

    pub fn initialize(&self) -> Vec<Effect> {
        vec![Effect::MountResumeButton]
    }

    pub fn on_hover(&self, entered: bool) -> Vec<Effect> {
        let (scale, background) =
            if entered { ("scale(1.1)", "var(--secondary-color)") } else { ("scale(1)", "var(--primary-color)") };
        vec![
            style(Target::ResumeButton, "transform", scale),
            style(Target::ResumeButton, "background", background),
        ]
    }

    pub fn on_click(&self, state: &mut AppState) -> Vec<Effect> {
        log::info!("resume download requested");
        let mut effects = Vec::with_capacity(3);
        if self.config.placeholder_notice {
            effects.extend(notice::show(state, NoticeKind::Info, PLACEHOLDER_MESSAGE, self.notice_ms));
        }
        effects.push(Effect::OpenUrl { url: self.config.url.clone() });
        effects
    }
}
