//! Project cards: hover micro-interactions and placeholder link notices.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::effect::{Effect, Target, style};
use crate::notice::{self, NoticeKind};
use crate::state::AppState;

/// Notice text for an intercepted project link.
#[must_use]
pub fn link_message(link_text: &str, project_title: Option<&str>) -> String {
    let link_text = link_text.trim();
    match project_title.map(str::trim).filter(|title| !title.is_empty()) {
        Some(title) => format!("{link_text} for \"{title}\" - This would link to the actual project/repository"),
        None => format!("{link_text} - This would link to the actual project/repository"),
    }
}

#[derive(Debug)]
pub struct ProjectController {
    cards: usize,
    notice_ms: u32,
}

impl ProjectController {
    #[must_use]
    pub fn new(notice_ms: u32) -> Self {
        Self { cards: 0, notice_ms }
    }

    pub fn initialize(&mut self, cards: usize) {
        self.cards = cards;
    }

    pub fn on_hover(&self, index: usize, entered: bool) -> Vec<Effect> {
        if index >= self.cards {
            return Vec::new();
        }
        let (scale, offset) = if entered { ("scale(1.02)", "translateY(-5px)") } else { ("scale(1)", "translateY(0)") };
        vec![
            style(Target::ProjectHeader(index), "transform", scale),
            style(Target::ProjectContent(index), "transform", offset),
        ]
    }

    /// Intercepted link click; nothing navigates.
    pub fn on_link_click(&self, state: &mut AppState, link_text: &str, project_title: Option<&str>) -> Vec<Effect> {
        let message = link_message(link_text, project_title);
        log::debug!("project link intercepted: {message}");
        notice::show(state, NoticeKind::Hint, message, self.notice_ms).to_vec()
    }
}
