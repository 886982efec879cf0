//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` replaces page-global slots (theme preference, submission log)
//! with one object owned by [`crate::app::Portfolio`] and lent `&mut` to a
//! controller for the duration of a single event. Each field has exactly one
//! writing controller; everyone else only reads.
//!
//! | Field | Writer |
//! |-------|--------|
//! | `theme`, `saved_theme` | `ThemeController` |
//! | `menu_open` | `NavigationController` |
//! | `highlighted_tag` | `SkillsController` |
//! | `submissions` | `ContactFormController` |

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::contact::FormSubmission;
use crate::effect::TimelineId;
use crate::notice::NoticeId;
use crate::theme::Theme;

#[derive(Debug, Default)]
pub struct AppState {
    /// Theme currently applied to the document root.
    pub theme: Theme,
    /// Preference chosen by the user this page load. Not persisted.
    pub saved_theme: Option<Theme>,
    pub menu_open: bool,
    pub highlighted_tag: Option<usize>,
    /// In-memory audit log of contact form submissions. Never sent anywhere.
    pub submissions: Vec<FormSubmission>,
    next_notice: u64,
    next_timeline: u64,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_notice_id(&mut self) -> NoticeId {
        self.next_notice += 1;
        NoticeId(self.next_notice)
    }

    pub fn next_timeline_id(&mut self) -> TimelineId {
        self.next_timeline += 1;
        TimelineId(self.next_timeline)
    }
}
