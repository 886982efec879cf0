//! Transient notifications.
//!
//! A notice is created on demand and removed by its own timer. Notices are
//! independent: several may be visible at once and nothing deduplicates them.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use crate::effect::{Effect, Task, TaskKind};
use crate::state::AppState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    /// Green confirmation, used by the contact form.
    Success,
    /// Brand-colored placeholder information.
    Info,
    /// Like [`NoticeKind::Info`], narrowed for longer per-item messages.
    Hint,
}

impl NoticeKind {
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle",
            Self::Info | Self::Hint => "fas fa-info-circle",
        }
    }

    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "#10b981",
            Self::Info | Self::Hint => "var(--primary-color)",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub kind: NoticeKind,
    pub message: String,
    pub duration_ms: u32,
}

/// Show a notice now and schedule its removal after `duration_ms`.
pub fn show(state: &mut AppState, kind: NoticeKind, message: impl Into<String>, duration_ms: u32) -> [Effect; 2] {
    let id = state.next_notice_id();
    let notice = Notice { id, kind, message: message.into(), duration_ms };
    [
        Effect::ShowNotice(notice),
        Effect::Schedule { delay_ms: duration_ms, task: Task::standalone(TaskKind::DismissNotice { id }) },
    ]
}
