//! Declarative document mutations emitted by controllers.
//!
//! DESIGN
//! ======
//! Controllers never hold element handles. They address elements through
//! [`Target`] and describe what should change as [`Effect`]s; the host owns
//! the mapping from target to element and applies effects in order. Deferred
//! work is an [`Effect::Schedule`] whose [`Task`] the host feeds back into
//! [`crate::app::Portfolio::run_task`] once the delay elapses.

use crate::notice::{Notice, NoticeId};

/// An element the controllers can address. Indexed variants follow document
/// order of the matching selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    /// `<html>`.
    Root,
    /// The `<i>` inside `.theme-toggle`.
    ThemeIcon,
    Navbar,
    ScrollProgress,
    NavLinks,
    HeroTitle,
    ResumeButton,
    FadeIn(usize),
    SkillCard(usize),
    SkillTag(usize),
    ProjectHeader(usize),
    ProjectContent(usize),
    Image(usize),
}

/// Identity of a chain of deferred steps that can be cancelled as a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimelineId(pub u64);

/// Deferred work returned to the core after a delay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    /// Owning timeline, if the task is one step of a cancellable chain.
    pub timeline: Option<TimelineId>,
    pub kind: TaskKind,
}

impl Task {
    #[must_use]
    pub fn standalone(kind: TaskKind) -> Self {
        Self { timeline: None, kind }
    }

    #[must_use]
    pub fn on(timeline: TimelineId, kind: TaskKind) -> Self {
        Self { timeline: Some(timeline), kind }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskKind {
    /// Show the hero title and start typing the name.
    HeroEntrance,
    /// Write the next character of the hero name.
    TypeNextChar,
    /// Reveal one skill card. `grid` is the fade-in index of the owning
    /// `.skills-grid`.
    RevealSkillCard { grid: usize, index: usize },
    DismissNotice { id: NoticeId },
}

impl TaskKind {
    /// The element that owns this task's timeline. The host checks it is
    /// still attached before running the task.
    #[must_use]
    pub fn target(&self) -> Option<Target> {
        match self {
            Self::HeroEntrance | Self::TypeNextChar => Some(Target::HeroTitle),
            Self::RevealSkillCard { grid, .. } => Some(Target::FadeIn(*grid)),
            Self::DismissNotice { .. } => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    SetAttribute { target: Target, name: &'static str, value: String },
    /// Replace the whole `class` attribute.
    SetClassName { target: Target, value: &'static str },
    AddClass { target: Target, class: &'static str },
    RemoveClass { target: Target, class: &'static str },
    SetStyle { target: Target, property: &'static str, value: String },
    /// Replace text content. Never interpreted as markup.
    SetText { target: Target, text: String },
    /// Smooth-scroll the window to a document offset.
    ScrollTo { top: f64 },
    /// Clear the contact form's fields.
    ResetForm,
    ShowNotice(Notice),
    RemoveNotice(NoticeId),
    /// Append a `<style id=..>` to `<head>` unless one with that id exists.
    InjectStyle { id: &'static str, css: &'static str },
    /// Create the floating resume button and wire its listeners.
    MountResumeButton,
    /// Stop watching a lazy image for intersections.
    Unobserve(Target),
    /// Open a URL in a new browsing context without opener access.
    OpenUrl { url: String },
    /// Call back with `Event::AnimationFrame` on the next frame.
    RequestFrame,
    Schedule { delay_ms: u32, task: Task },
    /// Drop every pending timer that belongs to this timeline.
    CancelTimeline(TimelineId),
}

/// Shorthand for the common single-property style write.
pub(crate) fn style(target: Target, property: &'static str, value: impl Into<String>) -> Effect {
    Effect::SetStyle { target, property, value: value.into() }
}
