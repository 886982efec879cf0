//! Entrance animations: fade-in reveals, the staggered skill card reveal, and
//! the hero title type-writer.
//!
//! DESIGN
//! ======
//! Both chained effects run on a [`TimelineId`]. Every scheduled step carries
//! its timeline, and a step whose timeline has been cancelled (its element
//! left the document) or has finished produces nothing. Cancelling also tells
//! the host to drop the remaining timers, so no orphaned callback ever
//! touches a detached element.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use std::collections::BTreeSet;

use crate::config::AnimationConfig;
use crate::consts::VISIBLE_CLASS;
use crate::effect::{Effect, Target, Task, TaskKind, TimelineId, style};
use crate::state::AppState;

/// Character-at-a-time reveal of a fixed string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeWriter {
    chars: Vec<char>,
    written: usize,
}

impl TypeWriter {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), written: 0 }
    }

    /// Write one more character and return the visible prefix, or `None`
    /// once everything has been written.
    pub fn step(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.written += 1;
        Some(self.chars[..self.written].iter().collect())
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.written >= self.chars.len()
    }
}

#[derive(Debug)]
struct Stagger {
    timeline: TimelineId,
    remaining: usize,
}

#[derive(Debug)]
struct Typing {
    timeline: TimelineId,
    writer: TypeWriter,
}

#[derive(Debug)]
pub struct AnimationController {
    config: AnimationConfig,
    fade_ins: usize,
    skills_grid: Option<usize>,
    skill_cards: usize,
    revealed: BTreeSet<usize>,
    stagger_started: bool,
    stagger: Option<Stagger>,
    hero: Option<Typing>,
}

impl AnimationController {
    #[must_use]
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            fade_ins: 0,
            skills_grid: None,
            skill_cards: 0,
            revealed: BTreeSet::new(),
            stagger_started: false,
            stagger: None,
            hero: None,
        }
    }

    /// Record the page layout and schedule the hero entrance.
    ///
    /// Without intersection support every fade-in target is revealed right
    /// away so no content stays hidden.
    pub fn initialize(
        &mut self,
        state: &mut AppState,
        fade_ins: usize,
        skills_grid: Option<usize>,
        skill_cards: usize,
        has_hero_title: bool,
        intersection_supported: bool,
    ) -> Vec<Effect> {
        self.fade_ins = fade_ins;
        self.skills_grid = skills_grid.filter(|index| *index < fade_ins);
        self.skill_cards = skill_cards;

        let mut effects = Vec::new();
        if has_hero_title {
            let timeline = state.next_timeline_id();
            let writer = TypeWriter::new(&self.config.hero_name);
            self.hero = Some(Typing { timeline, writer });
            effects.push(Effect::Schedule {
                delay_ms: self.config.hero_delay_ms,
                task: Task::on(timeline, TaskKind::HeroEntrance),
            });
        }
        if !intersection_supported {
            log::debug!("intersection observer unavailable, revealing {fade_ins} fade-in targets");
            for index in 0..fade_ins {
                effects.extend(self.on_intersect(state, index));
            }
        }
        effects
    }

    /// A fade-in target entered the viewport. The marker is one-way, so
    /// later intersections emit nothing.
    pub fn on_intersect(&mut self, state: &mut AppState, index: usize) -> Vec<Effect> {
        if index >= self.fade_ins || !self.revealed.insert(index) {
            return Vec::new();
        }
        let mut effects = vec![Effect::AddClass { target: Target::FadeIn(index), class: VISIBLE_CLASS }];
        if self.skills_grid == Some(index) {
            effects.extend(self.start_stagger(state, index));
        }
        effects
    }

    fn start_stagger(&mut self, state: &mut AppState, grid: usize) -> Vec<Effect> {
        if self.stagger_started || self.skill_cards == 0 {
            return Vec::new();
        }
        self.stagger_started = true;
        let timeline = state.next_timeline_id();
        self.stagger = Some(Stagger { timeline, remaining: self.skill_cards });
        (0..self.skill_cards)
            .map(|index| Effect::Schedule {
                delay_ms: self.config.skill_stagger_ms.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX)),
                task: Task::on(timeline, TaskKind::RevealSkillCard { grid, index }),
            })
            .collect()
    }

    /// Run one scheduled step. Steps of dead timelines are ignored.
    pub fn run_task(&mut self, task: &Task) -> Vec<Effect> {
        let Some(timeline) = task.timeline else {
            return Vec::new();
        };
        match task.kind {
            TaskKind::HeroEntrance => self.hero_entrance(timeline),
            TaskKind::TypeNextChar => self.type_next(timeline),
            TaskKind::RevealSkillCard { index, .. } => self.reveal_card(timeline, index),
            TaskKind::DismissNotice { .. } => Vec::new(),
        }
    }

    fn hero_entrance(&mut self, timeline: TimelineId) -> Vec<Effect> {
        if !self.hero_live(timeline) {
            return Vec::new();
        }
        let mut effects = vec![
            style(Target::HeroTitle, "opacity", "1"),
            Effect::SetText { target: Target::HeroTitle, text: String::new() },
        ];
        effects.extend(self.type_next(timeline));
        effects
    }

    fn type_next(&mut self, timeline: TimelineId) -> Vec<Effect> {
        if !self.hero_live(timeline) {
            return Vec::new();
        }
        let Some(typing) = self.hero.as_mut() else {
            return Vec::new();
        };
        let Some(text) = typing.writer.step() else {
            self.hero = None;
            return Vec::new();
        };
        let mut effects = vec![Effect::SetText { target: Target::HeroTitle, text }];
        if typing.writer.is_done() {
            log::debug!("hero title typed");
            self.hero = None;
        } else {
            effects.push(Effect::Schedule {
                delay_ms: self.config.type_speed_ms,
                task: Task::on(timeline, TaskKind::TypeNextChar),
            });
        }
        effects
    }

    fn reveal_card(&mut self, timeline: TimelineId, index: usize) -> Vec<Effect> {
        let Some(stagger) = self.stagger.as_mut().filter(|s| s.timeline == timeline) else {
            return Vec::new();
        };
        stagger.remaining = stagger.remaining.saturating_sub(1);
        if stagger.remaining == 0 {
            self.stagger = None;
        }
        vec![
            style(Target::SkillCard(index), "transform", "translateY(0)"),
            style(Target::SkillCard(index), "opacity", "1"),
        ]
    }

    /// Stop a running chain. Returns the instruction for the host to drop
    /// its pending timers, or nothing if the timeline was not live.
    pub fn cancel(&mut self, timeline: TimelineId) -> Vec<Effect> {
        let mut cancelled = false;
        if self.hero_live(timeline) {
            self.hero = None;
            cancelled = true;
        }
        if self.stagger.as_ref().is_some_and(|s| s.timeline == timeline) {
            self.stagger = None;
            cancelled = true;
        }
        if cancelled {
            log::debug!("cancelled animation timeline {}", timeline.0);
            vec![Effect::CancelTimeline(timeline)]
        } else {
            Vec::new()
        }
    }

    #[cfg(test)]
    pub(crate) fn is_live(&self, timeline: TimelineId) -> bool {
        self.hero_live(timeline) || self.stagger.as_ref().is_some_and(|s| s.timeline == timeline)
    }

    #[cfg(test)]
    pub(crate) fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    fn hero_live(&self, timeline: TimelineId) -> bool {
        self.hero.as_ref().is_some_and(|h| h.timeline == timeline)
    }
}
