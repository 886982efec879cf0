//! Skill cards and skill tags.
//!
//! Cards start hidden and offset; the reveal itself belongs to the animation
//! controller, so [`SkillsController::initialize`] must run before any
//! intersection can fire. Tags are single-select: clicking one moves the
//! highlight to it.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use crate::consts::{HIGHLIGHT_CLASS, HIGHLIGHT_STYLE_ID};
use crate::effect::{Effect, Target, style};
use crate::state::AppState;
use crate::styles::HIGHLIGHT_CSS;

#[derive(Debug, Default)]
pub struct SkillsController {
    cards: usize,
    tags: usize,
}

impl SkillsController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put every card in its pre-animation state and install the highlight
    /// rule once, up front.
    pub fn initialize(&mut self, cards: usize, tags: usize) -> Vec<Effect> {
        self.cards = cards;
        self.tags = tags;
        let mut effects = Vec::with_capacity(cards * 2 + 1);
        for index in 0..cards {
            effects.push(style(Target::SkillCard(index), "opacity", "0"));
            effects.push(style(Target::SkillCard(index), "transform", "translateY(30px)"));
        }
        effects.push(Effect::InjectStyle { id: HIGHLIGHT_STYLE_ID, css: HIGHLIGHT_CSS });
        effects
    }

    pub fn on_tag_click(&self, state: &mut AppState, index: usize) -> Vec<Effect> {
        if index >= self.tags {
            return Vec::new();
        }
        let mut effects = Vec::with_capacity(2);
        if let Some(previous) = state.highlighted_tag.filter(|previous| *previous != index) {
            effects.push(Effect::RemoveClass { target: Target::SkillTag(previous), class: HIGHLIGHT_CLASS });
        }
        state.highlighted_tag = Some(index);
        effects.push(Effect::AddClass { target: Target::SkillTag(index), class: HIGHLIGHT_CLASS });
        effects
    }
}
