//! Lazy images, load markers, and frame-aligned scroll ticking.

#[cfg(test)]
#[path = "perf_test.rs"]
mod perf_test;

use std::collections::BTreeSet;

use crate::consts::{LAZY_CLASS, LOADED_CLASS};
use crate::effect::{Effect, Target};

#[derive(Debug, Default)]
pub struct PerformanceController {
    images: usize,
    /// Lazy images still waiting for their first intersection. Only shrinks.
    pending: BTreeSet<usize>,
    ticking: bool,
}

impl PerformanceController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `lazy` lists images carrying a deferred source. Without intersection
    /// support nothing is tracked and lazy images keep their placeholder.
    pub fn initialize(&mut self, images: usize, lazy: &[usize], intersection_supported: bool) {
        self.images = images;
        if intersection_supported {
            self.pending = lazy.iter().copied().filter(|index| *index < images).collect();
        } else if !lazy.is_empty() {
            log::debug!("intersection observer unavailable, {} lazy images stay deferred", lazy.len());
        }
    }

    /// A watched image intersected. Swaps in `data_src` exactly once.
    pub fn on_image_intersect(&mut self, index: usize, data_src: Option<String>) -> Vec<Effect> {
        let Some(src) = data_src else {
            return Vec::new();
        };
        if !self.pending.remove(&index) {
            return Vec::new();
        }
        let target = Target::Image(index);
        vec![
            Effect::SetAttribute { target, name: "src", value: src },
            Effect::RemoveClass { target, class: LAZY_CLASS },
            Effect::Unobserve(target),
        ]
    }

    pub fn on_image_loaded(&self, index: usize) -> Vec<Effect> {
        if index >= self.images {
            return Vec::new();
        }
        vec![Effect::AddClass { target: Target::Image(index), class: LOADED_CLASS }]
    }

    /// At most one frame callback is outstanding no matter how fast scroll
    /// events arrive.
    pub fn on_scroll(&mut self) -> Vec<Effect> {
        if self.ticking {
            return Vec::new();
        }
        self.ticking = true;
        vec![Effect::RequestFrame]
    }

    /// Frame callback. Scroll-linked work would go here; today it only
    /// re-arms the guard.
    pub fn on_frame(&mut self) {
        self.ticking = false;
    }

    #[cfg(test)]
    pub(crate) fn is_pending(&self, index: usize) -> bool {
        self.pending.contains(&index)
    }

    #[cfg(test)]
    pub(crate) fn is_ticking(&self) -> bool {
        self.ticking
    }
}
