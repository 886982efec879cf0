//! Controller registry.
//!
//! DESIGN
//! ======
//! [`Portfolio`] owns the [`AppState`] and one instance of every controller.
//! The host describes the page once as a [`PageInventory`], then forwards
//! every DOM event as an [`Event`] and every elapsed timer as a [`Task`].
//! Each call returns the effects to apply, in order.
//!
//! SYSTEM CONTEXT
//! ==============
//! ```text
//! DOM event ──> Event ──> Portfolio::handle ──> Vec<Effect> ──> host applies
//!                                                  │
//!                         Effect::Schedule ──> timer ──> Portfolio::run_task
//! ```
//!
//! Startup order matters: skill cards receive their hidden initial state
//! before the animation controller can reveal them.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::animation::AnimationController;
use crate::config::PortfolioConfig;
use crate::consts::ANIMATIONS_STYLE_ID;
use crate::contact::{ContactFormController, FormFields, FormSubmission};
use crate::effect::{Effect, Task, TaskKind, TimelineId};
use crate::nav::{NavigationController, ScrollMetrics};
use crate::perf::PerformanceController;
use crate::projects::ProjectController;
use crate::resume::ResumeController;
use crate::skills::SkillsController;
use crate::state::AppState;
use crate::styles::ANIMATIONS_CSS;
use crate::theme::{Theme, ThemeController};

/// What the host found in the document at startup. Counts are the number of
/// elements matching each selector, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageInventory {
    /// `.fade-in` elements.
    pub fade_ins: usize,
    /// Index among the fade-ins of `.skills-grid`, when it is one.
    pub skills_grid: Option<usize>,
    pub skill_cards: usize,
    pub skill_tags: usize,
    pub project_cards: usize,
    pub images: usize,
    /// Indices among `images` that carry `data-src`.
    pub lazy_images: Vec<usize>,
    pub has_hero_title: bool,
    pub has_contact_form: bool,
    pub intersection_supported: bool,
    pub system_prefers_dark: bool,
    /// `.nav-links` already carries the open class in the markup.
    pub menu_open: bool,
}

/// Page events the host forwards.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    ThemeToggleClicked,
    /// Same-page anchor clicked; `target_top` is the destination's document
    /// offset, if the selector resolved.
    AnchorClicked { target_top: Option<f64> },
    Scrolled(ScrollMetrics),
    MenuButtonClicked,
    NavLinkClicked,
    DocumentClicked { inside_navbar: bool },
    Resized { width: f64 },
    FadeInIntersected { index: usize },
    ContactSubmitted { fields: FormFields, timestamp: String },
    SkillTagClicked { index: usize },
    ProjectHovered { index: usize, entered: bool },
    ProjectLinkClicked { link_text: String, project_title: Option<String> },
    ImageIntersected { index: usize, data_src: Option<String> },
    ImageLoaded { index: usize },
    ResumeHovered { entered: bool },
    ResumeClicked,
    AnimationFrame,
}

#[derive(Debug)]
pub struct Portfolio {
    config: PortfolioConfig,
    state: AppState,
    theme: ThemeController,
    nav: NavigationController,
    animation: AnimationController,
    contact: ContactFormController,
    skills: SkillsController,
    projects: ProjectController,
    perf: PerformanceController,
    resume: ResumeController,
    started: bool,
}

impl Portfolio {
    #[must_use]
    pub fn new(config: PortfolioConfig) -> Self {
        let notices = config.notices.clone();
        Self {
            state: AppState::new(),
            theme: ThemeController::new(config.theme),
            nav: NavigationController::new(config.navigation.clone()),
            animation: AnimationController::new(config.animation.clone()),
            contact: ContactFormController::new(notices.success_ms),
            skills: SkillsController::new(),
            projects: ProjectController::new(notices.info_ms),
            perf: PerformanceController::new(),
            resume: ResumeController::new(config.resume.clone(), notices.info_ms),
            config,
            started: false,
        }
    }

    /// Initialize every controller against the page. Runs once; later calls
    /// return nothing.
    pub fn start(&mut self, page: &PageInventory) -> Vec<Effect> {
        if self.started {
            log::debug!("portfolio already started");
            return Vec::new();
        }
        self.started = true;

        let mut effects = vec![Effect::InjectStyle { id: ANIMATIONS_STYLE_ID, css: ANIMATIONS_CSS }];
        effects.extend(self.theme.initialize(&mut self.state, page.system_prefers_dark));
        self.nav.initialize(&mut self.state, page.menu_open);
        effects.extend(self.skills.initialize(page.skill_cards, page.skill_tags));
        effects.extend(self.animation.initialize(
            &mut self.state,
            page.fade_ins,
            page.skills_grid,
            page.skill_cards,
            page.has_hero_title,
            page.intersection_supported,
        ));
        self.contact.initialize(page.has_contact_form);
        self.projects.initialize(page.project_cards);
        self.perf.initialize(page.images, &page.lazy_images, page.intersection_supported);
        effects.extend(self.resume.initialize());

        log::info!(
            "portfolio initialized: theme={} fade_ins={} skills={} projects={} images={}",
            self.state.theme.as_str(),
            page.fade_ins,
            page.skill_cards,
            page.project_cards,
            page.images
        );
        effects
    }

    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        if !self.started {
            log::debug!("event before start ignored: {event:?}");
            return Vec::new();
        }
        let state = &mut self.state;
        match event {
            Event::ThemeToggleClicked => self.theme.toggle(state),
            Event::AnchorClicked { target_top } => self.nav.on_anchor_click(target_top),
            Event::Scrolled(metrics) => {
                let mut effects = self.nav.on_scroll(state, metrics);
                effects.extend(self.perf.on_scroll());
                effects
            }
            Event::MenuButtonClicked => self.nav.on_menu_button(state),
            Event::NavLinkClicked => self.nav.on_nav_link(state),
            Event::DocumentClicked { inside_navbar } => self.nav.on_document_click(state, inside_navbar),
            Event::Resized { width } => self.nav.on_resize(state, width),
            Event::FadeInIntersected { index } => self.animation.on_intersect(state, index),
            Event::ContactSubmitted { fields, timestamp } => self.contact.on_submit(state, fields, timestamp),
            Event::SkillTagClicked { index } => self.skills.on_tag_click(state, index),
            Event::ProjectHovered { index, entered } => self.projects.on_hover(index, entered),
            Event::ProjectLinkClicked { link_text, project_title } => {
                self.projects.on_link_click(state, &link_text, project_title.as_deref())
            }
            Event::ImageIntersected { index, data_src } => self.perf.on_image_intersect(index, data_src),
            Event::ImageLoaded { index } => self.perf.on_image_loaded(index),
            Event::ResumeHovered { entered } => self.resume.on_hover(entered),
            Event::ResumeClicked => self.resume.on_click(state),
            Event::AnimationFrame => {
                self.perf.on_frame();
                Vec::new()
            }
        }
    }

    /// A scheduled task came due.
    pub fn run_task(&mut self, task: &Task) -> Vec<Effect> {
        match task.kind {
            TaskKind::DismissNotice { id } => vec![Effect::RemoveNotice(id)],
            TaskKind::HeroEntrance | TaskKind::TypeNextChar | TaskKind::RevealSkillCard { .. } => {
                self.animation.run_task(task)
            }
        }
    }

    /// The host found a timeline's element detached; stop the chain.
    pub fn cancel_timeline(&mut self, timeline: TimelineId) -> Vec<Effect> {
        self.animation.cancel(timeline)
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    #[must_use]
    pub fn submissions(&self) -> &[FormSubmission] {
        &self.state.submissions
    }

    #[must_use]
    pub fn config(&self) -> &PortfolioConfig {
        &self.config
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }
}
