//! Interactivity layer for a single-page portfolio site.
//!
//! This crate is compiled to WebAssembly and attaches to server-rendered
//! markup. Every controller is a small state machine that turns page events
//! into declarative [`effect::Effect`]s; the browser host under [`web`]
//! (feature `web`) is the only code that touches the DOM. Keeping the
//! controllers free of `web-sys` lets the whole behavior run under plain
//! `cargo test` with a virtual clock.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | [`app::Portfolio`] registry: owns state and all controllers |
//! | [`state`] | Explicit application state shared by controllers |
//! | [`effect`] | Targets, effects and deferred tasks emitted by controllers |
//! | [`theme`] | Light/dark switching |
//! | [`nav`] | Smooth scroll, progress bar, navbar background, mobile menu |
//! | [`animation`] | Fade-in reveals, staggered skill cards, hero type-writer |
//! | [`contact`] | Contact form capture into an in-memory log |
//! | [`skills`] | Skill card pre-animation state and tag highlighting |
//! | [`projects`] | Project card hover and placeholder link notices |
//! | [`perf`] | Lazy images, load markers, frame-aligned scroll ticking |
//! | [`resume`] | Floating resume button |
//! | [`notice`] | Transient notifications |
//! | [`styles`] | Inline style and injected stylesheet text |
//! | [`util`] | Debounce, throttle, viewport test, random integers |
//! | [`config`] | Tunables with defaults from [`consts`] |
//! | [`error`] | Crate error type |

pub mod animation;
pub mod app;
pub mod config;
pub mod consts;
pub mod contact;
pub mod effect;
pub mod error;
pub mod nav;
pub mod notice;
pub mod perf;
pub mod projects;
pub mod resume;
pub mod skills;
pub mod state;
pub mod styles;
pub mod theme;
pub mod util;

#[cfg(feature = "web")]
pub mod web;

pub use app::{Event, PageInventory, Portfolio};
pub use config::PortfolioConfig;
pub use effect::{Effect, Target, Task, TaskKind};
pub use error::{PortfolioError, Result};
