//! Browser host (feature `web`).
//!
//! Binds the core to a live document: `page` resolves elements,
//! `host` applies effects and owns timers, `listeners` forwards DOM
//! events, and `exports` is the `wasm-bindgen` surface.

mod exports;
mod host;
mod listeners;
mod page;

pub use exports::{PortfolioHandle, boot};
pub use host::{BrowserScheduler, Host};
pub use page::Page;
