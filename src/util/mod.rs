//! Stateless helpers shared by controllers and the browser host.
//!
//! SYSTEM CONTEXT
//! ==============
//! Timing wrappers are generic over [`timing::Scheduler`] so the same
//! debounce/throttle logic runs on browser timers and on the virtual clock
//! used in tests.

pub mod random;
pub mod timing;
pub mod viewport;

pub use random::random_int;
pub use timing::{Debounced, ManualScheduler, Scheduler, Throttled};
pub use viewport::{Rect, is_in_viewport};
