//! Debounce and throttle over a pluggable timer source.
//!
//! DESIGN
//! ======
//! A [`Scheduler`] runs a boxed callback after a delay and hands back a
//! handle; dropping the handle cancels the callback (the same contract as
//! `gloo_timers::callback::Timeout`). The wrappers hold only a weak
//! reference from inside their timers, so dropping the last wrapper clone
//! also disarms anything still pending.

#[cfg(test)]
#[path = "timing_test.rs"]
mod timing_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

pub trait Scheduler {
    /// Pending timer. Dropping it before it fires cancels the callback.
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

// =============================================================================
// DEBOUNCE
// =============================================================================

/// Coalesces a burst of calls into one.
///
/// Trailing mode (default) invokes once, `wait_ms` after the last call of a
/// burst, with that call's argument. Leading mode (`immediate`) invokes
/// synchronously on the first call of a burst and stays quiet until
/// `wait_ms` passes with no further calls.
pub struct Debounced<S: Scheduler, A> {
    inner: Rc<DebounceInner<S, A>>,
}

struct DebounceInner<S: Scheduler, A> {
    scheduler: S,
    wait_ms: u32,
    immediate: bool,
    callback: RefCell<Box<dyn FnMut(A)>>,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler, A> Clone for Debounced<S, A> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<S, A> Debounced<S, A>
where
    S: Scheduler + 'static,
    A: 'static,
{
    pub fn new(scheduler: S, wait_ms: u32, immediate: bool, callback: impl FnMut(A) + 'static) -> Self {
        Self {
            inner: Rc::new(DebounceInner {
                scheduler,
                wait_ms,
                immediate,
                callback: RefCell::new(Box::new(callback)),
                pending: RefCell::new(None),
            }),
        }
    }

    pub fn call(&self, arg: A) {
        let inner = &self.inner;
        let call_now = inner.immediate && inner.pending.borrow().is_none();
        let (now_arg, later_arg) = if inner.immediate { (Some(arg), None) } else { (None, Some(arg)) };

        let weak: Weak<DebounceInner<S, A>> = Rc::downgrade(inner);
        let handle = inner.scheduler.schedule(
            inner.wait_ms,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                drop(inner.pending.borrow_mut().take());
                if let Some(arg) = later_arg {
                    inner.invoke(arg);
                }
            }),
        );
        // Replacing the previous handle cancels its trailing call.
        let previous = inner.pending.borrow_mut().replace(handle);
        drop(previous);

        if call_now {
            if let Some(arg) = now_arg {
                inner.invoke(arg);
            }
        }
    }

    /// A burst is in progress (a timer is armed).
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.pending.borrow().is_some()
    }
}

impl<S: Scheduler, A> DebounceInner<S, A> {
    fn invoke(&self, arg: A) {
        let mut callback = self.callback.borrow_mut();
        (*callback)(arg);
    }
}

// =============================================================================
// THROTTLE
// =============================================================================

/// Invokes on the leading call of each `limit_ms` window and drops the rest.
pub struct Throttled<S: Scheduler, A> {
    inner: Rc<ThrottleInner<S, A>>,
}

struct ThrottleInner<S: Scheduler, A> {
    scheduler: S,
    limit_ms: u32,
    callback: RefCell<Box<dyn FnMut(A)>>,
    window: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler, A> Clone for Throttled<S, A> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<S, A> Throttled<S, A>
where
    S: Scheduler + 'static,
    A: 'static,
{
    pub fn new(scheduler: S, limit_ms: u32, callback: impl FnMut(A) + 'static) -> Self {
        Self {
            inner: Rc::new(ThrottleInner {
                scheduler,
                limit_ms,
                callback: RefCell::new(Box::new(callback)),
                window: RefCell::new(None),
            }),
        }
    }

    /// Returns whether this call went through.
    pub fn call(&self, arg: A) -> bool {
        let inner = &self.inner;
        if inner.window.borrow().is_some() {
            return false;
        }
        let weak: Weak<ThrottleInner<S, A>> = Rc::downgrade(inner);
        let handle = inner.scheduler.schedule(
            inner.limit_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    drop(inner.window.borrow_mut().take());
                }
            }),
        );
        *inner.window.borrow_mut() = Some(handle);

        let mut callback = inner.callback.borrow_mut();
        (*callback)(arg);
        true
    }
}

// =============================================================================
// MANUAL SCHEDULER
// =============================================================================

/// Deterministic scheduler driven by an explicit virtual clock.
///
/// Timers fire only inside [`ManualScheduler::advance`], in due-time order
/// with ties broken by scheduling order. Callbacks may schedule more timers;
/// those fire in the same `advance` if they come due before its deadline.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<ManualQueue>>,
}

#[derive(Default)]
struct ManualQueue {
    now_ms: u64,
    next_seq: u64,
    entries: Vec<ManualEntry>,
}

struct ManualEntry {
    due_ms: u64,
    seq: u64,
    cancelled: Rc<Cell<bool>>,
    callback: Box<dyn FnOnce()>,
}

/// Handle returned by [`ManualScheduler`]. Dropping it cancels the timer.
#[derive(Debug)]
pub struct ManualTimer {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualTimer {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.queue.borrow().now_ms
    }

    /// Timers that are armed and not cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().entries.iter().filter(|entry| !entry.cancelled.get()).count()
    }

    /// Move the clock forward by `ms`, firing every timer that comes due.
    pub fn advance(&self, ms: u64) {
        let deadline = self.now_ms() + ms;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let position = queue
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.due_ms <= deadline)
                    .min_by_key(|(_, entry)| (entry.due_ms, entry.seq))
                    .map(|(index, _)| index);
                position.map(|index| {
                    let entry = queue.entries.swap_remove(index);
                    queue.now_ms = queue.now_ms.max(entry.due_ms);
                    entry
                })
            };
            let Some(entry) = next else {
                break;
            };
            if !entry.cancelled.get() {
                (entry.callback)();
            }
        }
        self.queue.borrow_mut().now_ms = deadline;
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualTimer;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualTimer {
        let mut queue = self.queue.borrow_mut();
        let cancelled = Rc::new(Cell::new(false));
        let seq = queue.next_seq;
        queue.next_seq += 1;
        let due_ms = queue.now_ms + u64::from(delay_ms);
        queue.entries.push(ManualEntry { due_ms, seq, cancelled: Rc::clone(&cancelled), callback });
        ManualTimer { cancelled }
    }
}
