//! Guarded slot for the repeating display tick.
//!
//! The slot owns at most one scheduled task. Arming an armed slot is a no-op,
//! so one running period can never end up with two overlapping intervals, and
//! disarming drops the handle, which cancels the underlying timer.

use gloo_timers::callback::Interval;

pub struct TickSlot<H> {
    handle: Option<H>,
}

/// Slot holding a browser `setInterval` registration.
pub type IntervalSlot = TickSlot<Interval>;

impl<H> TickSlot<H> {
    pub fn new() -> Self {
        Self { handle: None }
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Schedule a tick unless one is already armed. `schedule` is only called
    /// when the slot is empty. Returns whether a new tick was scheduled.
    pub fn arm(&mut self, schedule: impl FnOnce() -> H) -> bool {
        if self.is_armed() {
            return false;
        }
        self.handle = Some(schedule());
        true
    }

    /// Cancel the armed tick, if any. Returns whether one was cancelled.
    pub fn disarm(&mut self) -> bool {
        self.handle.take().is_some()
    }

    /// Bring the slot in line with the run state: arm while running, disarm
    /// otherwise. Returns whether a tick was scheduled or cancelled.
    pub fn sync(&mut self, running: bool, schedule: impl FnOnce() -> H) -> bool {
        if running {
            self.arm(schedule)
        } else {
            self.disarm()
        }
    }
}

impl<H> Default for TickSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}
