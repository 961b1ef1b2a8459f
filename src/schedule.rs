//! Cancelable deferred-tick scheduling
//!
//! The simulation advances on "run one tick after a short delay" callbacks
//! that must be cancelable at any time. The trait keeps the core
//! independent of any particular event loop; hosts adapt their own timer
//! facility behind it. `TimerScheduler` is the wall-clock adapter used by
//! the headless binary.

use std::time::{Duration, Instant};

/// Identifies one scheduled wake-up so it can be canceled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(pub u64);

pub trait TickScheduler {
    /// Arrange for the host to call back after at least `delay`
    fn schedule(&mut self, delay: Duration) -> TaskHandle;

    /// Cancel a pending wake-up. Canceling a handle that already fired or
    /// was canceled before is a no-op.
    fn cancel(&mut self, handle: TaskHandle);
}

/// Wall-clock scheduler for hosts that poll: remembers the single next due
/// time and reports once it has passed.
#[derive(Debug, Default)]
pub struct TimerScheduler {
    next_handle: u64,
    pending: Option<(TaskHandle, Instant)>,
}

impl TimerScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume and return the pending wake-up if its delay has elapsed
    pub fn fire_due(&mut self) -> Option<TaskHandle> {
        match self.pending {
            Some((handle, due)) if Instant::now() >= due => {
                self.pending = None;
                Some(handle)
            }
            _ => None,
        }
    }

    /// Time remaining until the pending wake-up, if one is scheduled
    pub fn time_until_due(&self) -> Option<Duration> {
        self.pending
            .map(|(_, due)| due.saturating_duration_since(Instant::now()))
    }
}

impl TickScheduler for TimerScheduler {
    fn schedule(&mut self, delay: Duration) -> TaskHandle {
        self.next_handle += 1;
        let handle = TaskHandle(self.next_handle);
        self.pending = Some((handle, Instant::now() + delay));
        handle
    }

    fn cancel(&mut self, handle: TaskHandle) {
        if matches!(self.pending, Some((pending, _)) if pending == handle) {
            self.pending = None;
        }
    }
}
