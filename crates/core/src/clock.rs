//! Clock module - wall-clock sampling and periodic timers
//!
//! All timed subsystems read time through the [`Clock`] trait as a
//! [`Duration`] since the session started. The binary uses [`SystemClock`];
//! tests drive a [`ManualClock`] so timer cadence can be checked without
//! sleeping.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of "time since session start".
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall-clock time measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// "Last fired at" timestamp for a periodic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    last: Duration,
}

impl Timer {
    /// Create a timer that last fired at `now`.
    pub fn new(now: Duration) -> Self {
        Self { last: now }
    }

    /// True when at least `period` has passed since the last reset.
    pub fn has_elapsed(&self, now: Duration, period: Duration) -> bool {
        now.saturating_sub(self.last) >= period
    }

    pub fn reset(&mut self, now: Duration) {
        self.last = now;
    }

    /// Fire-and-reset in one step.
    pub fn poll(&mut self, now: Duration, period: Duration) -> bool {
        if self.has_elapsed(now, period) {
            self.reset(now);
            true
        } else {
            false
        }
    }
}
