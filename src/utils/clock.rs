use std::cell::Cell;
use std::time::Duration;

use chrono::{Local, NaiveDateTime, TimeDelta};

/// Provides the current local wall time and a way to wait. Timers and the
/// daily reset read time only through this trait so they can be driven by
/// a [`ManualClock`] in tests.
pub trait Clock {
    /// Current local wall-clock time, second precision or finer.
    fn now(&self) -> NaiveDateTime;

    fn sleep(&self, duration: Duration);
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Clock whose time only moves when told to. `sleep` advances it by the
/// requested duration and returns immediately.
pub struct ManualClock {
    now: Cell<NaiveDateTime>,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now);
    }

    pub fn advance(&self, delta: TimeDelta) {
        self.now.set(self.now.get() + delta);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) {
        self.advance(TimeDelta::milliseconds(duration.as_millis() as i64));
    }
}
