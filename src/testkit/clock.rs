//! Controllable time.

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

use crate::port::TimeService;

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock() = now;
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }
}

impl TimeService for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}
