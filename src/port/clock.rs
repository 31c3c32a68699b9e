//! Time port.
//!
//! Everything that compares against "now" (bet cutoffs, poll bookkeeping)
//! reads the time through [`TimeService`] so tests can pin the clock.

use chrono::{DateTime, Utc};

pub trait TimeService: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeService for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
