use chrono::{DateTime, Duration, Utc};
use std::cell::Cell;

/// Source of "now" for creation timestamps, statistics windows and share
/// timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock for deterministic runs.
#[derive(Debug, Clone)]
pub struct FixedClock {
    at: Cell<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { at: Cell::new(at) }
    }

    pub fn set(&self, at: DateTime<Utc>) {
        self.at.set(at);
    }

    pub fn advance(&self, by: Duration) {
        self.at.set(self.at.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::base_time;

    #[test]
    fn fixed_clock_advances() {
        let clock = FixedClock::new(base_time());
        clock.advance(Duration::hours(2));
        assert_eq!(clock.now(), base_time() + Duration::hours(2));
        clock.set(base_time());
        assert_eq!(clock.now(), base_time());
    }
}
