//! Manually driven clock

use crate::core_notes::{Clock, Timestamp};
use chrono::{DateTime, Duration, Utc};
use std::sync::{Mutex, PoisonError};

/// 2024-01-01T00:00:00Z
pub fn fixed_instant() -> Timestamp {
    DateTime::<Utc>::default() + Duration::seconds(1_704_067_200)
}

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Timestamp>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Move the clock by `delta`; negative values move it backwards
    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += delta;
    }

    pub fn set(&self, instant: Timestamp) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = instant;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(fixed_instant())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_moves_only_when_told() {
        let clock = ManualClock::default();
        assert_eq!(clock.now(), fixed_instant());
        assert_eq!(clock.now(), clock.now());

        clock.advance(Duration::seconds(90));
        assert_eq!(clock.now(), fixed_instant() + Duration::seconds(90));

        clock.advance(Duration::seconds(-120));
        assert!(clock.now() < fixed_instant());

        clock.set(fixed_instant());
        assert_eq!(clock.now(), fixed_instant());
    }

    #[test]
    fn test_fixed_instant_is_new_year_2024() {
        assert_eq!(fixed_instant().to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }
}
