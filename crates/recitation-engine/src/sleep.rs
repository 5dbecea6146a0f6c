//! Sleep timer
//!
//! A deadline checked on the host's periodic tick. Expiry routes through
//! the sequencer's single `stop()` path; there is no parallel teardown.

use tilawah_core::{Duration, Timestamp};

/// Countdown that force-stops playback when it reaches zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepTimer {
    deadline: Timestamp,
}

impl SleepTimer {
    /// Starts a timer `minutes` from `now`
    pub fn starting_at(now: Timestamp, minutes: u64) -> Self {
        Self {
            deadline: now.plus(Duration::from_minutes(minutes)),
        }
    }

    /// Remaining time at `now`, zero once expired
    pub fn remaining(&self, now: Timestamp) -> Duration {
        self.deadline.since(now)
    }

    /// Returns true once the deadline has passed
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now >= self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_counts_down() {
        let start = Timestamp::from_millis(0);
        let timer = SleepTimer::starting_at(start, 10);
        assert_eq!(timer.remaining(start).as_minutes(), 10);

        let later = Timestamp::from_millis(4 * 60_000);
        assert_eq!(timer.remaining(later).as_minutes(), 6);
    }

    #[test]
    fn test_not_expired_before_deadline() {
        let start = Timestamp::from_millis(0);
        let timer = SleepTimer::starting_at(start, 1);
        assert!(!timer.is_expired(Timestamp::from_millis(59_999)));
    }

    #[test]
    fn test_expired_at_deadline() {
        let start = Timestamp::from_millis(0);
        let timer = SleepTimer::starting_at(start, 1);
        assert!(timer.is_expired(Timestamp::from_millis(60_000)));
        assert_eq!(timer.remaining(Timestamp::from_millis(90_000)), Duration::ZERO);
    }
}
