//! Push retry policy
//!
//! Failed pushes are retried on later ticks with exponential backoff.
//! Nothing here sleeps; the policy only computes how long to wait, and the
//! engine compares that against the tick clock.

use tilawah_core::Duration;

/// Exponential backoff schedule for re-pushing after failures
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    initial_delay: Duration,
    max_delay: Duration,
    multiplier: f64,
}

impl RetryPolicy {
    /// Creates a policy starting at `initial_delay`
    pub fn new(initial_delay: Duration) -> Self {
        Self {
            initial_delay,
            max_delay: Duration::from_minutes(30),
            multiplier: 2.0,
        }
    }

    /// Sets the delay cap
    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Sets the backoff multiplier
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Delay before retrying after `failures` consecutive failures
    ///
    /// Zero failures means no wait; each further failure doubles the
    /// delay (by default), capped at the max.
    pub fn delay_after(&self, failures: usize) -> Duration {
        if failures == 0 {
            return Duration::ZERO;
        }
        let base = self.initial_delay.as_millis() as f64
            * self.multiplier.powi((failures - 1) as i32);
        let capped = base.min(self.max_delay.as_millis() as f64);
        Duration::from_millis(capped as u64)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Duration::from_seconds(30))
    }
}
