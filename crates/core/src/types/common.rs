//! Shared time primitives and validation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp in milliseconds since Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a timestamp for the current moment
    ///
    /// Falls back to timestamp 0 if system time is somehow before
    /// UNIX_EPOCH instead of panicking.
    pub fn now() -> Self {
        Self(
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_else(|_| std::time::Duration::from_secs(0))
                .as_millis() as i64,
        )
    }

    /// Creates a timestamp from milliseconds since Unix epoch
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns the timestamp as milliseconds since Unix epoch
    pub fn as_millis(&self) -> i64 {
        self.0
    }

    /// Returns the timestamp as seconds since Unix epoch
    pub fn as_seconds(&self) -> i64 {
        self.0 / 1000
    }

    /// Milliseconds elapsed from `earlier` to `self`, clamped at zero
    pub fn since(&self, earlier: Timestamp) -> Duration {
        Duration::from_millis((self.0 - earlier.0).max(0) as u64)
    }

    /// Returns this timestamp shifted forward by `duration`
    pub fn plus(&self, duration: Duration) -> Timestamp {
        Self(self.0 + duration.as_millis() as i64)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Duration in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Duration(u64);

impl Duration {
    /// Zero duration constant
    pub const ZERO: Self = Self(0);

    /// Creates a duration from milliseconds
    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Creates a duration from seconds
    pub fn from_seconds(seconds: u64) -> Self {
        Self(seconds * 1000)
    }

    /// Creates a duration from whole minutes
    pub fn from_minutes(minutes: u64) -> Self {
        Self(minutes * 60_000)
    }

    /// Returns the duration in milliseconds
    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// Returns the duration in seconds
    pub fn as_seconds(&self) -> u64 {
        self.0 / 1000
    }

    /// Returns the duration in whole minutes
    pub fn as_minutes(&self) -> u64 {
        self.0 / 60_000
    }

    /// Returns true if the duration is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Formats as M:SS, the countdown format shown in the sleep timer
    pub fn as_clock(&self) -> String {
        let total = self.as_seconds();
        format!("{}:{:02}", total / 60, total % 60)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_clock())
    }
}

impl From<std::time::Duration> for Duration {
    fn from(d: std::time::Duration) -> Self {
        Self(d.as_millis() as u64)
    }
}

/// Trait for types that can validate themselves
pub trait Validator {
    /// Validates the instance and returns errors if invalid
    fn validate(&self) -> Result<(), Vec<String>>;

    /// Returns true if the instance is valid
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
