//! Global reading progress
//!
//! A singleton record mutated on every verse-level read event. The streak
//! update rule itself lives in the progress crate's aggregator; this type
//! only carries the state and the invariant checks.

use crate::types::Validator;
use serde::{Deserialize, Serialize};

/// Global reading position, streak and daily counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingProgress {
    /// Chapter of the most recently read verse
    pub last_chapter: u16,
    /// Position-in-chapter of the most recently read verse
    pub last_verse: u16,
    /// Consecutive active days, including today if active
    pub streak_days: u32,
    /// Calendar date (ISO `YYYY-MM-DD`) of the last recorded activity
    pub last_active_date: String,
    /// Lifetime verses read
    pub total_verses_read: u64,
    /// Verses read on `today_date`
    pub today_verses_read: u32,
    /// Calendar date the `today_verses_read` counter belongs to
    pub today_date: String,
}

impl ReadingProgress {
    /// Creates an empty record with no activity
    pub fn new() -> Self {
        Self {
            last_chapter: 1,
            last_verse: 1,
            streak_days: 0,
            last_active_date: String::new(),
            total_verses_read: 0,
            today_verses_read: 0,
            today_date: String::new(),
        }
    }

    /// Returns true if no activity has ever been recorded
    pub fn is_fresh(&self) -> bool {
        self.last_active_date.is_empty() && self.total_verses_read == 0
    }
}

impl Default for ReadingProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for ReadingProgress {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.last_chapter == 0 {
            errors.push("last_chapter must be 1-based".to_string());
        }
        if self.last_verse == 0 {
            errors.push("last_verse must be 1-based".to_string());
        }
        if u64::from(self.today_verses_read) > self.total_verses_read {
            errors.push("today_verses_read exceeds total_verses_read".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
