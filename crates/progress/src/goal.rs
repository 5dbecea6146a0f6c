//! Daily reading goal

use crate::error::{ProgressError, ProgressResult};
use serde::{Deserialize, Serialize};

/// Verses-per-day target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyGoal {
    verses_per_day: u32,
}

impl DailyGoal {
    /// Creates a goal; must be at least one verse
    pub fn new(verses_per_day: u32) -> ProgressResult<Self> {
        if verses_per_day == 0 {
            return Err(ProgressError::InvalidGoal(verses_per_day));
        }
        Ok(Self { verses_per_day })
    }

    /// The configured target
    pub fn target(&self) -> u32 {
        self.verses_per_day
    }

    /// True once `verses_read_today` reaches the target
    pub fn is_met(&self, verses_read_today: u32) -> bool {
        verses_read_today >= self.verses_per_day
    }

    /// Fraction of the goal reached, capped at 1.0
    pub fn fraction(&self, verses_read_today: u32) -> f64 {
        (f64::from(verses_read_today) / f64::from(self.verses_per_day)).min(1.0)
    }
}

impl Default for DailyGoal {
    fn default() -> Self {
        Self { verses_per_day: 10 }
    }
}
