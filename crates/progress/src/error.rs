//! Error types for progress tracking

use thiserror::Error;

/// Result type for progress operations
pub type ProgressResult<T> = Result<T, ProgressError>;

/// Errors that can occur while mutating progress state
#[derive(Debug, Error)]
pub enum ProgressError {
    /// Completion plan length must be at least one day
    #[error("Invalid plan length: {0} days")]
    InvalidPlanLength(u32),

    /// Day index outside the plan
    #[error("Day {day} out of range for a {total}-day plan")]
    DayOutOfRange { day: u32, total: u32 },

    /// Daily goal must be at least one verse
    #[error("Invalid daily goal: {0} verses")]
    InvalidGoal(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_values() {
        let err = ProgressError::DayOutOfRange { day: 31, total: 30 };
        let text = err.to_string();
        assert!(text.contains("31"));
        assert!(text.contains("30"));
    }
}
