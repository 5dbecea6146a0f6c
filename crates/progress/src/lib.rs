//! Reading progress for Tilawah
//!
//! Everything the reading surface records about the user: the day-streak
//! aggregator, the date-keyed reading timer, the daily goal, the
//! completion plan and bookmarks. The memorization tracker is a separate
//! crate; this one never reaches into it.

mod bookmarks;
mod error;
mod goal;
mod plan;
mod streak;
mod timer;

pub use bookmarks::BookmarkList;
pub use error::{ProgressError, ProgressResult};
pub use goal::DailyGoal;
pub use plan::CompletionPlan;
pub use streak::ProgressTracker;
pub use timer::{ReadingTimeLog, ReadingTimer};
