//! Memorization (hifz) tracking with spaced repetition
//!
//! Tracks per-verse memorization state, schedules reviews on a
//! streak-indexed interval table, and keeps a bounded history of practice
//! sessions. The tracker is the only mutation path into the records, which
//! is what keeps the mastery invariants from drifting.

mod error;
mod record;
mod scheduler;
mod session;

pub use error::{HifzError, HifzResult};
pub use record::{ChapterRecord, VerseState, MASTERY_STREAK};
pub use scheduler::{
    HifzStats, HifzTracker, MASTERED_INTERVAL_DAYS, REVIEW_INTERVALS,
};
pub use session::{ReviewMode, ReviewSession, SESSION_HISTORY_LIMIT};
