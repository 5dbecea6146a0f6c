//! Day-over-day reading streak aggregation
//!
//! The streak rule: first activity on a new calendar day extends the
//! streak if the previous active day was exactly yesterday, otherwise
//! resets it to 1. Same-day calls are naturally idempotent, so callers
//! need to debounce only for performance, not correctness.

use chrono::NaiveDate;
use tilawah_core::{ReadingProgress, VerseKey};

/// Owns the global [`ReadingProgress`] record and applies the streak and
/// counter rules on every read event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressTracker {
    progress: ReadingProgress,
}

impl ProgressTracker {
    /// Starts from an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes from a persisted record
    pub fn from_progress(progress: ReadingProgress) -> Self {
        Self { progress }
    }

    /// The current record, for display and persistence
    pub fn progress(&self) -> &ReadingProgress {
        &self.progress
    }

    /// Consumes the tracker, yielding the record
    pub fn into_progress(self) -> ReadingProgress {
        self.progress
    }

    /// Applies the streak rule for activity on `date`
    ///
    /// - same day as the last activity: no change
    /// - exactly one day later: streak extends
    /// - anything else (gap, clock skew, first ever): streak resets to 1
    pub fn record_activity(&mut self, date: NaiveDate) {
        let iso = date.to_string();
        if self.progress.last_active_date == iso {
            return;
        }

        let extends = parse_date(&self.progress.last_active_date)
            .and_then(|prev| prev.succ_opt())
            .map(|next| next == date)
            .unwrap_or(false);

        self.progress.streak_days = if extends {
            self.progress.streak_days + 1
        } else {
            1
        };
        self.progress.last_active_date = iso;
    }

    /// Records that one verse was read on `date`
    ///
    /// Updates the last-read position, the lifetime counter, the
    /// date-rolled daily counter, and the streak.
    pub fn record_verse_read(&mut self, key: VerseKey, date: NaiveDate) {
        self.record_activity(date);

        let iso = date.to_string();
        if self.progress.today_date != iso {
            self.progress.today_date = iso;
            self.progress.today_verses_read = 0;
        }

        self.progress.last_chapter = key.chapter;
        self.progress.last_verse = key.verse;
        self.progress.today_verses_read += 1;
        self.progress.total_verses_read += 1;
    }

    /// Verses read on `date`, zero for any other day than the counter's
    pub fn verses_read_on(&self, date: NaiveDate) -> u32 {
        if self.progress.today_date == date.to_string() {
            self.progress.today_verses_read
        } else {
            0
        }
    }
}

fn parse_date(iso: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d").ok()
}
