//! The memorization tracker and its due-today computation
//!
//! Review cadence is a streak-indexed interval table, clamped at the last
//! entry. A verse becomes mastered at three consecutive correct reviews
//! and switches to a flat weekly check-in from then on. A memorized verse
//! that has never been reviewed is due immediately.

use crate::error::{HifzError, HifzResult};
use crate::record::ChapterRecord;
use crate::session::{push_bounded, ReviewMode, ReviewSession};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tilawah_core::{chapter_verse_count, Timestamp, VerseKey};

/// Days until the next review, indexed by current streak (clamped)
pub const REVIEW_INTERVALS: [i64; 5] = [1, 3, 7, 14, 30];

/// Flat check-in cadence for mastered verses, in days
pub const MASTERED_INTERVAL_DAYS: i64 = 7;

/// Aggregate counters across all chapters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HifzStats {
    pub total_memorized: usize,
    pub total_mastered: usize,
    pub total_sessions: usize,
    pub due_count: usize,
}

/// Durable memorization state: per-chapter records plus session history
///
/// Chapter records are created lazily on first interaction and never
/// removed. The whole tracker serializes as one JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HifzTracker {
    chapters: BTreeMap<u16, ChapterRecord>,
    history: Vec<ReviewSession>,
    #[serde(skip)]
    active_session: Option<ReviewSession>,
}

impl HifzTracker {
    /// Creates an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    // ----- mutations ------------------------------------------------------

    /// Marks a verse memorized (idempotent); counts as its first review
    pub fn mark_memorized(&mut self, key: VerseKey) -> HifzResult<()> {
        self.mark_memorized_at(key, Timestamp::now())
    }

    /// [`Self::mark_memorized`] with an explicit clock
    pub fn mark_memorized_at(&mut self, key: VerseKey, now: Timestamp) -> HifzResult<()> {
        let record = self.chapter_mut(key)?;
        if record.mark_memorized(key.verse, now) {
            log::debug!("Memorized {}", key);
        }
        Ok(())
    }

    /// Flags a verse for re-practice without scoring it
    pub fn mark_for_review(&mut self, key: VerseKey) -> HifzResult<()> {
        self.chapter_mut(key)?.mark_for_review(key.verse);
        Ok(())
    }

    /// Records a review outcome and updates the active session counters
    pub fn record_review(&mut self, key: VerseKey, was_correct: bool) -> HifzResult<()> {
        self.record_review_at(key, was_correct, Timestamp::now())
    }

    /// [`Self::record_review`] with an explicit clock
    pub fn record_review_at(
        &mut self,
        key: VerseKey,
        was_correct: bool,
        now: Timestamp,
    ) -> HifzResult<()> {
        self.chapter_mut(key)?
            .record_review(key.verse, was_correct, now);

        if let Some(session) = self.active_session.as_mut() {
            session.verses_reviewed += 1;
            if was_correct {
                session.verses_correct += 1;
            }
        }
        Ok(())
    }

    // ----- sessions -------------------------------------------------------

    /// Starts a practice session, replacing any session left open
    pub fn start_session(&mut self, chapter: u16, mode: ReviewMode) -> HifzResult<&ReviewSession> {
        if chapter_verse_count(chapter).is_none() {
            return Err(HifzError::UnknownChapter(chapter));
        }
        if self.active_session.is_some() {
            log::warn!("Starting a session while one is open; discarding the old one");
        }
        let session = ReviewSession::start(chapter, mode, Timestamp::now());
        Ok(&*self.active_session.insert(session))
    }

    /// Ends the active session, appending it to the bounded history
    pub fn end_session(&mut self) -> HifzResult<ReviewSession> {
        let session = self.active_session.take().ok_or(HifzError::NoActiveSession)?;
        push_bounded(&mut self.history, session.clone());
        Ok(session)
    }

    /// The session currently in progress, if any
    pub fn active_session(&self) -> Option<&ReviewSession> {
        self.active_session.as_ref()
    }

    /// Finished sessions, oldest first, at most 50
    pub fn history(&self) -> &[ReviewSession] {
        &self.history
    }

    // ----- queries --------------------------------------------------------

    /// All verses due for review on `today`
    ///
    /// No ordering guarantee; callers sort for display if they care.
    pub fn due_verses(&self, today: NaiveDate) -> Vec<VerseKey> {
        let mut due = Vec::new();

        for record in self.chapters.values() {
            for (verse, state) in record.iter() {
                let key = VerseKey::new(record.chapter_number, verse);
                match state.last_reviewed {
                    None => {
                        // memorized but never reviewed: due immediately
                        if state.memorized {
                            due.push(key);
                        }
                    }
                    Some(last) => {
                        let days = days_since(last, today);
                        let threshold = if state.is_mastered() {
                            MASTERED_INTERVAL_DAYS
                        } else {
                            let idx = (state.streak as usize).min(REVIEW_INTERVALS.len() - 1);
                            REVIEW_INTERVALS[idx]
                        };
                        if days >= threshold {
                            due.push(key);
                        }
                    }
                }
            }
        }

        due
    }

    /// Number of verses due on `today`
    pub fn due_count(&self, today: NaiveDate) -> usize {
        self.due_verses(today).len()
    }

    /// Memorized verses in one chapter
    pub fn memorized_count(&self, chapter: u16) -> usize {
        self.chapters
            .get(&chapter)
            .map_or(0, ChapterRecord::memorized_count)
    }

    /// Mastered verses in one chapter
    pub fn mastered_count(&self, chapter: u16) -> usize {
        self.chapters
            .get(&chapter)
            .map_or(0, ChapterRecord::mastered_count)
    }

    /// Read-only access to a chapter record
    pub fn chapter(&self, chapter: u16) -> Option<&ChapterRecord> {
        self.chapters.get(&chapter)
    }

    /// Aggregate counters across all chapters
    pub fn stats(&self, today: NaiveDate) -> HifzStats {
        HifzStats {
            total_memorized: self.chapters.values().map(ChapterRecord::memorized_count).sum(),
            total_mastered: self.chapters.values().map(ChapterRecord::mastered_count).sum(),
            total_sessions: self.history.len(),
            due_count: self.due_count(today),
        }
    }

    // ----- internals ------------------------------------------------------

    fn chapter_mut(&mut self, key: VerseKey) -> HifzResult<&mut ChapterRecord> {
        let total = chapter_verse_count(key.chapter)
            .ok_or(HifzError::UnknownChapter(key.chapter))?;
        if key.verse == 0 || key.verse > total {
            return Err(HifzError::VerseOutOfRange {
                chapter: key.chapter,
                verse: key.verse,
            });
        }
        Ok(self
            .chapters
            .entry(key.chapter)
            .or_insert_with(|| ChapterRecord::new(key.chapter, total)))
    }
}

/// Whole calendar days from the date of `last` to `today`
fn days_since(last: Timestamp, today: NaiveDate) -> i64 {
    let last_date = DateTime::<Utc>::from_timestamp_millis(last.as_millis())
        .map(|dt| dt.date_naive())
        .unwrap_or(today);
    (today - last_date).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    /// Midday UTC on a date, as a store timestamp
    fn stamp(d: NaiveDate) -> Timestamp {
        let millis = d
            .and_hms_opt(12, 0, 0)
            .expect("valid time")
            .and_utc()
            .timestamp_millis();
        Timestamp::from_millis(millis)
    }

    #[test]
    fn test_flagged_but_unstamped_verse_is_not_due() {
        let mut tracker = HifzTracker::new();
        tracker.mark_for_review(VerseKey::new(1, 2)).expect("flag");
        assert!(tracker.due_verses(date(2026, 8, 6)).is_empty());
    }

    #[test]
    fn test_memorized_with_no_review_stamp_is_due_immediately() {
        // records imported from older data can carry memorized verses with
        // no review stamp; their first review never happened, so they are
        // due at once
        let json = r#"{
            "chapters": {
                "1": {
                    "chapter_number": 1,
                    "total_verses": 7,
                    "verses": {
                        "5": {
                            "memorized": true,
                            "in_review_queue": false,
                            "streak": 0,
                            "last_reviewed": null
                        }
                    }
                }
            },
            "history": []
        }"#;
        let tracker: HifzTracker = serde_json::from_str(json).expect("deserialize");
        assert_eq!(
            tracker.due_verses(date(2026, 8, 6)),
            vec![VerseKey::new(1, 5)]
        );
    }

    #[test]
    fn test_memorized_verse_follows_streak_one_interval() {
        let mut tracker = HifzTracker::new();
        let today = date(2026, 8, 6);
        tracker
            .mark_memorized_at(VerseKey::new(1, 1), stamp(today))
            .expect("memorize");

        // streak 1 -> interval 3: stamped today, not due today or tomorrow
        assert!(tracker.due_verses(today).is_empty());
        assert!(tracker.due_verses(date(2026, 8, 8)).is_empty());
        assert_eq!(
            tracker.due_verses(date(2026, 8, 9)),
            vec![VerseKey::new(1, 1)]
        );
    }

    #[test]
    fn test_streak_one_interval_is_three_days() {
        let mut tracker = HifzTracker::new();
        let reviewed_on = date(2026, 8, 1);
        tracker
            .mark_memorized_at(VerseKey::new(2, 255), stamp(reviewed_on))
            .expect("memorize");

        // reviewed 2 days ago: not due
        assert!(tracker.due_verses(date(2026, 8, 3)).is_empty());
        // reviewed exactly 3 days ago: due
        assert_eq!(
            tracker.due_verses(date(2026, 8, 4)),
            vec![VerseKey::new(2, 255)]
        );
    }

    #[test]
    fn test_zero_streak_uses_one_day_interval() {
        let mut tracker = HifzTracker::new();
        let key = VerseKey::new(1, 3);
        let day0 = date(2026, 8, 1);
        tracker.mark_memorized_at(key, stamp(day0)).expect("memorize");
        tracker
            .record_review_at(key, false, stamp(day0))
            .expect("review");

        // wrong answer resets the streak; due again the next day
        assert!(tracker.due_verses(day0).is_empty());
        assert_eq!(tracker.due_verses(date(2026, 8, 2)), vec![key]);
    }

    #[test]
    fn test_mastered_moves_to_weekly_cadence() {
        let mut tracker = HifzTracker::new();
        let key = VerseKey::new(1, 1);
        let day0 = date(2026, 8, 1);
        tracker.mark_memorized_at(key, stamp(day0)).expect("memorize");
        tracker.record_review_at(key, true, stamp(day0)).expect("review");
        tracker.record_review_at(key, true, stamp(day0)).expect("review");
        assert_eq!(tracker.mastered_count(1), 1);

        // six days later: not due; seven days later: due
        assert!(tracker.due_verses(date(2026, 8, 7)).is_empty());
        assert_eq!(tracker.due_verses(date(2026, 8, 8)), vec![key]);
    }

    #[test]
    fn test_failed_review_unmasters() {
        let mut tracker = HifzTracker::new();
        let key = VerseKey::new(1, 1);
        tracker.mark_memorized(key).expect("memorize");
        tracker.record_review(key, true).expect("review");
        tracker.record_review(key, true).expect("review");
        assert_eq!(tracker.mastered_count(1), 1);

        tracker.record_review(key, false).expect("review");
        assert_eq!(tracker.mastered_count(1), 0);
        let state = tracker
            .chapter(1)
            .and_then(|c| c.verse_state(1))
            .expect("state");
        assert_eq!(state.streak, 0);
    }

    #[test]
    fn test_interval_table_clamps_at_last_entry() {
        // an un-mastered verse cannot exceed streak 2 in practice, but a
        // record imported from older data can; the table must clamp
        let mut tracker = HifzTracker::new();
        let key = VerseKey::new(1, 4);
        let day0 = date(2026, 1, 1);
        tracker.mark_for_review(key).expect("flag");
        for _ in 0..8 {
            tracker.record_review_at(key, true, stamp(day0)).expect("review");
        }

        // streak 8, not memorized so not mastered: clamped interval = 30
        assert!(tracker.due_verses(date(2026, 1, 30)).is_empty());
        assert_eq!(tracker.due_verses(date(2026, 1, 31)), vec![key]);
    }

    #[test]
    fn test_due_spans_multiple_chapters() {
        let mut tracker = HifzTracker::new();
        let old = stamp(date(2026, 1, 1));
        tracker.mark_memorized_at(VerseKey::new(1, 1), old).expect("memorize");
        tracker.mark_memorized_at(VerseKey::new(114, 1), old).expect("memorize");

        let due = tracker.due_verses(date(2026, 8, 6));
        assert_eq!(due.len(), 2);
        assert!(due.contains(&VerseKey::new(1, 1)));
        assert!(due.contains(&VerseKey::new(114, 1)));
    }

    #[test]
    fn test_rejects_unknown_chapter_and_verse() {
        let mut tracker = HifzTracker::new();
        assert!(matches!(
            tracker.mark_memorized(VerseKey::new(115, 1)),
            Err(HifzError::UnknownChapter(115))
        ));
        assert!(matches!(
            tracker.mark_memorized(VerseKey::new(1, 8)),
            Err(HifzError::VerseOutOfRange { chapter: 1, verse: 8 })
        ));
    }

    #[test]
    fn test_session_lifecycle_updates_history() {
        let mut tracker = HifzTracker::new();
        tracker.start_session(1, ReviewMode::Test).expect("start");
        tracker.record_review(VerseKey::new(1, 1), true).expect("review");
        tracker.record_review(VerseKey::new(1, 2), false).expect("review");

        let session = tracker.end_session().expect("end");
        assert_eq!(session.verses_reviewed, 2);
        assert_eq!(session.verses_correct, 1);
        assert_eq!(tracker.history().len(), 1);
        assert!(tracker.active_session().is_none());
    }

    #[test]
    fn test_end_session_without_active_fails() {
        let mut tracker = HifzTracker::new();
        assert!(matches!(
            tracker.end_session(),
            Err(HifzError::NoActiveSession)
        ));
    }

    #[test]
    fn test_reviews_outside_sessions_do_not_count_toward_one() {
        let mut tracker = HifzTracker::new();
        tracker.record_review(VerseKey::new(1, 1), true).expect("review");
        tracker.start_session(1, ReviewMode::Review).expect("start");
        let session = tracker.end_session().expect("end");
        assert_eq!(session.verses_reviewed, 0);
    }

    #[test]
    fn test_stats_aggregate() {
        let mut tracker = HifzTracker::new();
        let old = stamp(date(2026, 1, 1));
        tracker.mark_memorized_at(VerseKey::new(1, 1), old).expect("memorize");
        tracker.mark_memorized_at(VerseKey::new(1, 2), old).expect("memorize");
        tracker.start_session(1, ReviewMode::Learn).expect("start");
        tracker.end_session().expect("end");

        let stats = tracker.stats(date(2026, 8, 6));
        assert_eq!(stats.total_memorized, 2);
        assert_eq!(stats.total_mastered, 0);
        assert_eq!(stats.total_sessions, 1);
        assert_eq!(stats.due_count, 2);
    }

    #[test]
    fn test_tracker_serde_roundtrip_drops_active_session() {
        let mut tracker = HifzTracker::new();
        tracker.mark_memorized(VerseKey::new(1, 1)).expect("memorize");
        tracker.start_session(1, ReviewMode::Learn).expect("start");

        let json = serde_json::to_string(&tracker).expect("serialize");
        let back: HifzTracker = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.memorized_count(1), 1);
        // the in-flight session is ephemeral
        assert!(back.active_session().is_none());
    }
}
