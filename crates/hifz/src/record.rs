//! Per-chapter memorization records
//!
//! Each verse has exactly one [`VerseState`] record holding its flags,
//! streak and review stamp together, so the pieces cannot drift apart.
//! "Mastered" is derived from the streak rather than stored, which makes
//! `mastered ⊆ memorized` and `streak >= 3 <=> mastered` hold by
//! construction.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tilawah_core::Timestamp;

/// Consecutive correct reviews required before a verse counts as mastered
pub const MASTERY_STREAK: u32 = 3;

/// Spaced-repetition state for one verse
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerseState {
    /// Marked memorized at least once
    pub memorized: bool,
    /// Flagged for re-practice
    pub in_review_queue: bool,
    /// Consecutive correct reviews
    pub streak: u32,
    /// When the verse was last reviewed or first memorized
    pub last_reviewed: Option<Timestamp>,
}

impl VerseState {
    /// A verse is mastered once it is memorized and its streak reaches
    /// [`MASTERY_STREAK`]
    pub fn is_mastered(&self) -> bool {
        self.memorized && self.streak >= MASTERY_STREAK
    }
}

/// All memorization state for one chapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterRecord {
    pub chapter_number: u16,
    pub total_verses: u16,
    verses: BTreeMap<u16, VerseState>,
}

impl ChapterRecord {
    /// Creates an empty record for a chapter of `total_verses` verses
    pub fn new(chapter_number: u16, total_verses: u16) -> Self {
        Self {
            chapter_number,
            total_verses,
            verses: BTreeMap::new(),
        }
    }

    /// Marks a verse memorized; enqueues it for review and counts the
    /// memorization as the first successful review
    ///
    /// Idempotent: re-marking an already memorized verse changes nothing.
    /// Returns true if the verse was newly memorized.
    pub fn mark_memorized(&mut self, verse: u16, now: Timestamp) -> bool {
        let state = self.verses.entry(verse).or_default();
        if state.memorized {
            return false;
        }
        state.memorized = true;
        state.in_review_queue = true;
        state.streak += 1;
        state.last_reviewed = Some(now);
        true
    }

    /// Flags a verse for re-practice without scoring a review
    ///
    /// Does not touch the streak or the review stamp; this is a manual
    /// re-flag, distinct from a scored review.
    pub fn mark_for_review(&mut self, verse: u16) {
        self.verses.entry(verse).or_default().in_review_queue = true;
    }

    /// Records a scored review outcome
    pub fn record_review(&mut self, verse: u16, was_correct: bool, now: Timestamp) {
        let state = self.verses.entry(verse).or_default();
        if was_correct {
            state.streak += 1;
            state.in_review_queue = false;
        } else {
            state.streak = 0;
            state.in_review_queue = true;
        }
        state.last_reviewed = Some(now);
    }

    /// Looks up the state of one verse
    pub fn verse_state(&self, verse: u16) -> Option<&VerseState> {
        self.verses.get(&verse)
    }

    /// Iterates all verses with any recorded state
    pub fn iter(&self) -> impl Iterator<Item = (u16, &VerseState)> {
        self.verses.iter().map(|(&verse, state)| (verse, state))
    }

    /// Number of memorized verses
    pub fn memorized_count(&self) -> usize {
        self.verses.values().filter(|s| s.memorized).count()
    }

    /// Number of mastered verses
    pub fn mastered_count(&self) -> usize {
        self.verses.values().filter(|s| s.is_mastered()).count()
    }

    /// Verses currently flagged for re-practice
    pub fn review_queue(&self) -> Vec<u16> {
        self.verses
            .iter()
            .filter(|(_, s)| s.in_review_queue)
            .map(|(&v, _)| v)
            .collect()
    }

    /// Fraction of the chapter memorized, 0.0..=1.0
    pub fn completion(&self) -> f64 {
        if self.total_verses == 0 {
            return 0.0;
        }
        self.memorized_count() as f64 / f64::from(self.total_verses)
    }
}
