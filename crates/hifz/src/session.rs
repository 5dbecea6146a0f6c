//! Review sessions and their bounded history

use serde::{Deserialize, Serialize};
use tilawah_core::Timestamp;
use uuid::Uuid;

/// How many finished sessions the history keeps
pub const SESSION_HISTORY_LIMIT: usize = 50;

/// What kind of practice a session is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewMode {
    /// Text visible, building familiarity
    Learn,
    /// Partially hidden, recalling with hints
    Review,
    /// Fully hidden, scored recall
    Test,
}

/// One sitting of memorization practice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSession {
    pub id: String,
    pub chapter_number: u16,
    pub started_at: Timestamp,
    pub verses_reviewed: u32,
    pub verses_correct: u32,
    pub mode: ReviewMode,
}

impl ReviewSession {
    /// Starts a session for a chapter
    pub fn start(chapter_number: u16, mode: ReviewMode, now: Timestamp) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            chapter_number,
            started_at: now,
            verses_reviewed: 0,
            verses_correct: 0,
            mode,
        }
    }

    /// Accuracy over the session, 0.0..=1.0
    pub fn accuracy(&self) -> f64 {
        if self.verses_reviewed == 0 {
            return 0.0;
        }
        f64::from(self.verses_correct) / f64::from(self.verses_reviewed)
    }
}

/// Appends a finished session, trimming the history to the last
/// [`SESSION_HISTORY_LIMIT`] entries
pub fn push_bounded(history: &mut Vec<ReviewSession>, session: ReviewSession) {
    history.push(session);
    if history.len() > SESSION_HISTORY_LIMIT {
        let excess = history.len() - SESSION_HISTORY_LIMIT;
        history.drain(..excess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(n: u32) -> ReviewSession {
        let mut s = ReviewSession::start(1, ReviewMode::Test, Timestamp::from_millis(0));
        s.verses_reviewed = n;
        s
    }

    #[test]
    fn test_start_has_fresh_counters() {
        let s = ReviewSession::start(36, ReviewMode::Learn, Timestamp::from_millis(5));
        assert_eq!(s.chapter_number, 36);
        assert_eq!(s.verses_reviewed, 0);
        assert_eq!(s.verses_correct, 0);
        assert!(!s.id.is_empty());
    }

    #[test]
    fn test_session_ids_are_unique() {
        let a = ReviewSession::start(1, ReviewMode::Test, Timestamp::from_millis(0));
        let b = ReviewSession::start(1, ReviewMode::Test, Timestamp::from_millis(0));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_accuracy() {
        let mut s = session(10);
        s.verses_correct = 7;
        assert!((s.accuracy() - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_accuracy_empty_session() {
        assert_eq!(session(0).accuracy(), 0.0);
    }

    #[test]
    fn test_history_is_bounded_to_fifty() {
        let mut history = Vec::new();
        for i in 0..60 {
            push_bounded(&mut history, session(i));
        }
        assert_eq!(history.len(), SESSION_HISTORY_LIMIT);
        // oldest entries were dropped
        assert_eq!(history.first().map(|s| s.verses_reviewed), Some(10));
        assert_eq!(history.last().map(|s| s.verses_reviewed), Some(59));
    }
}
