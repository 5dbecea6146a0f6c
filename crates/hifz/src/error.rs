//! Error types for the memorization tracker

use thiserror::Error;

/// Result type for memorization operations
pub type HifzResult<T> = Result<T, HifzError>;

/// Errors that can occur while mutating memorization state
#[derive(Debug, Error)]
pub enum HifzError {
    /// Chapter number outside 1..=114
    #[error("Unknown chapter: {0}")]
    UnknownChapter(u16),

    /// Verse position outside the chapter
    #[error("Verse {verse} out of range for chapter {chapter}")]
    VerseOutOfRange { chapter: u16, verse: u16 },

    /// Session operation without an active session
    #[error("No review session is active")]
    NoActiveSession,

    /// Serialization error while loading or saving the store
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
