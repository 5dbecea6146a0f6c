pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, ErrorSeverity, Result};
pub use types::{
    chapter_verse_count, reciter_catalog, Bookmark, ChapterInfo, Duration, ReadingProgress,
    Reciter, ReciterId, Revelation, Timestamp, Validator, Verse, VerseKey, CHAPTER_COUNT,
    CHAPTER_VERSE_COUNTS, PAGE_COUNT, VERSE_COUNT,
};
