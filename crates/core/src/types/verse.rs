//! Verse and chapter domain models
//!
//! A verse is the atomic addressable unit of the text. It carries two
//! addresses: `(chapter_number, number_in_chapter)` for chapter-oriented
//! views and `global_number` (1..=6236) for page-oriented views and audio
//! clip lookup. Pages may span chapter boundaries.

use crate::types::Validator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Total number of chapters in the text
pub const CHAPTER_COUNT: u16 = 114;

/// Total number of verses in the text
pub const VERSE_COUNT: u32 = 6236;

/// Total pages in the standard 15-line layout
pub const PAGE_COUNT: u16 = 604;

/// A single verse, immutable once fetched from the content source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verse {
    /// Chapter this verse belongs to (1..=114)
    pub chapter_number: u16,
    /// Position within the chapter, 1-based
    pub number_in_chapter: u16,
    /// Global position across the whole text, 1-based
    pub global_number: u32,
    /// The verse text
    pub text: String,
    /// Page the verse appears on in the standard layout
    pub page: u16,
    /// Juz (reading-section) the verse belongs to
    pub juz: u8,
}

impl Verse {
    /// Returns the scheduler/bookmark address of this verse
    pub fn key(&self) -> VerseKey {
        VerseKey {
            chapter: self.chapter_number,
            verse: self.number_in_chapter,
        }
    }
}

impl Validator for Verse {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.chapter_number == 0 || self.chapter_number > CHAPTER_COUNT {
            errors.push(format!("chapter_number {} out of range", self.chapter_number));
        }
        if self.number_in_chapter == 0 {
            errors.push("number_in_chapter must be 1-based".to_string());
        }
        if self.global_number == 0 || self.global_number > VERSE_COUNT {
            errors.push(format!("global_number {} out of range", self.global_number));
        }
        if self.text.is_empty() {
            errors.push("text must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Address of a verse as `(chapter, position-in-chapter)`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct VerseKey {
    pub chapter: u16,
    pub verse: u16,
}

impl VerseKey {
    /// Creates a verse key
    pub fn new(chapter: u16, verse: u16) -> Self {
        Self { chapter, verse }
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

/// Where a chapter was revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Revelation {
    Meccan,
    Medinan,
}

/// Static catalog entry for a chapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterInfo {
    pub number: u16,
    /// Arabic name
    pub name: String,
    pub english_name: String,
    pub verse_count: u16,
    pub revelation: Revelation,
}

impl ChapterInfo {
    /// Creates a catalog entry
    pub fn new(
        number: u16,
        name: impl Into<String>,
        english_name: impl Into<String>,
        verse_count: u16,
        revelation: Revelation,
    ) -> Self {
        Self {
            number,
            name: name.into(),
            english_name: english_name.into(),
            verse_count,
            revelation,
        }
    }
}
