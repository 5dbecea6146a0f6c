//! Static chapter size table
//!
//! Verse counts per chapter, indexed by `chapter_number - 1`. The text is
//! fixed, so this lives here rather than behind the content API; the
//! memorization tracker uses it to size chapter records without a network
//! round trip.

use crate::types::verse::{CHAPTER_COUNT, VERSE_COUNT};

/// Verses per chapter, chapters 1..=114
pub const CHAPTER_VERSE_COUNTS: [u16; 114] = [
    7, 286, 200, 176, 120, 165, 206, 75, 129, 109, 123, 111, 43, 52, 99, 128, 111, 110, 98, 135,
    112, 78, 118, 64, 77, 227, 93, 88, 69, 60, 34, 30, 73, 54, 45, 83, 182, 88, 75, 85, 54, 53,
    89, 59, 37, 35, 38, 29, 18, 45, 60, 49, 62, 55, 78, 96, 29, 22, 24, 13, 14, 11, 11, 18, 12,
    12, 30, 52, 52, 44, 28, 28, 20, 56, 40, 31, 50, 40, 46, 42, 29, 19, 36, 25, 22, 17, 19, 26,
    30, 20, 15, 21, 11, 8, 8, 19, 5, 8, 8, 11, 11, 8, 3, 9, 5, 4, 7, 3, 6, 3, 5, 4, 5, 6,
];

/// Returns the number of verses in a chapter, `None` for an invalid number
pub fn chapter_verse_count(chapter: u16) -> Option<u16> {
    if chapter == 0 || chapter > CHAPTER_COUNT {
        return None;
    }
    Some(CHAPTER_VERSE_COUNTS[usize::from(chapter) - 1])
}
