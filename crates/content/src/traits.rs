//! Content source contract

use crate::error::ContentResult;
use tilawah_core::Verse;

/// Read-only verse text provider
///
/// Implementations return verses ordered by position-in-chapter for
/// chapter fetches and by global number for page fetches; pages may span
/// chapter boundaries.
pub trait ContentSource: Send + Sync {
    /// All verses of one chapter
    fn chapter_verses(&self, chapter: u16) -> ContentResult<Vec<Verse>>;

    /// All verses on one page of the standard layout
    fn page_verses(&self, page: u16) -> ContentResult<Vec<Verse>>;
}
