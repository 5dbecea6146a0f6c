//! Repeat policy
//!
//! Repeat mode changes take effect at the next end-of-clip boundary. Range
//! endpoints are global verse numbers; they are resolved to sequence
//! indices once, when a session starts or the mode is set, never rescanned
//! per loop iteration. A range that fails to resolve stops playback at the
//! boundary instead of guessing.

use serde::{Deserialize, Serialize};
use tilawah_core::Verse;

/// What happens when a clip (or the whole sequence) finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Play through once and stop
    Off,
    /// Loop the verse the session started on
    SingleVerse,
    /// Loop the whole sequence from the top
    WholeSequence,
    /// Loop a sub-range, endpoints given as global verse numbers
    Range { start: u32, end: u32 },
}

impl Default for RepeatMode {
    fn default() -> Self {
        Self::Off
    }
}

/// A repeat range resolved to indices of the active sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRange {
    pub start: usize,
    pub end: usize,
}

impl RepeatMode {
    /// Resolves a `Range` mode against a sequence
    ///
    /// Returns `Ok(None)` for non-range modes, `Err` with the offending
    /// endpoints if either does not resolve or the range is inverted.
    pub fn resolve(&self, verses: &[Verse]) -> Result<Option<ResolvedRange>, (u32, u32)> {
        let RepeatMode::Range { start, end } = *self else {
            return Ok(None);
        };

        let find = |global: u32| verses.iter().position(|v| v.global_number == global);
        match (find(start), find(end)) {
            (Some(s), Some(e)) if s <= e => Ok(Some(ResolvedRange { start: s, end: e })),
            _ => Err((start, end)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(globals: &[u32]) -> Vec<Verse> {
        globals
            .iter()
            .enumerate()
            .map(|(i, &g)| Verse {
                chapter_number: 1,
                number_in_chapter: (i + 1) as u16,
                global_number: g,
                text: format!("verse {}", g),
                page: 1,
                juz: 1,
            })
            .collect()
    }

    #[test]
    fn test_non_range_modes_resolve_to_none() {
        let verses = seq(&[1, 2, 3]);
        assert_eq!(RepeatMode::Off.resolve(&verses), Ok(None));
        assert_eq!(RepeatMode::SingleVerse.resolve(&verses), Ok(None));
        assert_eq!(RepeatMode::WholeSequence.resolve(&verses), Ok(None));
    }

    #[test]
    fn test_range_resolves_to_indices() {
        let verses = seq(&[10, 11, 12, 13]);
        let resolved = RepeatMode::Range { start: 11, end: 13 }
            .resolve(&verses)
            .expect("resolves");
        assert_eq!(resolved, Some(ResolvedRange { start: 1, end: 3 }));
    }

    #[test]
    fn test_range_missing_endpoint_fails() {
        let verses = seq(&[10, 11, 12]);
        let result = RepeatMode::Range { start: 11, end: 99 }.resolve(&verses);
        assert_eq!(result, Err((11, 99)));
    }

    #[test]
    fn test_inverted_range_fails() {
        let verses = seq(&[10, 11, 12]);
        let result = RepeatMode::Range { start: 12, end: 10 }.resolve(&verses);
        assert_eq!(result, Err((12, 10)));
    }

    #[test]
    fn test_single_verse_range_is_valid() {
        let verses = seq(&[10, 11, 12]);
        let resolved = RepeatMode::Range { start: 11, end: 11 }
            .resolve(&verses)
            .expect("resolves");
        assert_eq!(resolved, Some(ResolvedRange { start: 1, end: 1 }));
    }

    #[test]
    fn test_default_is_off() {
        assert_eq!(RepeatMode::default(), RepeatMode::Off);
    }
}
