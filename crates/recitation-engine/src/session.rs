//! Playback session state
//!
//! A session exists only between a `play_from` and the next `stop`; while
//! it exists its cursor is always a valid index into its sequence. The
//! anchor records the index the session started on, which is what
//! `RepeatMode::SingleVerse` loops back to regardless of cursor drift
//! from skips.

use crate::backend::SessionToken;
use crate::repeat::{RepeatMode, ResolvedRange};
use crate::speed::RecitationSpeed;
use serde::Serialize;
use tilawah_core::{ReciterId, Verse, VerseKey};

/// Lifecycle phase of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlaybackPhase {
    /// No session has ever run
    Idle,
    /// Waiting for the current clip to become ready
    Loading,
    Playing,
    Paused,
    /// A session ran and was stopped or ended
    Stopped,
}

/// State owned exclusively by the sequencer for one playback run
#[derive(Debug)]
pub struct PlaybackSession {
    pub token: SessionToken,
    pub verses: Vec<Verse>,
    /// Current index into `verses`; always in bounds
    pub cursor: usize,
    /// Index the session started on
    pub anchor: usize,
    pub reciter: ReciterId,
    pub phase: PlaybackPhase,
    pub speed: RecitationSpeed,
    /// Range endpoints resolved once at session start / mode change
    pub resolved_range: Option<ResolvedRange>,
    pub elapsed_secs: f64,
    pub total_secs: f64,
    pub consecutive_errors: u8,
}

impl PlaybackSession {
    /// Creates a session positioned at `start`, about to load its first clip
    pub fn new(
        token: SessionToken,
        verses: Vec<Verse>,
        start: usize,
        reciter: ReciterId,
        speed: RecitationSpeed,
        repeat: RepeatMode,
    ) -> Self {
        // Resolution failures are kept as None and reported at the next
        // end-of-clip boundary, not at session start.
        let resolved_range = repeat.resolve(&verses).unwrap_or(None);

        Self {
            token,
            verses,
            cursor: start,
            anchor: start,
            reciter,
            phase: PlaybackPhase::Loading,
            speed,
            resolved_range,
            elapsed_secs: 0.0,
            total_secs: 0.0,
            consecutive_errors: 0,
        }
    }

    /// The verse under the cursor
    pub fn current_verse(&self) -> &Verse {
        &self.verses[self.cursor]
    }

    /// Scheduler/bookmark address of the verse under the cursor
    pub fn current_key(&self) -> VerseKey {
        self.current_verse().key()
    }

    /// Returns true while a clip is loaded (playing or paused)
    pub fn has_active_clip(&self) -> bool {
        matches!(self.phase, PlaybackPhase::Playing | PlaybackPhase::Paused)
    }

    /// Number of verses in the sequence
    pub fn len(&self) -> usize {
        self.verses.len()
    }

    /// Sessions are never created over empty sequences
    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}
