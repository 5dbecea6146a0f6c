//! Recitation Engine - sequential verse audio playback for Tilawah
//!
//! Plays an ordered sequence of remote clips, one per verse, back to back.
//! The actual audio element lives behind the [`ClipBackend`] trait; this
//! crate owns the state machine: repeat policy, speed steps, the sleep
//! timer, the bounded skip-on-error policy, and the session-token guard
//! that keeps stale async callbacks from touching a newer session.

mod backend;
mod error;
mod events;
mod repeat;
mod sequencer;
mod session;
mod sleep;
mod speed;

pub use backend::{ClipBackend, ClipEvent, ClipEventKind, ClipUrlResolver, SessionToken};
pub use error::{EngineError, EngineResult};
pub use events::EngineEvent;
pub use repeat::{RepeatMode, ResolvedRange};
pub use sequencer::{EngineSnapshot, RecitationSequencer};
pub use session::{PlaybackPhase, PlaybackSession};
pub use sleep::SleepTimer;
pub use speed::RecitationSpeed;
