//! Error types for the recitation engine

use thiserror::Error;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur inside the recitation engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// Playback speed outside the supported steps
    #[error("Unsupported playback speed: {0}")]
    InvalidSpeed(f32),

    /// A repeat range endpoint does not exist in the current sequence
    #[error("Repeat range endpoint {0} not present in sequence")]
    RangeEndpointMissing(u32),

    /// An operation requires an active session
    #[error("No active playback session")]
    NoSession,

    /// Invalid engine state for the requested operation
    #[error("Invalid state: {0}")]
    InvalidState(String),
}
