//! Error types for Tilawah
//!
//! Failures are classified into three severity tiers:
//! - **Recoverable**: retried automatically (network blips, sync pushes)
//! - **Degraded**: feature unavailable but the app continues (missing page,
//!   broken reciter voice-set)
//! - **Fatal**: a programming defect or unrecoverable state
//!
//! I/O failures are converted into these variants at the boundary where the
//! call is made; they are never propagated as panics into UI code.

use std::fmt;
use thiserror::Error;

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Error can be automatically recovered from
    Recoverable,
    /// Feature degraded but the app can continue
    Degraded,
    /// Critical error, programming defect or unrecoverable state
    Fatal,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recoverable => write!(f, "Recoverable"),
            Self::Degraded => write!(f, "Degraded"),
            Self::Fatal => write!(f, "Fatal"),
        }
    }
}

/// Main error type shared across Tilawah crates
#[derive(Error, Debug)]
pub enum AppError {
    /// Network request failed
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Requested content does not exist at the source
    #[error("Content not found: {resource}")]
    ContentNotFound { resource: String },

    /// Three consecutive clip failures exhausted the retry budget
    #[error("Playback failed for reciter '{reciter}'")]
    PlaybackFailed { reciter: String },

    /// A repeat range referenced positions outside the current sequence
    #[error("Repeat range {start}..={end} does not resolve in the current sequence")]
    RepeatRangeInvalid { start: usize, end: usize },

    /// Local store read/write failed
    #[error("Storage error for key '{key}': {message}")]
    Storage { key: String, message: String },

    /// Remote sync push/pull failed (deferred, not surfaced)
    #[error("Sync failed: {message}")]
    SyncFailed { message: String },

    /// Invalid argument provided by a caller
    #[error("Invalid argument: {argument} - {reason}")]
    InvalidArgument { argument: String, reason: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    /// Returns the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Network { .. } | Self::SyncFailed { .. } => ErrorSeverity::Recoverable,
            Self::ContentNotFound { .. }
            | Self::PlaybackFailed { .. }
            | Self::RepeatRangeInvalid { .. }
            | Self::Storage { .. }
            | Self::InvalidArgument { .. } => ErrorSeverity::Degraded,
            Self::Internal { .. } => ErrorSeverity::Fatal,
        }
    }

    /// Returns a user-friendly message suitable for display in the UI
    pub fn user_message(&self) -> String {
        match self {
            Self::Network { .. } => {
                "Cannot connect to the internet. Please check your connection.".to_string()
            }
            Self::ContentNotFound { .. } => "The requested page could not be loaded.".to_string(),
            Self::PlaybackFailed { .. } => {
                "Playback failed. Please try another reciter.".to_string()
            }
            Self::RepeatRangeInvalid { .. } => {
                "The repeat range is no longer valid. Playback stopped.".to_string()
            }
            Self::Storage { .. } => "Could not save your progress on this device.".to_string(),
            Self::SyncFailed { .. } => {
                "Your progress will sync when the connection returns.".to_string()
            }
            Self::InvalidArgument { .. } => "Invalid input provided.".to_string(),
            Self::Internal { .. } => "An unexpected error occurred. Please try again.".to_string(),
        }
    }

    /// Returns true if the error should be retried automatically
    pub fn is_retryable(&self) -> bool {
        self.severity() == ErrorSeverity::Recoverable
    }

    /// Helper to wrap any error as a network failure
    pub fn network<E: std::error::Error + Send + Sync + 'static>(
        message: impl Into<String>,
        source: E,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Convenience type alias for Results using AppError
pub type Result<T> = std::result::Result<T, AppError>;
