//! Error types for remote sync

use thiserror::Error;

/// Result type for sync operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur during synchronization
///
/// All of these are swallowed by the periodic tick; they surface only to
/// callers that explicitly push or pull.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Network error during push or pull
    #[error("Network error: {0}")]
    Network(String),

    /// No signed-in account to sync against
    #[error("No account is signed in")]
    NotSignedIn,

    /// The remote returned data that could not be decoded
    #[error("Invalid remote data: {0}")]
    InvalidData(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
