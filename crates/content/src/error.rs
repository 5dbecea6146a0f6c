//! Error types for the content source

use thiserror::Error;

/// Result type for content operations
pub type ContentResult<T> = Result<T, ContentError>;

/// Errors from fetching text content
///
/// Callers treat all of these as "no data" rather than fatal conditions;
/// the reading surface shows an empty state and retries on navigation.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Transport-level failure
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("Server returned status {0}")]
    Status(u16),

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Chapter or page number outside the text
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    /// Response decoding failed
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert!(ContentError::Status(503).to_string().contains("503"));
    }

    #[test]
    fn test_invalid_location_display() {
        let err = ContentError::InvalidLocation("page 605".to_string());
        assert!(err.to_string().contains("page 605"));
    }
}
