//! Error types for the local store

use std::path::PathBuf;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while reading or writing the local store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a store file failed
    #[error("Store I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Key contains characters that cannot map to a file name
    #[error("Invalid store key: '{0}'")]
    InvalidKey(String),

    /// The store directory could not be determined or created
    #[error("Store directory unavailable: {0}")]
    DirectoryUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_display() {
        let err = StoreError::InvalidKey("a/b".to_string());
        assert!(err.to_string().contains("a/b"));
    }

    #[test]
    fn test_io_error_carries_path() {
        let err = StoreError::Io {
            path: PathBuf::from("/data/quran-progress.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("quran-progress.json"));
    }
}
