//! User bookmarks

use crate::types::{Timestamp, VerseKey};
use serde::{Deserialize, Serialize};

/// A bookmarked verse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub key: VerseKey,
    pub created_at: Timestamp,
}

impl Bookmark {
    /// Creates a bookmark stamped with the current time
    pub fn new(key: VerseKey) -> Self {
        Self {
            key,
            created_at: Timestamp::now(),
        }
    }

    /// Creates a bookmark with an explicit timestamp
    pub fn at(key: VerseKey, created_at: Timestamp) -> Self {
        Self { key, created_at }
    }
}
