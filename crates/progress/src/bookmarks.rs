//! Bookmark list management

use serde::{Deserialize, Serialize};
use tilawah_core::{Bookmark, Timestamp, VerseKey};

/// The user's bookmarks, newest last
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkList {
    bookmarks: Vec<Bookmark>,
}

impl BookmarkList {
    /// Creates an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the verse is bookmarked
    pub fn contains(&self, key: VerseKey) -> bool {
        self.bookmarks.iter().any(|b| b.key == key)
    }

    /// Adds a bookmark; re-adding an existing one changes nothing
    pub fn add(&mut self, key: VerseKey, now: Timestamp) -> bool {
        if self.contains(key) {
            return false;
        }
        self.bookmarks.push(Bookmark::at(key, now));
        true
    }

    /// Removes a bookmark, returning true if it existed
    pub fn remove(&mut self, key: VerseKey) -> bool {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|b| b.key != key);
        self.bookmarks.len() != before
    }

    /// Adds the bookmark if absent, removes it if present; returns true if
    /// it is now bookmarked
    pub fn toggle(&mut self, key: VerseKey, now: Timestamp) -> bool {
        if self.remove(key) {
            false
        } else {
            self.bookmarks.push(Bookmark::at(key, now));
            true
        }
    }

    /// All bookmarks in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Bookmark> {
        self.bookmarks.iter()
    }

    /// Number of bookmarks
    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    /// True if no bookmarks exist
    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}
