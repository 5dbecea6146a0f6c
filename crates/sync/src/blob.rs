//! The synced state blob
//!
//! Sync moves the durable store documents as opaque JSON; this crate never
//! interprets them. Conflict policy is last-write-wins: a pull overwrites
//! the local documents wholesale.

use serde::{Deserialize, Serialize};
use tilawah_storage::{keys, KvStore};

/// A signed-in account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub name: String,
}

/// Snapshot of the durable keys, as stored remotely
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateBlob {
    #[serde(default)]
    pub bookmarks: Option<serde_json::Value>,
    #[serde(default)]
    pub progress: Option<serde_json::Value>,
    #[serde(default)]
    pub schedule: Option<serde_json::Value>,
    #[serde(default)]
    pub reading_time: Option<serde_json::Value>,
    #[serde(default)]
    pub hifz: Option<serde_json::Value>,
}

impl StateBlob {
    /// Collects the current documents from the local store
    pub fn collect(store: &dyn KvStore) -> Self {
        Self {
            bookmarks: store.get_raw(keys::BOOKMARKS),
            progress: store.get_raw(keys::PROGRESS),
            schedule: store.get_raw(keys::SCHEDULE),
            reading_time: store.get_raw(keys::READING_TIME),
            hifz: store.get_raw(keys::HIFZ),
        }
    }

    /// Writes the blob's documents into the local store, overwriting what
    /// is there; absent documents leave the local ones untouched
    pub fn apply(&self, store: &mut dyn KvStore) {
        let pairs = [
            (keys::BOOKMARKS, &self.bookmarks),
            (keys::PROGRESS, &self.progress),
            (keys::SCHEDULE, &self.schedule),
            (keys::READING_TIME, &self.reading_time),
            (keys::HIFZ, &self.hifz),
        ];
        for (key, value) in pairs {
            if let Some(value) = value {
                if let Err(e) = store.set_raw(key, value.clone()) {
                    log::warn!("Applying synced '{}' failed: {}", key, e);
                }
            }
        }
    }

    /// True if no document is present
    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_none()
            && self.progress.is_none()
            && self.schedule.is_none()
            && self.reading_time.is_none()
            && self.hifz.is_none()
    }
}
