//! The key→JSON store contract
//!
//! All durable app state lives behind this trait as opaque
//! key→JSON-serializable-value pairs. Callers use the typed extension
//! methods, which implement the collaborator contract: reads fall back to
//! a default on any failure, writes swallow errors after logging.

use crate::error::StoreResult;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Well-known store keys
pub mod keys {
    pub const BOOKMARKS: &str = "quran-bookmarks";
    pub const PROGRESS: &str = "quran-progress";
    pub const SCHEDULE: &str = "quran-schedule";
    pub const READING_TIME: &str = "quran-reading-time";
    pub const HIFZ: &str = "quran-hifz";
    pub const CURRENT_PAGE: &str = "quran-current-page";
    pub const USER: &str = "quran-app-user";
    pub const SETTINGS: &str = "quran-settings";
}

/// Object-safe raw store interface
pub trait KvStore: Send {
    /// Reads the raw JSON value for a key, `None` if absent or unreadable
    fn get_raw(&self, key: &str) -> Option<serde_json::Value>;

    /// Writes the raw JSON value for a key
    fn set_raw(&mut self, key: &str, value: serde_json::Value) -> StoreResult<()>;

    /// Removes a key; absent keys are not an error
    fn remove(&mut self, key: &str) -> StoreResult<()>;

    /// Lists all present keys
    fn list_keys(&self) -> Vec<String>;
}

/// Typed convenience layer over [`KvStore`]
pub trait KvStoreExt: KvStore {
    /// Reads and deserializes a value, returning `fallback` on any failure
    fn get<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.get_raw(key) {
            Some(raw) => match serde_json::from_value(raw) {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("Store key '{}' holds unexpected shape: {}", key, e);
                    fallback
                }
            },
            None => fallback,
        }
    }

    /// Serializes and writes a value; failures are logged and swallowed
    fn set<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(raw) => {
                if let Err(e) = self.set_raw(key, raw) {
                    log::warn!("Store write for '{}' failed: {}", key, e);
                }
            }
            Err(e) => log::warn!("Could not serialize value for '{}': {}", key, e),
        }
    }
}

impl<S: KvStore + ?Sized> KvStoreExt for S {}
