//! File-backed store, one JSON document per key
//!
//! Writes are atomic: serialize to a temp file in the same directory, then
//! rename over the target. A crash mid-write leaves the previous document
//! intact. Missing or corrupt documents read as absent; the typed layer
//! turns that into fallback-to-default.

use crate::error::{StoreError, StoreResult};
use crate::store::KvStore;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Store rooted at a directory, `<key>.json` per entry
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::Io {
            path: dir.clone(),
            source: e,
        })?;
        Ok(Self { dir })
    }

    /// Opens a store in the platform data directory
    pub fn open_default() -> StoreResult<Self> {
        let dirs = directories::ProjectDirs::from("", "", "tilawah").ok_or_else(|| {
            StoreError::DirectoryUnavailable("no home directory available".to_string())
        })?;
        Self::open(dirs.data_dir())
    }

    /// Returns the directory this store writes into
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        if key.is_empty()
            || key
                .chars()
                .any(|c| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KvStore for JsonFileStore {
    fn get_raw(&self, key: &str) -> Option<serde_json::Value> {
        let path = self.path_for(key).ok()?;
        if !path.exists() {
            return None;
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(value) => Some(value),
            Err(e) => {
                // Corrupt documents read as absent rather than failing the app
                log::warn!("Corrupt store document {}: {}", path.display(), e);
                None
            }
        }
    }

    fn set_raw(&mut self, key: &str, value: serde_json::Value) -> StoreResult<()> {
        let path = self.path_for(key)?;
        let contents = serde_json::to_string_pretty(&value)?;

        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|e| StoreError::Io {
            path: self.dir.clone(),
            source: e,
        })?;
        tmp.write_all(contents.as_bytes())
            .map_err(|e| StoreError::Io {
                path: path.clone(),
                source: e,
            })?;
        tmp.persist(&path).map_err(|e| StoreError::Io {
            path: path.clone(),
            source: e.error,
        })?;

        log::debug!("Wrote store key '{}' ({} bytes)", key, contents.len());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io { path, source: e }),
        }
    }

    fn list_keys(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return Vec::new();
        };
        entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let name = entry.file_name().to_string_lossy().into_owned();
                name.strip_suffix(".json").map(str::to_string)
            })
            .collect()
    }
}
