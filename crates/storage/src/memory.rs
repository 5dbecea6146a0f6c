//! In-memory store for tests and ephemeral state

use crate::error::StoreResult;
use crate::store::KvStore;
use std::collections::HashMap;

/// HashMap-backed store with no persistence
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, serde_json::Value>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<serde_json::Value> {
        self.entries.get(key).cloned()
    }

    fn set_raw(&mut self, key: &str, value: serde_json::Value) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn list_keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get_raw("anything"), None);
    }

    #[test]
    fn test_set_get_remove() {
        let mut store = MemoryStore::new();
        store
            .set_raw("k", serde_json::json!({"a": 1}))
            .expect("set");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_raw("k"), Some(serde_json::json!({"a": 1})));

        store.remove("k").expect("remove");
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_absent_is_ok() {
        let mut store = MemoryStore::new();
        assert!(store.remove("never-set").is_ok());
    }

    #[test]
    fn test_list_keys() {
        let mut store = MemoryStore::new();
        store.set_raw("a", serde_json::json!(1)).expect("set");
        store.set_raw("b", serde_json::json!(2)).expect("set");
        let mut keys = store.list_keys();
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
