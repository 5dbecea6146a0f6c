//! The remote account store contract

use crate::blob::StateBlob;
use crate::error::{SyncError, SyncResult};
use std::collections::HashMap;

/// Remote store holding one state blob per account
///
/// Push replaces the account's blob wholesale; pull returns it, or `None`
/// for an account that has never pushed.
pub trait RemoteStore: Send {
    fn push(&mut self, user_id: &str, blob: &StateBlob) -> SyncResult<()>;
    fn pull(&mut self, user_id: &str) -> SyncResult<Option<StateBlob>>;
}

/// In-memory remote, used by tests and as a reference implementation
#[derive(Debug, Default)]
pub struct InMemoryRemote {
    accounts: HashMap<String, StateBlob>,
    /// When set, every call fails as if the network were down
    pub offline: bool,
    push_count: usize,
}

impl InMemoryRemote {
    /// Creates an empty remote
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful pushes observed
    pub fn push_count(&self) -> usize {
        self.push_count
    }

    /// The stored blob for an account
    pub fn stored(&self, user_id: &str) -> Option<&StateBlob> {
        self.accounts.get(user_id)
    }
}

impl RemoteStore for InMemoryRemote {
    fn push(&mut self, user_id: &str, blob: &StateBlob) -> SyncResult<()> {
        if self.offline {
            return Err(SyncError::Network("remote unreachable".to_string()));
        }
        self.accounts.insert(user_id.to_string(), blob.clone());
        self.push_count += 1;
        Ok(())
    }

    fn pull(&mut self, user_id: &str) -> SyncResult<Option<StateBlob>> {
        if self.offline {
            return Err(SyncError::Network("remote unreachable".to_string()));
        }
        Ok(self.accounts.get(user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_then_pull() {
        let mut remote = InMemoryRemote::new();
        let blob = StateBlob {
            progress: Some(serde_json::json!({"streak": 2})),
            ..StateBlob::default()
        };
        remote.push("user-1", &blob).expect("push");
        assert_eq!(remote.pull("user-1").expect("pull"), Some(blob));
        assert_eq!(remote.push_count(), 1);
    }

    #[test]
    fn test_pull_unknown_account() {
        let mut remote = InMemoryRemote::new();
        assert_eq!(remote.pull("nobody").expect("pull"), None);
    }

    #[test]
    fn test_offline_fails_both_ways() {
        let mut remote = InMemoryRemote::new();
        remote.offline = true;
        assert!(remote.push("u", &StateBlob::default()).is_err());
        assert!(remote.pull("u").is_err());
    }
}
