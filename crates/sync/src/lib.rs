//! Remote account sync for Tilawah
//!
//! Mirrors the durable store documents to an account store, best-effort:
//! pushes are batched behind a dirty flag, retried with backoff on a
//! periodic tick, and never block or surface errors during normal use.
//! Conflict policy is last write wins.

mod blob;
mod engine;
mod error;
mod remote;
mod retry;

pub use blob::{StateBlob, UserAccount};
pub use engine::{SyncEngine, SyncStatus};
pub use error::{SyncError, SyncResult};
pub use remote::{InMemoryRemote, RemoteStore};
pub use retry::RetryPolicy;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_exports_accessible() {
        let engine = SyncEngine::new(InMemoryRemote::new(), RetryPolicy::default());
        assert!(!engine.status().signed_in);
    }
}
