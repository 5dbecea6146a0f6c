//! The sync engine
//!
//! Best-effort, fire-and-forget: local mutations mark the engine dirty,
//! and the periodic tick pushes the state blob when an account is signed
//! in. Push failures are swallowed, counted, and retried on a later tick
//! with exponential backoff. Nothing here ever blocks the UI or surfaces
//! an error in normal operation.

use crate::blob::{StateBlob, UserAccount};
use crate::error::{SyncError, SyncResult};
use crate::remote::RemoteStore;
use crate::retry::RetryPolicy;
use tilawah_core::Timestamp;
use tilawah_storage::KvStore;

/// Observable sync state, for settings/debug screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncStatus {
    pub signed_in: bool,
    pub pending_push: bool,
    pub failed_attempts: usize,
    pub last_synced_at: Option<Timestamp>,
    pub next_retry_at: Option<Timestamp>,
}

/// Pushes and pulls the durable state blob for the signed-in account
pub struct SyncEngine<R: RemoteStore> {
    remote: R,
    policy: RetryPolicy,
    user: Option<UserAccount>,
    pending_push: bool,
    failed_attempts: usize,
    last_synced_at: Option<Timestamp>,
    next_retry_at: Option<Timestamp>,
}

impl<R: RemoteStore> SyncEngine<R> {
    /// Creates an engine over a remote store
    pub fn new(remote: R, policy: RetryPolicy) -> Self {
        Self {
            remote,
            policy,
            user: None,
            pending_push: false,
            failed_attempts: 0,
            last_synced_at: None,
            next_retry_at: None,
        }
    }

    /// Signs an account in; the caller usually pulls right after
    pub fn sign_in(&mut self, user: UserAccount) {
        log::info!("Signed in as '{}'", user.name);
        self.user = Some(user);
        self.failed_attempts = 0;
        self.next_retry_at = None;
    }

    /// Signs out, dropping any pending push
    pub fn sign_out(&mut self) {
        self.user = None;
        self.pending_push = false;
        self.failed_attempts = 0;
        self.next_retry_at = None;
    }

    /// The signed-in account, if any
    pub fn user(&self) -> Option<&UserAccount> {
        self.user.as_ref()
    }

    /// Notes that local state changed and needs pushing
    pub fn mark_dirty(&mut self) {
        self.pending_push = true;
    }

    /// Pushes the current blob immediately
    ///
    /// Used by explicit "sync now" actions and teardown hooks; the
    /// periodic path is [`Self::tick`].
    pub fn push_now(&mut self, store: &dyn KvStore, now: Timestamp) -> SyncResult<()> {
        let user_id = self.user.as_ref().ok_or(SyncError::NotSignedIn)?.id.clone();
        let blob = StateBlob::collect(store);

        match self.remote.push(&user_id, &blob) {
            Ok(()) => {
                self.pending_push = false;
                self.failed_attempts = 0;
                self.next_retry_at = None;
                self.last_synced_at = Some(now);
                log::debug!("Pushed state blob for '{}'", user_id);
                Ok(())
            }
            Err(e) => {
                self.failed_attempts += 1;
                self.pending_push = true;
                let delay = self.policy.delay_after(self.failed_attempts);
                self.next_retry_at = Some(now.plus(delay));
                log::warn!(
                    "Push failed (attempt {}), retrying in {}: {}",
                    self.failed_attempts,
                    delay,
                    e
                );
                Err(e)
            }
        }
    }

    /// Pulls the remote blob and applies it over local state
    ///
    /// Last write wins: remote documents overwrite local ones. Returns
    /// true if a blob existed remotely.
    pub fn pull_now(&mut self, store: &mut dyn KvStore, now: Timestamp) -> SyncResult<bool> {
        let user_id = self.user.as_ref().ok_or(SyncError::NotSignedIn)?.id.clone();
        let blob = self.remote.pull(&user_id)?;
        match blob {
            Some(blob) => {
                blob.apply(store);
                self.last_synced_at = Some(now);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Periodic best-effort driver
    ///
    /// Pushes when dirty, signed in, and past the backoff deadline.
    /// Failures are swallowed here; they only move the deadline.
    pub fn tick(&mut self, store: &dyn KvStore, now: Timestamp) {
        if !self.pending_push || self.user.is_none() {
            return;
        }
        if let Some(deadline) = self.next_retry_at {
            if now < deadline {
                return;
            }
        }
        // Errors already counted and logged inside push_now
        let _ = self.push_now(store, now);
    }

    /// Current observable state
    pub fn status(&self) -> SyncStatus {
        SyncStatus {
            signed_in: self.user.is_some(),
            pending_push: self.pending_push,
            failed_attempts: self.failed_attempts,
            last_synced_at: self.last_synced_at,
            next_retry_at: self.next_retry_at,
        }
    }
}
