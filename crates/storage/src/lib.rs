//! Local key→JSON persistence for Tilawah
//!
//! The app's durable state is a handful of named JSON documents. This crate
//! provides the store contract plus two implementations: an atomic
//! file-per-key store for devices and an in-memory store for tests.

mod error;
mod json_file;
mod memory;
mod store;

pub use error::{StoreError, StoreResult};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::{keys, KvStore, KvStoreExt};
