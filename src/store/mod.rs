//! Key-value store abstraction.
//!
//! The persistence façade treats its backing store as a black box: an
//! asynchronous string-keyed map of string values. Each entity collection
//! is one whole-collection JSON snapshot under a fixed key. Two
//! implementations ship with the crate: [`MemoryStore`] for tests and
//! ephemeral use, and [`FileStore`] persisting one file per key.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::errors::Result;

/// Fixed storage keys, namespaced to the application.
pub mod keys {
    /// Whole-collection snapshot of all branches
    pub const BRANCHES: &str = "rentbook.branches";
    /// Whole-collection snapshot of all rooms
    pub const ROOMS: &str = "rentbook.rooms";
    /// Whole-collection snapshot of all utility usage records
    pub const UTILITIES: &str = "rentbook.utilities";
    /// Whole-collection snapshot of all payment records
    pub const PAYMENTS: &str = "rentbook.payments";
    /// Singleton application settings record
    pub const SETTINGS: &str = "rentbook.settings";
}

/// A generic asynchronous string-keyed persistent map.
///
/// Implementations only need to store and return strings faithfully; the
/// façade layers JSON (de)serialization and all entity semantics on top.
/// There is no transactionality across keys and none is expected - the
/// access model is single-user, single-process.
#[async_trait::async_trait]
pub trait KvStore: Send + Sync {
    /// Retrieves the value stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;
    /// Stores `value` under `key`, overwriting any previous value.
    async fn set(&self, key: &str, value: String) -> Result<()>;
    /// Removes the value stored under `key`; a no-op if absent.
    async fn remove(&self, key: &str) -> Result<()>;
}
