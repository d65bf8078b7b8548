//! In-memory key-value store.
//!
//! Backs tests and ephemeral sessions. The lock exists for interior
//! mutability only; it is not a consistency mechanism (see the crate's
//! single-user access model).

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::errors::Result;
use crate::store::KvStore;

/// A [`KvStore`] holding everything in a process-local map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
