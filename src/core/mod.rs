//! Persistence façade - the sole mediator between entity values and the
//! backing key-value store.
//!
//! [`DataStore`] is constructed once at startup with an injected
//! [`KvStore`] and threaded through the presentation layer; there is no
//! global state. Each entity collection is persisted as a whole-collection
//! JSON snapshot under a fixed key, so every mutation is a read-modify-write
//! of the full collection. That sequence is not atomic; the single-user,
//! single-process access model makes last-write-wins acceptable.

pub mod branch;
pub mod payment;
pub mod period;
pub mod report;
pub mod room;
pub mod settings;
pub mod utility;

pub use branch::BranchWithRooms;
pub use period::{BillingPeriod, MONTHS, month_index};
pub use report::{DashboardStats, RoomStatus};
pub use room::RoomWithDetails;
pub use settings::CostSuggestion;

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error};

use crate::errors::Result;
use crate::store::{KvStore, keys};

/// Injectable façade over the four entity collections and the settings
/// singleton. Cheap to clone; clones share the same backing store.
#[derive(Clone)]
pub struct DataStore {
    store: Arc<dyn KvStore>,
}

impl DataStore {
    /// Creates a façade over the given backing store.
    #[must_use]
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Resets all four entity collections to empty. Settings are kept.
    pub async fn clear_all(&self) -> Result<()> {
        self.write_collection::<crate::entities::Branch>(keys::BRANCHES, &[])
            .await?;
        self.write_collection::<crate::entities::Room>(keys::ROOMS, &[])
            .await?;
        self.write_collection::<crate::entities::UtilityUsage>(keys::UTILITIES, &[])
            .await?;
        self.write_collection::<crate::entities::Payment>(keys::PAYMENTS, &[])
            .await?;
        debug!("Cleared all entity collections");
        Ok(())
    }

    /// Reads and deserializes a whole-collection snapshot.
    ///
    /// An absent key is an empty collection. A present but corrupt value is
    /// an error: the caller decides whether to log, retry, or alert rather
    /// than the façade silently dropping data.
    pub(crate) async fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        match self.store.get(key).await? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                error!(key, error = %e, "Failed to deserialize collection snapshot");
                e.into()
            }),
        }
    }

    /// Serializes and overwrites a whole-collection snapshot.
    pub(crate) async fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let raw = serde_json::to_string(items)?;
        self.store.set(key, raw).await
    }

    pub(crate) fn store(&self) -> &dyn KvStore {
        self.store.as_ref()
    }

    /// Current instant as an RFC 3339 UTC string, the timestamp format the
    /// app has always persisted.
    pub(crate) fn now_timestamp() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    /// Fresh opaque entity id.
    pub(crate) fn new_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

impl std::fmt::Debug for DataStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataStore").finish_non_exhaustive()
    }
}
