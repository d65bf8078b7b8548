//! Shared test utilities for `rentbook`.
//!
//! This module provides common helper functions for setting up test stores
//! and creating test entities with sensible defaults.

use std::sync::Arc;

use crate::core::DataStore;
use crate::entities::{
    Branch, NewBranch, NewPayment, NewRoom, NewUtilityUsage, Payment, Room, RoomHost, UtilityUsage,
};
use crate::errors::Result;
use crate::store::MemoryStore;

/// Creates a façade over a fresh in-memory store.
/// This is the standard setup for all integration tests.
pub fn setup_test_store() -> DataStore {
    DataStore::new(Arc::new(MemoryStore::new()))
}

/// Installs a tracing subscriber honoring `RUST_LOG` for tests that want
/// log output; safe to call more than once.
pub fn init_test_logging() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates a test branch with a fixed address.
pub async fn create_test_branch(ds: &DataStore, name: &str) -> Result<Branch> {
    ds.create_branch(NewBranch {
        name: name.to_string(),
        address: "1 Test Way".to_string(),
    })
    .await
}

/// Creates a test room under `branch_id` with default tenant details.
///
/// # Defaults
/// * `host`: "Alice", phone "555-0100", no ID card image
/// * `monthly_rent`: 500.0
pub async fn create_test_room(ds: &DataStore, branch_id: &str, name: &str) -> Result<Room> {
    ds.create_room(NewRoom {
        branch_id: branch_id.to_string(),
        name: name.to_string(),
        host: RoomHost {
            name: "Alice".to_string(),
            phone: "555-0100".to_string(),
            address: "1 Test Way".to_string(),
            id_card_image: None,
        },
        monthly_rent: 500.0,
    })
    .await
}

/// Creates a test utility reading for the given room and billing period.
///
/// # Defaults
/// * `electric_usage`: 120.0, `electric_cost`: 480.0
/// * `water_usage`: 8.0, `water_cost`: 20.0
pub async fn create_test_utility(
    ds: &DataStore,
    room_id: &str,
    month: &str,
    year: i32,
) -> Result<UtilityUsage> {
    ds.create_utility(NewUtilityUsage {
        room_id: room_id.to_string(),
        month: month.to_string(),
        year,
        electric_usage: 120.0,
        water_usage: 8.0,
        electric_cost: 480.0,
        water_cost: 20.0,
    })
    .await
}

/// Creates a test payment for the given room and billing period.
///
/// # Defaults
/// * `amount`: 500.0
/// * `paid_at`: stamped only when `is_paid` is true
pub async fn create_test_payment(
    ds: &DataStore,
    room_id: &str,
    month: &str,
    year: i32,
    is_paid: bool,
) -> Result<Payment> {
    ds.create_payment(NewPayment {
        room_id: room_id.to_string(),
        month: month.to_string(),
        year,
        amount: 500.0,
        is_paid,
        paid_at: is_paid.then(|| "2024-06-01T00:00:00.000000Z".to_string()),
    })
    .await
}

/// Sets up a store with one branch and one room.
/// Returns (store, branch, room) for common test scenarios.
pub async fn setup_with_room() -> Result<(DataStore, Branch, Room)> {
    let ds = setup_test_store();
    let branch = create_test_branch(&ds, "Test Branch").await?;
    let room = create_test_room(&ds, &branch.id, "Test Room").await?;
    Ok((ds, branch, room))
}
