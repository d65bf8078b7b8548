//! Branch entity - A physical rental property location containing rooms.

use serde::{Deserialize, Serialize};

/// A rental property location. Owns zero or more rooms via their
/// `branchId` back-reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    /// Opaque unique identifier, assigned at creation
    pub id: String,
    /// Human-readable name of the branch (e.g., "Downtown")
    pub name: String,
    /// Postal address of the property
    pub address: String,
    /// RFC 3339 creation timestamp, set once and never mutated
    pub created_at: String,
    /// RFC 3339 timestamp refreshed on every update
    pub updated_at: String,
}

/// Input for creating a branch; id and timestamps are assigned by the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBranch {
    /// Human-readable name of the branch
    pub name: String,
    /// Postal address of the property
    pub address: String,
}

/// Partial update for a branch; `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BranchPatch {
    /// New name, if changing
    pub name: Option<String>,
    /// New address, if changing
    pub address: Option<String>,
}
