//! Room entity - A rentable unit within a branch, with its tenant details
//! embedded as a [`RoomHost`] record.

use serde::{Deserialize, Serialize};

/// Contact and identity details of the room's tenant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomHost {
    /// Tenant's full name
    pub name: String,
    /// Tenant's phone number
    pub phone: String,
    /// Tenant's home address
    pub address: String,
    /// Local file reference to a photo of the tenant's ID card, if captured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_card_image: Option<String>,
}

/// A rentable unit. Belongs to exactly one branch and owns its utility
/// usage and payment records via their `roomId` back-reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Opaque unique identifier, assigned at creation
    pub id: String,
    /// Id of the branch this room belongs to
    pub branch_id: String,
    /// Room name or number (e.g., "101")
    pub name: String,
    /// Embedded tenant record
    pub host: RoomHost,
    /// Monthly rent amount; non-negative
    pub monthly_rent: f64,
    /// RFC 3339 creation timestamp, set once and never mutated
    pub created_at: String,
    /// RFC 3339 timestamp refreshed on every update
    pub updated_at: String,
}

/// Input for creating a room; id and timestamps are assigned by the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    /// Id of the branch this room belongs to
    pub branch_id: String,
    /// Room name or number
    pub name: String,
    /// Embedded tenant record
    pub host: RoomHost,
    /// Monthly rent amount; non-negative
    pub monthly_rent: f64,
}

/// Partial update for a room; `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoomPatch {
    /// New owning branch, if moving the room
    pub branch_id: Option<String>,
    /// New room name, if changing
    pub name: Option<String>,
    /// Replacement tenant record, if changing
    pub host: Option<RoomHost>,
    /// New monthly rent, if changing
    pub monthly_rent: Option<f64>,
}
