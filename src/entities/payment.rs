//! Payment entity - One room's rent due/paid status for a billing period.

use serde::{Deserialize, Serialize};

/// A rent payment record for a room and billing period.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Opaque unique identifier, assigned at creation
    pub id: String,
    /// Id of the room this payment belongs to
    pub room_id: String,
    /// English month name of the billing period (e.g., "June")
    pub month: String,
    /// Calendar year of the billing period
    pub year: i32,
    /// Amount due for the period
    pub amount: f64,
    /// Whether the rent has been paid
    pub is_paid: bool,
    /// RFC 3339 timestamp of when the rent was marked paid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<String>,
    /// RFC 3339 creation timestamp, set once and never mutated
    pub created_at: String,
}

/// Input for creating a payment record; id and timestamp are assigned by
/// the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    /// Id of the room this payment belongs to
    pub room_id: String,
    /// English month name of the billing period
    pub month: String,
    /// Calendar year of the billing period
    pub year: i32,
    /// Amount due for the period
    pub amount: f64,
    /// Whether the rent has been paid
    pub is_paid: bool,
    /// When the rent was marked paid, if it was
    pub paid_at: Option<String>,
}

/// Partial update for a payment; `None` fields are left untouched.
///
/// `paid_at` is a nested `Option` so a patch can distinguish "leave as is"
/// (`None`) from "clear the paid timestamp" (`Some(None)`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaymentPatch {
    /// New amount due, if correcting
    pub amount: Option<f64>,
    /// New paid flag, if changing
    pub is_paid: Option<bool>,
    /// New paid timestamp: `Some(Some(ts))` to set, `Some(None)` to clear
    pub paid_at: Option<Option<String>>,
}
