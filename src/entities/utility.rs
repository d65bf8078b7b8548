//! UtilityUsage entity - One room's recorded electricity and water
//! consumption (and cost) for a given billing period.

use serde::{Deserialize, Serialize};

/// A monthly utility reading for a room. Intended use records at most one
/// per room per (month, year), but the store does not enforce uniqueness.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilityUsage {
    /// Opaque unique identifier, assigned at creation
    pub id: String,
    /// Id of the room this reading belongs to
    pub room_id: String,
    /// English month name of the billing period (e.g., "June")
    pub month: String,
    /// Calendar year of the billing period
    pub year: i32,
    /// Electricity consumed, in billing units
    pub electric_usage: f64,
    /// Water consumed, in billing units
    pub water_usage: f64,
    /// Electricity cost for the period
    pub electric_cost: f64,
    /// Water cost for the period
    pub water_cost: f64,
    /// RFC 3339 creation timestamp, set once and never mutated
    pub created_at: String,
}

/// Input for recording a utility reading; id and timestamp are assigned by
/// the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUtilityUsage {
    /// Id of the room this reading belongs to
    pub room_id: String,
    /// English month name of the billing period
    pub month: String,
    /// Calendar year of the billing period
    pub year: i32,
    /// Electricity consumed, in billing units
    pub electric_usage: f64,
    /// Water consumed, in billing units
    pub water_usage: f64,
    /// Electricity cost for the period
    pub electric_cost: f64,
    /// Water cost for the period
    pub water_cost: f64,
}

/// Partial update for a utility reading; `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UtilityPatch {
    /// New billing month, if correcting
    pub month: Option<String>,
    /// New billing year, if correcting
    pub year: Option<i32>,
    /// Corrected electricity consumption
    pub electric_usage: Option<f64>,
    /// Corrected water consumption
    pub water_usage: Option<f64>,
    /// Corrected electricity cost
    pub electric_cost: Option<f64>,
    /// Corrected water cost
    pub water_cost: Option<f64>,
}

impl UtilityUsage {
    /// Combined electricity and water cost for the period.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.electric_cost + self.water_cost
    }
}
