//! AppSettings entity - Process-wide per-unit utility prices.

use serde::{Deserialize, Serialize};

/// Per-unit prices used to pre-compute utility cost suggestions.
///
/// A singleton persisted under its own key; a missing record reads as the
/// default (both prices zero, which disables suggestions).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Price per unit of water
    pub water_price: f64,
    /// Price per unit of electricity
    pub electric_price: f64,
}
