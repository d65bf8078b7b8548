//! Application settings - the persisted per-unit prices and the cost
//! suggestions derived from them.
//!
//! The suggestion is advisory: the utility entry form pre-fills the cost
//! fields from usage × price and the user may overwrite either figure
//! before the record is saved.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::DataStore;
use crate::entities::AppSettings;
use crate::errors::Result;
use crate::store::keys;

/// Pre-computed cost suggestion for a utility entry form.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSuggestion {
    /// Suggested electricity cost (usage × per-unit price)
    pub electric_cost: f64,
    /// Suggested water cost (usage × per-unit price)
    pub water_cost: f64,
}

impl CostSuggestion {
    /// Combined suggested cost.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.electric_cost + self.water_cost
    }
}

/// Suggested cost for a metered quantity at a per-unit price.
#[must_use]
pub fn suggested_cost(usage: f64, price_per_unit: f64) -> f64 {
    usage * price_per_unit
}

/// Pre-computes both cost fields for a utility entry from the configured
/// per-unit prices.
#[must_use]
pub fn suggest_costs(settings: AppSettings, electric_usage: f64, water_usage: f64) -> CostSuggestion {
    CostSuggestion {
        electric_cost: suggested_cost(electric_usage, settings.electric_price),
        water_cost: suggested_cost(water_usage, settings.water_price),
    }
}

impl DataStore {
    /// Retrieves the persisted settings, or the default (zero prices) when
    /// none have been saved yet.
    pub async fn get_settings(&self) -> Result<AppSettings> {
        match self.store().get(keys::SETTINGS).await? {
            None => Ok(AppSettings::default()),
            Some(raw) => serde_json::from_str(&raw).map_err(Into::into),
        }
    }

    /// Persists the settings singleton.
    pub async fn save_settings(&self, settings: AppSettings) -> Result<()> {
        let raw = serde_json::to_string(&settings)?;
        self.store().set(keys::SETTINGS, raw).await?;
        debug!(
            water_price = settings.water_price,
            electric_price = settings.electric_price,
            "Saved settings"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_settings_default_when_absent() -> Result<()> {
        let ds = setup_test_store();
        assert_eq!(ds.get_settings().await?, AppSettings::default());
        Ok(())
    }

    #[tokio::test]
    async fn test_settings_roundtrip() -> Result<()> {
        let ds = setup_test_store();
        let settings = AppSettings {
            water_price: 2.5,
            electric_price: 4.0,
        };

        ds.save_settings(settings).await?;
        assert_eq!(ds.get_settings().await?, settings);
        Ok(())
    }

    #[test]
    fn test_suggested_cost() {
        assert_eq!(suggested_cost(120.0, 4.0), 480.0);
        assert_eq!(suggested_cost(0.0, 4.0), 0.0);
        // Unset prices suggest zero, leaving the field to manual entry.
        assert_eq!(suggested_cost(120.0, 0.0), 0.0);
    }

    #[test]
    fn test_suggest_costs_combines_both_meters() {
        let settings = AppSettings {
            water_price: 2.5,
            electric_price: 4.0,
        };
        let suggestion = suggest_costs(settings, 120.0, 8.0);
        assert_eq!(suggestion.electric_cost, 480.0);
        assert_eq!(suggestion.water_cost, 20.0);
        assert_eq!(suggestion.total(), 500.0);
    }
}
