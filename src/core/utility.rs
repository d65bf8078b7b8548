//! Utility usage operations - CRUD and the per-room sorted history.

use crate::core::DataStore;
use crate::core::period::period_key;
use crate::entities::{NewUtilityUsage, UtilityPatch, UtilityUsage};
use crate::errors::Result;
use crate::store::keys;

impl DataStore {
    /// Retrieves every utility record. An absent collection is empty.
    pub async fn get_utilities(&self) -> Result<Vec<UtilityUsage>> {
        self.read_collection(keys::UTILITIES).await
    }

    /// Overwrites the utility collection wholesale.
    pub async fn save_utilities(&self, utilities: &[UtilityUsage]) -> Result<()> {
        self.write_collection(keys::UTILITIES, utilities).await
    }

    /// Retrieves the utility history of `room_id`, sorted descending by
    /// (year, month index) so the most recent billing period comes first.
    pub async fn get_utilities_by_room(&self, room_id: &str) -> Result<Vec<UtilityUsage>> {
        let mut utilities = self.get_utilities().await?;
        utilities.retain(|u| u.room_id == room_id);
        utilities.sort_by(|a, b| period_key(&b.month, b.year).cmp(&period_key(&a.month, a.year)));
        Ok(utilities)
    }

    /// Records a utility reading, assigning its id and creation timestamp.
    ///
    /// Intended use keeps one record per room per billing period, but the
    /// store does not enforce that; callers wanting upsert behavior look
    /// the period up first.
    pub async fn create_utility(&self, new: NewUtilityUsage) -> Result<UtilityUsage> {
        let utility = UtilityUsage {
            id: Self::new_id(),
            room_id: new.room_id,
            month: new.month,
            year: new.year,
            electric_usage: new.electric_usage,
            water_usage: new.water_usage,
            electric_cost: new.electric_cost,
            water_cost: new.water_cost,
            created_at: Self::now_timestamp(),
        };

        let mut utilities = self.get_utilities().await?;
        utilities.push(utility.clone());
        self.save_utilities(&utilities).await?;
        Ok(utility)
    }

    /// Applies a partial update to the utility record with `id`. Returns
    /// `Ok(None)` and leaves the collection untouched if no record has that
    /// id. Utility records carry no `updatedAt`.
    pub async fn update_utility(&self, id: &str, patch: UtilityPatch) -> Result<Option<UtilityUsage>> {
        let mut utilities = self.get_utilities().await?;
        let Some(utility) = utilities.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };

        if let Some(month) = patch.month {
            utility.month = month;
        }
        if let Some(year) = patch.year {
            utility.year = year;
        }
        if let Some(electric_usage) = patch.electric_usage {
            utility.electric_usage = electric_usage;
        }
        if let Some(water_usage) = patch.water_usage {
            utility.water_usage = water_usage;
        }
        if let Some(electric_cost) = patch.electric_cost {
            utility.electric_cost = electric_cost;
        }
        if let Some(water_cost) = patch.water_cost {
            utility.water_cost = water_cost;
        }

        let updated = utility.clone();
        self.save_utilities(&utilities).await?;
        Ok(Some(updated))
    }

    /// Deletes the utility record with `id`. Succeeds whether or not the id
    /// existed.
    pub async fn delete_utility(&self, id: &str) -> Result<()> {
        let mut utilities = self.get_utilities().await?;
        utilities.retain(|u| u.id != id);
        self.save_utilities(&utilities).await
    }
}
