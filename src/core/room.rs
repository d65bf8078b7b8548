//! Room operations - CRUD, cascade deletion, and the room/history join.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::DataStore;
use crate::entities::{NewRoom, Payment, Room, RoomPatch, UtilityUsage};
use crate::errors::Result;
use crate::store::keys;

/// A room joined with its full utility and payment history, both sorted
/// most-recent billing period first.
///
/// Flattened so the JSON shape extends [`Room`], matching the view the app
/// renders on the room detail screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomWithDetails {
    /// The room itself
    #[serde(flatten)]
    pub room: Room,
    /// Utility history, most recent period first
    pub utilities: Vec<UtilityUsage>,
    /// Payment history, most recent period first
    pub payments: Vec<Payment>,
}

impl DataStore {
    /// Retrieves every room. An absent collection is empty, not an error.
    pub async fn get_rooms(&self) -> Result<Vec<Room>> {
        self.read_collection(keys::ROOMS).await
    }

    /// Overwrites the room collection wholesale.
    pub async fn save_rooms(&self, rooms: &[Room]) -> Result<()> {
        self.write_collection(keys::ROOMS, rooms).await
    }

    /// Retrieves the rooms belonging to `branch_id`.
    pub async fn get_rooms_by_branch(&self, branch_id: &str) -> Result<Vec<Room>> {
        let mut rooms = self.get_rooms().await?;
        rooms.retain(|r| r.branch_id == branch_id);
        Ok(rooms)
    }

    /// Creates a room, assigning its id and timestamps, and persists it.
    pub async fn create_room(&self, new: NewRoom) -> Result<Room> {
        let now = Self::now_timestamp();
        let room = Room {
            id: Self::new_id(),
            branch_id: new.branch_id,
            name: new.name,
            host: new.host,
            monthly_rent: new.monthly_rent,
            created_at: now.clone(),
            updated_at: now,
        };

        let mut rooms = self.get_rooms().await?;
        rooms.push(room.clone());
        self.save_rooms(&rooms).await?;
        Ok(room)
    }

    /// Applies a partial update to the room with `id`, refreshing its
    /// `updatedAt`. Returns `Ok(None)` and leaves the collection untouched
    /// if no room has that id.
    pub async fn update_room(&self, id: &str, patch: RoomPatch) -> Result<Option<Room>> {
        let mut rooms = self.get_rooms().await?;
        let Some(room) = rooms.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        if let Some(branch_id) = patch.branch_id {
            room.branch_id = branch_id;
        }
        if let Some(name) = patch.name {
            room.name = name;
        }
        if let Some(host) = patch.host {
            room.host = host;
        }
        if let Some(monthly_rent) = patch.monthly_rent {
            room.monthly_rent = monthly_rent;
        }
        room.updated_at = Self::now_timestamp();

        let updated = room.clone();
        self.save_rooms(&rooms).await?;
        Ok(Some(updated))
    }

    /// Deletes the room with `id` along with its entire utility and payment
    /// history. Sibling rooms are untouched. Succeeds whether or not the id
    /// existed.
    pub async fn delete_room(&self, id: &str) -> Result<()> {
        let mut utilities = self.get_utilities().await?;
        utilities.retain(|u| u.room_id != id);
        self.save_utilities(&utilities).await?;

        let mut payments = self.get_payments().await?;
        payments.retain(|p| p.room_id != id);
        self.save_payments(&payments).await?;

        let mut rooms = self.get_rooms().await?;
        rooms.retain(|r| r.id != id);
        self.save_rooms(&rooms).await?;
        info!(room_id = id, "Deleted room");
        Ok(())
    }

    /// Joins the room with `room_id` to its full utility and payment
    /// history, or `None` if the room does not exist.
    pub async fn get_room_with_details(&self, room_id: &str) -> Result<Option<RoomWithDetails>> {
        let rooms = self.get_rooms().await?;
        let Some(room) = rooms.into_iter().find(|r| r.id == room_id) else {
            return Ok(None);
        };

        let utilities = self.get_utilities_by_room(room_id).await?;
        let payments = self.get_payments_by_room(room_id).await?;
        Ok(Some(RoomWithDetails {
            room,
            utilities,
            payments,
        }))
    }
}
