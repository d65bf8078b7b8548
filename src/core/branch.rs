//! Branch operations - CRUD, cascade deletion, and the branch/rooms join.
//!
//! Deleting a branch removes every room under it, which in turn removes
//! each room's utility and payment history; no orphaned child records
//! survive a delete.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::DataStore;
use crate::entities::{Branch, BranchPatch, NewBranch, Room};
use crate::errors::Result;
use crate::store::keys;

/// A branch joined with its child rooms.
///
/// Flattened so the JSON shape extends [`Branch`] with a `rooms` array,
/// matching the view the app renders on the branch detail screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BranchWithRooms {
    /// The branch itself
    #[serde(flatten)]
    pub branch: Branch,
    /// All rooms whose `branchId` points at this branch
    pub rooms: Vec<Room>,
}

impl DataStore {
    /// Retrieves every branch. An absent collection is empty, not an error.
    pub async fn get_branches(&self) -> Result<Vec<Branch>> {
        self.read_collection(keys::BRANCHES).await
    }

    /// Overwrites the branch collection wholesale.
    pub async fn save_branches(&self, branches: &[Branch]) -> Result<()> {
        self.write_collection(keys::BRANCHES, branches).await
    }

    /// Creates a branch, assigning its id and timestamps, and persists it.
    pub async fn create_branch(&self, new: NewBranch) -> Result<Branch> {
        let now = Self::now_timestamp();
        let branch = Branch {
            id: Self::new_id(),
            name: new.name,
            address: new.address,
            created_at: now.clone(),
            updated_at: now,
        };

        let mut branches = self.get_branches().await?;
        branches.push(branch.clone());
        self.save_branches(&branches).await?;
        Ok(branch)
    }

    /// Applies a partial update to the branch with `id`, refreshing its
    /// `updatedAt`. Returns `Ok(None)` and leaves the collection untouched
    /// if no branch has that id.
    pub async fn update_branch(&self, id: &str, patch: BranchPatch) -> Result<Option<Branch>> {
        let mut branches = self.get_branches().await?;
        let Some(branch) = branches.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };

        if let Some(name) = patch.name {
            branch.name = name;
        }
        if let Some(address) = patch.address {
            branch.address = address;
        }
        branch.updated_at = Self::now_timestamp();

        let updated = branch.clone();
        self.save_branches(&branches).await?;
        Ok(Some(updated))
    }

    /// Deletes the branch with `id`, cascading to its rooms and their
    /// utility and payment records. Succeeds whether or not the id existed.
    pub async fn delete_branch(&self, id: &str) -> Result<()> {
        let rooms = self.get_rooms().await?;
        let doomed: Vec<String> = rooms
            .iter()
            .filter(|r| r.branch_id == id)
            .map(|r| r.id.clone())
            .collect();

        for room_id in &doomed {
            self.delete_room(room_id).await?;
        }

        let mut branches = self.get_branches().await?;
        branches.retain(|b| b.id != id);
        self.save_branches(&branches).await?;
        info!(branch_id = id, rooms = doomed.len(), "Deleted branch");
        Ok(())
    }

    /// Joins the branch with `branch_id` to its child rooms, or `None` if
    /// the branch does not exist.
    pub async fn get_branch_with_rooms(&self, branch_id: &str) -> Result<Option<BranchWithRooms>> {
        let branches = self.get_branches().await?;
        let Some(branch) = branches.into_iter().find(|b| b.id == branch_id) else {
            return Ok(None);
        };

        let rooms = self.get_rooms_by_branch(branch_id).await?;
        Ok(Some(BranchWithRooms { branch, rooms }))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_branch_assigns_id_and_timestamps() -> Result<()> {
        let ds = setup_test_store();

        let branch = ds
            .create_branch(NewBranch {
                name: "Downtown".to_string(),
                address: "1 Main St".to_string(),
            })
            .await?;

        assert!(!branch.id.is_empty());
        assert_eq!(branch.name, "Downtown");
        assert_eq!(branch.address, "1 Main St");
        assert_eq!(branch.created_at, branch.updated_at);

        let branches = ds.get_branches().await?;
        assert_eq!(branches, vec![branch]);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_branch_ids_are_unique() -> Result<()> {
        let ds = setup_test_store();

        for i in 0..10 {
            create_test_branch(&ds, &format!("Branch {i}")).await?;
        }

        let branches = ds.get_branches().await?;
        assert_eq!(branches.len(), 10);
        for (i, a) in branches.iter().enumerate() {
            for b in &branches[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_update_branch_overlays_patch_and_bumps_updated_at() -> Result<()> {
        let ds = setup_test_store();
        let branch = create_test_branch(&ds, "Downtown").await?;

        // Ensure the refreshed timestamp is strictly greater.
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;

        let updated = ds
            .update_branch(
                &branch.id,
                BranchPatch {
                    address: Some("2 Oak Ave".to_string()),
                    ..Default::default()
                },
            )
            .await?
            .unwrap();

        assert_eq!(updated.name, branch.name);
        assert_eq!(updated.address, "2 Oak Ave");
        assert_eq!(updated.created_at, branch.created_at);
        assert!(updated.updated_at > branch.updated_at);

        let refetched = ds.get_branches().await?;
        assert_eq!(refetched, vec![updated]);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_branch_unknown_id_is_none_and_untouched() -> Result<()> {
        let ds = setup_test_store();
        let branch = create_test_branch(&ds, "Downtown").await?;

        let result = ds
            .update_branch(
                "missing",
                BranchPatch {
                    name: Some("Ghost".to_string()),
                    ..Default::default()
                },
            )
            .await?;

        assert!(result.is_none());
        assert_eq!(ds.get_branches().await?, vec![branch]);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_branch_cascades_to_all_descendants() -> Result<()> {
        let ds = setup_test_store();
        let branch = create_test_branch(&ds, "Downtown").await?;
        let other = create_test_branch(&ds, "Uptown").await?;

        let room_a = create_test_room(&ds, &branch.id, "101").await?;
        let room_b = create_test_room(&ds, &branch.id, "102").await?;
        let kept_room = create_test_room(&ds, &other.id, "201").await?;

        create_test_utility(&ds, &room_a.id, "June", 2024).await?;
        create_test_utility(&ds, &room_b.id, "June", 2024).await?;
        let kept_utility = create_test_utility(&ds, &kept_room.id, "June", 2024).await?;
        create_test_payment(&ds, &room_a.id, "June", 2024, false).await?;
        let kept_payment = create_test_payment(&ds, &kept_room.id, "June", 2024, true).await?;

        ds.delete_branch(&branch.id).await?;

        // Zero matching records remain in any of the four collections.
        assert_eq!(ds.get_branches().await?, vec![other]);
        assert_eq!(ds.get_rooms().await?, vec![kept_room]);
        assert_eq!(ds.get_utilities().await?, vec![kept_utility]);
        assert_eq!(ds.get_payments().await?, vec![kept_payment]);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_branch_unknown_id_succeeds() -> Result<()> {
        let ds = setup_test_store();
        let branch = create_test_branch(&ds, "Downtown").await?;

        ds.delete_branch("missing").await?;

        assert_eq!(ds.get_branches().await?, vec![branch]);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_branch_with_rooms() -> Result<()> {
        let ds = setup_test_store();
        let branch = create_test_branch(&ds, "Downtown").await?;
        let other = create_test_branch(&ds, "Uptown").await?;
        let room = create_test_room(&ds, &branch.id, "101").await?;
        create_test_room(&ds, &other.id, "201").await?;

        let joined = ds.get_branch_with_rooms(&branch.id).await?.unwrap();
        assert_eq!(joined.branch, branch);
        assert_eq!(joined.rooms, vec![room]);

        assert!(ds.get_branch_with_rooms("missing").await?.is_none());
        Ok(())
    }
}
