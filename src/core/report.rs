//! Derived views for the dashboard and room detail screens.
//!
//! These are pure reads over the entity collections: occupancy and payment
//! counts for a billing period, and a room's payment/utility state for a
//! single period.

use crate::core::{BillingPeriod, DataStore};
use crate::entities::{Payment, Room, UtilityUsage};
use crate::errors::Result;

/// Portfolio-wide counts shown on the settings/dashboard screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    /// Total number of branches
    pub branches: usize,
    /// Total number of rooms
    pub rooms: usize,
    /// Rooms with a paid payment record for the period
    pub paid_rooms: usize,
    /// Remaining rooms (no record, or recorded but unpaid)
    pub unpaid_rooms: usize,
}

/// One room's standing for a single billing period.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomStatus {
    /// The room being reported on
    pub room: Room,
    /// The period's payment record, if one exists
    pub payment: Option<Payment>,
    /// The period's utility record, if one exists
    pub utility: Option<UtilityUsage>,
}

impl RoomStatus {
    /// Whether the period's rent is recorded as paid. A missing record
    /// counts as unpaid.
    #[must_use]
    pub fn is_paid(&self) -> bool {
        self.payment.as_ref().is_some_and(|p| p.is_paid)
    }
}

impl DataStore {
    /// Counts branches, rooms, and paid/unpaid rooms for the given billing
    /// period.
    pub async fn dashboard_stats(&self, period: &BillingPeriod) -> Result<DashboardStats> {
        let branches = self.get_branches().await?;
        let rooms = self.get_rooms().await?;
        let payments = self.get_payments().await?;

        let paid_rooms = payments
            .iter()
            .filter(|p| period.matches(&p.month, p.year) && p.is_paid)
            .count();

        Ok(DashboardStats {
            branches: branches.len(),
            rooms: rooms.len(),
            paid_rooms,
            unpaid_rooms: rooms.len().saturating_sub(paid_rooms),
        })
    }

    /// A room's payment and utility state for one billing period, or
    /// `None` if the room does not exist.
    pub async fn get_room_status(
        &self,
        room_id: &str,
        period: &BillingPeriod,
    ) -> Result<Option<RoomStatus>> {
        let Some(details) = self.get_room_with_details(room_id).await? else {
            return Ok(None);
        };

        let payment = details
            .payments
            .into_iter()
            .find(|p| period.matches(&p.month, p.year));
        let utility = details
            .utilities
            .into_iter()
            .find(|u| period.matches(&u.month, u.year));

        Ok(Some(RoomStatus {
            room: details.room,
            payment,
            utility,
        }))
    }
}
