//! Payment operations - CRUD, the per-room sorted history, and the
//! single-period lookup backing the "is this month paid?" display.

use crate::core::DataStore;
use crate::core::period::period_key;
use crate::entities::{NewPayment, Payment, PaymentPatch};
use crate::errors::Result;
use crate::store::keys;

impl DataStore {
    /// Retrieves every payment record. An absent collection is empty.
    pub async fn get_payments(&self) -> Result<Vec<Payment>> {
        self.read_collection(keys::PAYMENTS).await
    }

    /// Overwrites the payment collection wholesale.
    pub async fn save_payments(&self, payments: &[Payment]) -> Result<()> {
        self.write_collection(keys::PAYMENTS, payments).await
    }

    /// Retrieves the payment history of `room_id`, sorted descending by
    /// (year, month index) so the most recent billing period comes first.
    pub async fn get_payments_by_room(&self, room_id: &str) -> Result<Vec<Payment>> {
        let mut payments = self.get_payments().await?;
        payments.retain(|p| p.room_id == room_id);
        payments.sort_by(|a, b| period_key(&b.month, b.year).cmp(&period_key(&a.month, a.year)));
        Ok(payments)
    }

    /// First payment record matching the room and billing period, or
    /// `None` if the period has no record yet.
    pub async fn get_payment_for_month(
        &self,
        room_id: &str,
        month: &str,
        year: i32,
    ) -> Result<Option<Payment>> {
        let payments = self.get_payments().await?;
        Ok(payments
            .into_iter()
            .find(|p| p.room_id == room_id && p.month == month && p.year == year))
    }

    /// Creates a payment record, assigning its id and creation timestamp.
    pub async fn create_payment(&self, new: NewPayment) -> Result<Payment> {
        let payment = Payment {
            id: Self::new_id(),
            room_id: new.room_id,
            month: new.month,
            year: new.year,
            amount: new.amount,
            is_paid: new.is_paid,
            paid_at: new.paid_at,
            created_at: Self::now_timestamp(),
        };

        let mut payments = self.get_payments().await?;
        payments.push(payment.clone());
        self.save_payments(&payments).await?;
        Ok(payment)
    }

    /// Applies a partial update to the payment with `id`. Returns
    /// `Ok(None)` and leaves the collection untouched if no record has that
    /// id. Payment records carry no `updatedAt`.
    pub async fn update_payment(&self, id: &str, patch: PaymentPatch) -> Result<Option<Payment>> {
        let mut payments = self.get_payments().await?;
        let Some(payment) = payments.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        if let Some(amount) = patch.amount {
            payment.amount = amount;
        }
        if let Some(is_paid) = patch.is_paid {
            payment.is_paid = is_paid;
        }
        if let Some(paid_at) = patch.paid_at {
            payment.paid_at = paid_at;
        }

        let updated = payment.clone();
        self.save_payments(&payments).await?;
        Ok(Some(updated))
    }

    /// Marks the payment with `id` as paid or unpaid, stamping or clearing
    /// `paidAt` accordingly.
    pub async fn set_payment_paid(&self, id: &str, is_paid: bool) -> Result<Option<Payment>> {
        let paid_at = is_paid.then(Self::now_timestamp);
        self.update_payment(
            id,
            PaymentPatch {
                is_paid: Some(is_paid),
                paid_at: Some(paid_at),
                ..Default::default()
            },
        )
        .await
    }

    /// Deletes the payment record with `id`. Succeeds whether or not the id
    /// existed.
    pub async fn delete_payment(&self, id: &str) -> Result<()> {
        let mut payments = self.get_payments().await?;
        payments.retain(|p| p.id != id);
        self.save_payments(&payments).await
    }
}
