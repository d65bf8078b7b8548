//! Entity module - Contains the serde data models persisted by the store.
//! Each entity serializes with camelCase field names so the on-disk JSON
//! matches the format the mobile application has always written.
//! Creatable entities come with a `New*` input struct and a `*Patch` struct
//! of optional fields for partial updates.

pub mod branch;
pub mod payment;
pub mod room;
pub mod settings;
pub mod utility;

// Re-export specific types to avoid conflicts
pub use branch::{Branch, BranchPatch, NewBranch};
pub use payment::{NewPayment, Payment, PaymentPatch};
pub use room::{NewRoom, Room, RoomHost, RoomPatch};
pub use settings::AppSettings;
pub use utility::{NewUtilityUsage, UtilityPatch, UtilityUsage};
