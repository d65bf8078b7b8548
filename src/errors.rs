//! Unified error type for the rentbook data layer.
//!
//! Every fallible operation in the crate returns [`Result`]. Absence of a
//! record (lookup/update/delete on an unknown id) is not an error; it is
//! modeled as `Ok(None)` or a no-op so callers can distinguish "missing"
//! from "broken" without matching on variants.

use thiserror::Error;

/// Errors surfaced by the persistence façade and its backing stores.
#[derive(Debug, Error)]
pub enum Error {
    /// The backing key-value store rejected or failed an operation.
    /// Used by store implementations whose failures are not plain I/O
    /// errors (quota, permissions, platform bridges).
    #[error("Store error: {message}")]
    Store {
        /// Human-readable description of the failure
        message: String,
    },

    /// A stored value could not be serialized or deserialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem failure from the file-backed store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
