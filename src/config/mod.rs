//! Configuration for the on-device data directory.
//!
//! The only configurable knob is where the file-backed store keeps its
//! data. The directory comes from the `RENTBOOK_DATA_DIR` environment
//! variable and falls back to a local default.

use std::path::PathBuf;

/// Default data directory relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data/rentbook";

/// Resolves the data directory from `RENTBOOK_DATA_DIR` or the default.
#[must_use]
pub fn data_dir() -> PathBuf {
    std::env::var("RENTBOOK_DATA_DIR").map_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from)
}
