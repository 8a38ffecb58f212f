//! Content loaders for reading game data from files.
//!
//! Every loader has a `parse` entry point for in-memory text (used by the
//! built-in content) and a `load` entry point that reads a file first.

pub mod characters;
pub mod config;
pub mod districts;
pub mod factory;
pub mod gear;
pub mod moves;

pub use characters::{CharacterLoader, CharacterRecord};
pub use config::ConfigLoader;
pub use districts::{DistrictLoader, DistrictRecord};
pub use factory::ContentFactory;
pub use gear::{GearLoader, GearRecord};
pub use moves::{MoveLoader, MoveRecord};

use std::path::Path;

use uppercut_core::CatalogError;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Unwraps a required record field.
pub(crate) fn required<T>(value: Option<T>, record: &str, field: &str) -> Result<T, CatalogError> {
    value.ok_or_else(|| CatalogError::malformed(record, format!("missing field '{field}'")))
}

/// Rejects probabilities outside `[0, 1]` (including NaN).
pub(crate) fn unit_interval(value: f64, record: &str, field: &str) -> Result<f64, CatalogError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(CatalogError::malformed(
            record,
            format!("'{field}' must be within [0, 1], got {value}"),
        ))
    }
}
