//! Gear catalog loader.

use std::path::Path;

use serde::Deserialize;
use uppercut_core::{CatalogError, GearItem, GearSlot, StatMods};

use crate::loaders::{LoadResult, read_file, required};

/// Gear entry as written in `gear.ron`. Omitted mods default to zero.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GearRecord {
    pub id: Option<String>,
    pub slot: Option<String>,
    pub name: Option<String>,
    pub mods: StatMods,
}

impl GearRecord {
    /// `index` identifies the entry when the id itself is missing.
    pub fn into_item(self, index: usize) -> Result<GearItem, CatalogError> {
        let id = required(self.id, &format!("gear #{index}"), "id")?;
        let slot = required(self.slot, &id, "slot")?;
        let slot: GearSlot = slot
            .parse()
            .map_err(|_| CatalogError::malformed(&id, format!("unknown gear slot '{slot}'")))?;
        let name = self.name.unwrap_or_else(|| id.clone());
        Ok(GearItem::new(id, slot, name, self.mods))
    }
}

/// Gear catalog structure for RON files.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GearCatalog {
    pub items: Vec<GearRecord>,
}

/// Loader for the gear catalog from RON files.
pub struct GearLoader;

impl GearLoader {
    /// Load the gear catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<GearItem>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<GearItem>> {
        let catalog: GearCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse gear catalog RON: {}", e))?;

        let items = catalog
            .items
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_item(index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }
}
