//! District ladder loader.

use std::path::Path;

use serde::Deserialize;
use uppercut_core::{CatalogError, District, DistrictRewards};

use crate::loaders::{LoadResult, read_file, required};

/// District entry as written in `districts.ron`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct DistrictRecord {
    pub id: Option<String>,
    pub warmups: Vec<String>,
    pub midboss: Option<String>,
    pub boss: Option<String>,
    pub rewards: DistrictRewards,
}

impl DistrictRecord {
    pub fn into_district(self, index: usize) -> Result<District, CatalogError> {
        let id = required(self.id, &format!("district #{index}"), "id")?;
        let midboss = required(self.midboss, &id, "midboss")?;
        let boss = required(self.boss, &id, "boss")?;
        Ok(District {
            id,
            warmups: self.warmups,
            midboss,
            boss,
            rewards: self.rewards,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DistrictCatalog {
    districts: Vec<DistrictRecord>,
}

/// Loader for the district ladder from RON files. Order is fight order.
pub struct DistrictLoader;

impl DistrictLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<District>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<District>> {
        let catalog: DistrictCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse district ladder RON: {}", e))?;

        let districts = catalog
            .districts
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_district(index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(districts)
    }
}
