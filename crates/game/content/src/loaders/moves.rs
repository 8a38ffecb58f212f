//! Moveset loader.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use uppercut_core::{CatalogError, Move};

use crate::loaders::{LoadResult, read_file, required};

/// One move as written in `moves.ron`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct MoveRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub base_damage: Option<u32>,
}

impl MoveRecord {
    /// `record` names the owning moveset in error messages.
    pub fn into_move(self, record: &str) -> Result<Move, CatalogError> {
        let id = required(self.id, record, "id")?;
        let name = self.name.unwrap_or_else(|| id.clone());
        let base_damage = required(self.base_damage, record, "base_damage")?;
        Ok(Move::new(id, name, base_damage))
    }
}

/// Loader for movesets from RON files.
pub struct MoveLoader;

impl MoveLoader {
    /// Load movesets from a RON file.
    ///
    /// RON format: `{ "key": [(id: "jab", name: "Quick Jab", base_damage: 3), ...], ... }`
    ///
    /// Move order within a moveset is preserved.
    pub fn load(path: &Path) -> LoadResult<BTreeMap<String, Vec<Move>>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BTreeMap<String, Vec<Move>>> {
        let raw: BTreeMap<String, Vec<MoveRecord>> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse moveset RON: {}", e))?;

        let mut movesets = BTreeMap::new();
        for (key, records) in raw {
            let moves = records
                .into_iter()
                .map(|record| record.into_move(&key))
                .collect::<Result<Vec<_>, _>>()?;
            movesets.insert(key, moves);
        }
        Ok(movesets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_move_order() {
        let movesets = MoveLoader::parse(
            r#"#![enable(implicit_some)]
            {
                "street": [
                    (id: "jab", name: "Quick Jab", base_damage: 3),
                    (id: "hook", base_damage: 5),
                ],
            }"#,
        )
        .unwrap();
        let street = &movesets["street"];
        assert_eq!(street[0], Move::new("jab", "Quick Jab", 3));
        assert_eq!(street[1].name, "hook");
    }

    #[test]
    fn missing_damage_is_malformed() {
        let err = MoveLoader::parse(r#"{ "street": [(id: Some("jab"))] }"#).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CatalogError>(),
            Some(&CatalogError::malformed("street", "missing field 'base_damage'"))
        );
    }
}
