//! Content factory for building a catalog from data files.

use std::path::{Path, PathBuf};

use tracing::debug;
use uppercut_core::{Catalog, CharacterTemplate, District, GameConfig, GearItem, Move};

use crate::loaders::{
    CharacterLoader, ConfigLoader, DistrictLoader, GearLoader, LoadResult, MoveLoader,
};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml      (optional)
/// ├── characters.ron
/// ├── moves.ron
/// ├── gear.ron
/// └── districts.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`, or defaults if the file
    /// does not exist.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the roster from `characters.ron`.
    pub fn load_characters(
        &self,
    ) -> LoadResult<std::collections::BTreeMap<String, CharacterTemplate>> {
        CharacterLoader::load(&self.data_dir.join("characters.ron"))
    }

    /// Load movesets from `moves.ron`.
    pub fn load_moves(&self) -> LoadResult<std::collections::BTreeMap<String, Vec<Move>>> {
        MoveLoader::load(&self.data_dir.join("moves.ron"))
    }

    /// Load the gear catalog from `gear.ron`.
    pub fn load_gear(&self) -> LoadResult<Vec<GearItem>> {
        GearLoader::load(&self.data_dir.join("gear.ron"))
    }

    /// Load the district ladder from `districts.ron`.
    pub fn load_districts(&self) -> LoadResult<Vec<District>> {
        DistrictLoader::load(&self.data_dir.join("districts.ron"))
    }

    /// Loads every catalog file and validates cross references.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        let characters = self.load_characters()?;
        let moves = self.load_moves()?;
        let gear = self.load_gear()?;
        let districts = self.load_districts()?;
        debug!(
            characters = characters.len(),
            movesets = moves.len(),
            gear = gear.len(),
            districts = districts.len(),
            dir = %self.data_dir.display(),
            "loaded catalog files"
        );
        Ok(Catalog::new(characters, moves, gear, districts)?)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
