//! Built-in content compiled into the binary.
//!
//! The same files ship under `data/` so they can be copied and edited, then
//! loaded with [`ContentFactory`](crate::ContentFactory).

use uppercut_core::{Catalog, GameConfig};

use crate::loaders::{
    CharacterLoader, ConfigLoader, DistrictLoader, GearLoader, LoadResult, MoveLoader,
};

pub const CHARACTERS_RON: &str = include_str!("../data/characters.ron");
pub const MOVES_RON: &str = include_str!("../data/moves.ron");
pub const GEAR_RON: &str = include_str!("../data/gear.ron");
pub const DISTRICTS_RON: &str = include_str!("../data/districts.ron");
pub const CONFIG_TOML: &str = include_str!("../data/config.toml");

/// The built-in roster, movesets, gear and district ladder.
pub fn catalog() -> LoadResult<Catalog> {
    let characters = CharacterLoader::parse(CHARACTERS_RON)?;
    let moves = MoveLoader::parse(MOVES_RON)?;
    let gear = GearLoader::parse(GEAR_RON)?;
    let districts = DistrictLoader::parse(DISTRICTS_RON)?;
    Ok(Catalog::new(characters, moves, gear, districts)?)
}

/// The built-in game configuration.
pub fn config() -> LoadResult<GameConfig> {
    ConfigLoader::parse(CONFIG_TOML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_is_valid() {
        let catalog = catalog().unwrap();
        assert!(catalog.template("MC Blaze").is_ok());
        assert!(catalog.template("DJ Uppercut").is_ok());
        assert_eq!(catalog.districts().len(), 2);
        assert!(catalog.districts().iter().all(|d| d.warmups.len() == 1));
    }

    #[test]
    fn builtin_config_matches_defaults() {
        assert_eq!(config().unwrap(), GameConfig::default());
    }
}
