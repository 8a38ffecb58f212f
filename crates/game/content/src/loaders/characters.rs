//! Character roster loader.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use uppercut_core::{CatalogError, CharacterTemplate, Combatant, GearSlot};

use crate::loaders::{LoadResult, read_file, required, unit_interval};

/// Character entry as written in `characters.ron`.
///
/// Only `moveset` is required; stats fall back to the game's defaults.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CharacterRecord {
    pub hp: Option<i32>,
    pub level: Option<u32>,
    pub base_accuracy: Option<f64>,
    pub base_defense: Option<f64>,
    pub moveset: Option<String>,
    /// Slot name (`mic`, `hoodie`, `kicks`) to gear id.
    pub gear: BTreeMap<String, String>,
}

impl CharacterRecord {
    /// Validates the record into a template.
    pub fn into_template(self, name: &str) -> Result<CharacterTemplate, CatalogError> {
        let moveset = required(self.moveset, name, "moveset")?;
        let hp = self.hp.unwrap_or(Combatant::DEFAULT_HEALTH);
        let level = self.level.unwrap_or(Combatant::DEFAULT_LEVEL);
        let accuracy = unit_interval(
            self.base_accuracy.unwrap_or(Combatant::DEFAULT_ACCURACY),
            name,
            "base_accuracy",
        )?;
        let defense = unit_interval(
            self.base_defense.unwrap_or(Combatant::DEFAULT_DEFENSE),
            name,
            "base_defense",
        )?;

        let mut template = CharacterTemplate::new(moveset).with_stats(hp, level, accuracy, defense);
        for (slot, gear_id) in self.gear {
            let slot: GearSlot = slot
                .parse()
                .map_err(|_| CatalogError::malformed(name, format!("unknown gear slot '{slot}'")))?;
            template = template.with_gear(slot, gear_id);
        }
        Ok(template)
    }
}

/// Loader for the character roster from RON files.
pub struct CharacterLoader;

impl CharacterLoader {
    /// Load the roster from a RON file.
    ///
    /// RON format: `{ "Name": (moveset: "key", ...), ... }`
    pub fn load(path: &Path) -> LoadResult<BTreeMap<String, CharacterTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BTreeMap<String, CharacterTemplate>> {
        let raw: BTreeMap<String, CharacterRecord> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse character roster RON: {}", e))?;

        let mut roster = BTreeMap::new();
        for (name, record) in raw {
            let template = record.into_template(&name)?;
            roster.insert(name, template);
        }
        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_stats_use_defaults() {
        let roster = CharacterLoader::parse(r#"{ "Rookie": (moveset: Some("street")) }"#).unwrap();
        let rookie = &roster["Rookie"];
        assert_eq!(rookie.hp, 15);
        assert_eq!(rookie.level, 1);
        assert_eq!(rookie.base_accuracy, 0.6);
        assert_eq!(rookie.base_defense, 0.15);
        assert!(rookie.gear.is_empty());
    }

    #[test]
    fn gear_slots_are_parsed() {
        let roster = CharacterLoader::parse(
            r#"#![enable(implicit_some)]
            { "Blaze": (hp: 18, moveset: "blaze", gear: { "mic": "gold_mic" }) }"#,
        )
        .unwrap();
        let blaze = &roster["Blaze"];
        assert_eq!(blaze.hp, 18);
        assert_eq!(blaze.gear.get(&GearSlot::Mic).map(String::as_str), Some("gold_mic"));
    }

    #[test]
    fn missing_moveset_is_malformed() {
        let err = CharacterLoader::parse(r#"{ "Nobody": (hp: Some(10)) }"#).unwrap_err();
        let err = err.downcast_ref::<CatalogError>().unwrap();
        assert_eq!(
            err,
            &CatalogError::malformed("Nobody", "missing field 'moveset'")
        );
    }

    #[test]
    fn unknown_slot_is_malformed() {
        let err = CharacterLoader::parse(
            r#"{ "Caped": (moveset: Some("street"), gear: { "cape": "red_cape" }) }"#,
        )
        .unwrap_err();
        assert!(err.downcast_ref::<CatalogError>().is_some());
    }

    #[test]
    fn accuracy_out_of_range_is_malformed() {
        let err = CharacterLoader::parse(
            r#"{ "Sharp": (moveset: Some("street"), base_accuracy: Some(1.5)) }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("base_accuracy"));
    }
}
