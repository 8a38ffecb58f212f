//! Read-only content catalog: characters, movesets, gear and districts.
//!
//! A [`Catalog`] is validated once, when it is built. Every cross reference
//! (moveset keys, gear ids, district enemies and rewards) is resolved up
//! front so a malformed catalog fails at load time rather than in the middle
//! of a campaign. After construction the catalog is immutable and can be
//! shared by reference across any number of battles and campaigns.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::error::CatalogError;
use crate::state::{Combatant, GearItem, GearSlot, Move, Moveset};

use super::rng::RandomSource;

/// Character definition as it appears in content.
///
/// Moveset and gear are references by key; they are resolved against the
/// rest of the catalog when spawning.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterTemplate {
    pub hp: i32,
    pub level: u32,
    pub base_accuracy: f64,
    pub base_defense: f64,
    pub moveset: String,
    pub gear: BTreeMap<GearSlot, String>,
}

impl CharacterTemplate {
    /// Template with the game's default stats and no gear.
    pub fn new(moveset: impl Into<String>) -> Self {
        Self {
            hp: Combatant::DEFAULT_HEALTH,
            level: Combatant::DEFAULT_LEVEL,
            base_accuracy: Combatant::DEFAULT_ACCURACY,
            base_defense: Combatant::DEFAULT_DEFENSE,
            moveset: moveset.into(),
            gear: BTreeMap::new(),
        }
    }

    pub fn with_stats(mut self, hp: i32, level: u32, base_accuracy: f64, base_defense: f64) -> Self {
        self.hp = hp;
        self.level = level;
        self.base_accuracy = base_accuracy;
        self.base_defense = base_defense;
        self
    }

    pub fn with_gear(mut self, slot: GearSlot, gear_id: impl Into<String>) -> Self {
        self.gear.insert(slot, gear_id.into());
        self
    }
}

/// Unlocks granted after a district.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DistrictRewards {
    pub unlock_characters: Vec<String>,
    pub unlock_gear: Vec<String>,
}

/// One rung of the campaign ladder.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct District {
    pub id: String,
    pub warmups: Vec<String>,
    pub midboss: String,
    pub boss: String,
    pub rewards: DistrictRewards,
}

impl District {
    pub fn new(id: impl Into<String>, midboss: impl Into<String>, boss: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            warmups: Vec::new(),
            midboss: midboss.into(),
            boss: boss.into(),
            rewards: DistrictRewards::default(),
        }
    }

    pub fn with_warmup(mut self, name: impl Into<String>) -> Self {
        self.warmups.push(name.into());
        self
    }

    pub fn with_rewards(mut self, rewards: DistrictRewards) -> Self {
        self.rewards = rewards;
        self
    }

    /// Every enemy name in fight order: warmups, midboss, boss.
    pub fn opponents(&self) -> impl Iterator<Item = &str> {
        self.warmups
            .iter()
            .map(String::as_str)
            .chain([self.midboss.as_str(), self.boss.as_str()])
    }

    /// Number of battles fought in this district.
    pub fn battle_count(&self) -> usize {
        self.warmups.len() + 2
    }
}

/// Validated, immutable content.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    characters: BTreeMap<String, CharacterTemplate>,
    movesets: HashMap<String, Moveset>,
    gear: HashMap<String, Arc<GearItem>>,
    districts: Vec<District>,
}

impl Catalog {
    /// Builds a catalog and validates every cross reference.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::UnknownMoveset`] / [`CatalogError::UnknownGear`] for
    ///   dangling character references
    /// - [`CatalogError::GearSlotMismatch`] for gear listed under the wrong slot
    /// - [`CatalogError::UnknownCharacter`] for district enemies or reward
    ///   characters that do not exist
    /// - [`CatalogError::MalformedEntry`] for duplicate ids, empty movesets
    ///   and other invalid values
    pub fn new(
        characters: BTreeMap<String, CharacterTemplate>,
        movesets: BTreeMap<String, Vec<Move>>,
        gear: Vec<GearItem>,
        districts: Vec<District>,
    ) -> Result<Self, CatalogError> {
        let mut gear_index = HashMap::with_capacity(gear.len());
        for item in gear {
            if gear_index.contains_key(&item.id) {
                return Err(CatalogError::malformed(&item.id, "duplicate gear id"));
            }
            gear_index.insert(item.id.clone(), Arc::new(item));
        }

        let mut moveset_index = HashMap::with_capacity(movesets.len());
        for (key, moves) in movesets {
            if moves.is_empty() {
                return Err(CatalogError::malformed(&key, "moveset has no moves"));
            }
            let shared: Moveset = moves.into_iter().map(Arc::new).collect();
            moveset_index.insert(key, shared);
        }

        let catalog = Self {
            characters,
            movesets: moveset_index,
            gear: gear_index,
            districts,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for (name, template) in &self.characters {
            if template.hp < 1 {
                return Err(CatalogError::malformed(name, "hp must be at least 1"));
            }
            if template.level < 1 {
                return Err(CatalogError::malformed(name, "level must be at least 1"));
            }
            if !self.movesets.contains_key(&template.moveset) {
                return Err(CatalogError::UnknownMoveset {
                    character: name.clone(),
                    moveset: template.moveset.clone(),
                });
            }
            for (slot, gear_id) in &template.gear {
                let item = self.gear.get(gear_id).ok_or_else(|| CatalogError::UnknownGear {
                    character: name.clone(),
                    gear_id: gear_id.clone(),
                })?;
                if item.slot != *slot {
                    return Err(CatalogError::GearSlotMismatch {
                        character: name.clone(),
                        gear_id: gear_id.clone(),
                        slot: slot.to_string(),
                        expected: item.slot.to_string(),
                    });
                }
            }
        }

        for district in &self.districts {
            for enemy in district.opponents() {
                self.template(enemy)?;
            }
            for name in &district.rewards.unlock_characters {
                self.template(name)?;
            }
            for gear_id in &district.rewards.unlock_gear {
                if !self.gear.contains_key(gear_id) {
                    return Err(CatalogError::malformed(
                        &district.id,
                        format!("reward references unknown gear '{gear_id}'"),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Looks up a character definition.
    pub fn template(&self, name: &str) -> Result<&CharacterTemplate, CatalogError> {
        self.characters
            .get(name)
            .ok_or_else(|| CatalogError::UnknownCharacter(name.to_string()))
    }

    pub fn moveset(&self, key: &str) -> Option<&Moveset> {
        self.movesets.get(key)
    }

    pub fn gear(&self, id: &str) -> Option<&Arc<GearItem>> {
        self.gear.get(id)
    }

    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    /// Character names in sorted order.
    pub fn character_names(&self) -> impl Iterator<Item = &str> {
        self.characters.keys().map(String::as_str)
    }

    /// Builds a fresh combatant from the catalog.
    ///
    /// With `rng = None` the combatant gets an entropy-seeded source.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownCharacter`] if `name` is not in the catalog.
    pub fn spawn(
        &self,
        name: &str,
        rng: Option<Box<dyn RandomSource>>,
    ) -> Result<Combatant, CatalogError> {
        let template = self.template(name)?;
        let moveset = self
            .moveset(&template.moveset)
            .ok_or_else(|| CatalogError::UnknownMoveset {
                character: name.to_string(),
                moveset: template.moveset.clone(),
            })?;

        let mut builder = Combatant::builder(name)
            .health(template.hp)
            .level(template.level)
            .base_accuracy(template.base_accuracy)
            .base_defense(template.base_defense)
            .loadout(moveset.iter().cloned());

        for gear_id in template.gear.values() {
            let item = self.gear(gear_id).ok_or_else(|| CatalogError::UnknownGear {
                character: name.to_string(),
                gear_id: gear_id.clone(),
            })?;
            builder = builder.equip(Arc::clone(item));
        }

        if let Some(rng) = rng {
            builder = builder.rng(rng);
        }
        Ok(builder.build())
    }

    /// Builds a fresh combatant with a seeded source.
    pub fn spawn_seeded(&self, name: &str, seed: u64) -> Result<Combatant, CatalogError> {
        self.spawn(name, Some(Box::new(super::rng::PcgRng::new(seed))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatMods;

    fn moves() -> BTreeMap<String, Vec<Move>> {
        BTreeMap::from([(
            "street".to_string(),
            vec![Move::new("jab", "Quick Jab", 3), Move::new("hook", "Hook Line", 5)],
        )])
    }

    fn gear() -> Vec<GearItem> {
        vec![GearItem::new(
            "gold_mic",
            GearSlot::Mic,
            "Gold Mic",
            StatMods::new(0.1, 0.0, 0.05),
        )]
    }

    fn characters() -> BTreeMap<String, CharacterTemplate> {
        BTreeMap::from([
            (
                "MC Blaze".to_string(),
                CharacterTemplate::new("street")
                    .with_stats(18, 1, 0.65, 0.2)
                    .with_gear(GearSlot::Mic, "gold_mic"),
            ),
            ("Rookie".to_string(), CharacterTemplate::new("street")),
        ])
    }

    #[test]
    fn spawn_resolves_moveset_and_gear() {
        let catalog = Catalog::new(characters(), moves(), gear(), vec![]).unwrap();
        let blaze = catalog.spawn_seeded("MC Blaze", 1).unwrap();

        assert_eq!(blaze.health, 18);
        assert_eq!(blaze.loadout.len(), 2);
        assert!((blaze.accuracy_bonus() - 0.05).abs() < 1e-12);
        assert!((blaze.attack_bonus() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn spawned_combatants_share_move_definitions() {
        let catalog = Catalog::new(characters(), moves(), gear(), vec![]).unwrap();
        let a = catalog.spawn_seeded("MC Blaze", 1).unwrap();
        let b = catalog.spawn_seeded("Rookie", 2).unwrap();
        assert!(Arc::ptr_eq(&a.loadout[0], &b.loadout[0]));
    }

    #[test]
    fn unknown_character_names_the_missing_entry() {
        let catalog = Catalog::new(characters(), moves(), gear(), vec![]).unwrap();
        let err = catalog.spawn("Ghostface", None).unwrap_err();
        assert_eq!(err, CatalogError::UnknownCharacter("Ghostface".into()));
    }

    #[test]
    fn dangling_moveset_fails_construction() {
        let mut chars = characters();
        chars.insert("Broken".into(), CharacterTemplate::new("missing"));
        let err = Catalog::new(chars, moves(), gear(), vec![]).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownMoveset { .. }));
        assert!(err.is_malformed_catalog());
    }

    #[test]
    fn dangling_gear_fails_construction() {
        let mut chars = characters();
        chars.insert(
            "Broken".into(),
            CharacterTemplate::new("street").with_gear(GearSlot::Kicks, "air_max"),
        );
        let err = Catalog::new(chars, moves(), gear(), vec![]).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownGear { .. }));
    }

    #[test]
    fn gear_in_wrong_slot_fails_construction() {
        let mut chars = characters();
        chars.insert(
            "Broken".into(),
            CharacterTemplate::new("street").with_gear(GearSlot::Hoodie, "gold_mic"),
        );
        let err = Catalog::new(chars, moves(), gear(), vec![]).unwrap_err();
        assert!(matches!(err, CatalogError::GearSlotMismatch { .. }));
    }

    #[test]
    fn district_enemies_must_exist() {
        let district = District::new("downtown", "Rookie", "Nobody");
        let err = Catalog::new(characters(), moves(), gear(), vec![district]).unwrap_err();
        assert_eq!(err, CatalogError::UnknownCharacter("Nobody".into()));
    }

    #[test]
    fn district_lists_opponents_in_fight_order() {
        let district = District::new("downtown", "Mid", "Boss")
            .with_warmup("W1")
            .with_warmup("W2");
        let order: Vec<&str> = district.opponents().collect();
        assert_eq!(order, ["W1", "W2", "Mid", "Boss"]);
        assert_eq!(district.battle_count(), 4);
    }
}
