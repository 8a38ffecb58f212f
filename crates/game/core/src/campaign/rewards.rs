//! Unlock bookkeeping and the reward policy decision point.

use std::collections::BTreeSet;

use crate::config::RewardPolicy;
use crate::env::DistrictRewards;

use super::result::{MatchResult, Stage};

/// Accumulated unlock keys (`char:<name>` and `gear:<id>`).
///
/// Inserting a key that is already present is a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unlocks {
    keys: BTreeSet<String>,
}

impl Unlocks {
    pub const CHARACTER_PREFIX: &'static str = "char:";
    pub const GEAR_PREFIX: &'static str = "gear:";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn character_key(name: &str) -> String {
        format!("{}{name}", Self::CHARACTER_PREFIX)
    }

    pub fn gear_key(id: &str) -> String {
        format!("{}{id}", Self::GEAR_PREFIX)
    }

    /// Adds every key listed in `rewards`, returning the ones that were new.
    pub fn grant(&mut self, rewards: &DistrictRewards) -> Vec<String> {
        let characters = rewards
            .unlock_characters
            .iter()
            .map(|name| Self::character_key(name));
        let gear = rewards.unlock_gear.iter().map(|id| Self::gear_key(id));

        characters
            .chain(gear)
            .filter(|key| self.keys.insert(key.clone()))
            .collect()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// All keys in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Unlocked character names.
    pub fn characters(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter_map(|key| key.strip_prefix(Self::CHARACTER_PREFIX))
    }

    /// Unlocked gear ids.
    pub fn gear(&self) -> impl Iterator<Item = &str> {
        self.iter().filter_map(|key| key.strip_prefix(Self::GEAR_PREFIX))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl RewardPolicy {
    /// Decides whether a district's rewards are granted, given the results
    /// of the district's battles.
    pub fn permits(&self, results: &[MatchResult]) -> bool {
        match self {
            Self::Always => true,
            Self::BossVictory => results
                .iter()
                .any(|r| r.stage == Stage::Boss && r.player_won),
            Self::CleanSweep => !results.is_empty() && results.iter().all(|r| r.player_won),
        }
    }
}
