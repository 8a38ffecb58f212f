//! District ladder progression.

use tracing::{debug, info};

use crate::battle::{Battle, Side};
use crate::config::GameConfig;
use crate::env::{Catalog, District, PcgRng, RandomSource};
use crate::error::UppercutError;
use crate::state::Combatant;

use super::result::{MatchResult, Stage};
use super::rewards::Unlocks;

/// Drives one player through an ordered list of districts.
///
/// The player persists across every battle: health carries over, while
/// experience and levels accumulate. Each enemy is spawned fresh from the
/// catalog with its own source seeded from the campaign's source, so a
/// seeded campaign replays identically.
pub struct Campaign<'c> {
    catalog: &'c Catalog,
    player: Combatant,
    rng: Box<dyn RandomSource>,
    districts: Vec<District>,
    unlocks: Unlocks,
    config: GameConfig,
}

impl<'c> Campaign<'c> {
    /// Campaign over every district of `catalog`, in catalog order.
    pub fn new(player: Combatant, catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            player,
            rng: Box::new(PcgRng::from_entropy()),
            districts: catalog.districts().to_vec(),
            unlocks: Unlocks::new(),
            config: GameConfig::default(),
        }
    }

    /// Spawns the player from the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`UppercutError::Catalog`] if `player` is not a known character.
    pub fn for_character(
        player: &str,
        catalog: &'c Catalog,
        seed: Option<u64>,
    ) -> Result<Self, UppercutError> {
        let campaign = match seed {
            Some(seed) => {
                let mut master = PcgRng::new(seed);
                let player = catalog.spawn(player, Some(Box::new(PcgRng::new(master.next_seed()))))?;
                Self::new(player, catalog).with_rng(master)
            }
            None => Self::new(catalog.spawn(player, None)?, catalog),
        };
        Ok(campaign)
    }

    /// Source used to seed every enemy.
    pub fn with_rng(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(PcgRng::new(seed))
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the ladder. Every district must only reference characters
    /// known to the catalog, otherwise [`Campaign::run`] fails when it
    /// reaches the dangling entry.
    pub fn with_districts(mut self, districts: Vec<District>) -> Self {
        self.districts = districts;
        self
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn into_player(self) -> Combatant {
        self.player
    }

    pub fn unlocks(&self) -> &Unlocks {
        &self.unlocks
    }

    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Runs every district in order and returns one result per battle.
    ///
    /// A lost battle does not end the campaign. Whether a district's rewards
    /// are granted is decided by the configured reward policy.
    ///
    /// # Errors
    ///
    /// Fails on unknown enemies or combatants without moves. Results of
    /// battles fought before the failure are discarded.
    pub fn run(&mut self) -> Result<Vec<MatchResult>, UppercutError> {
        let total = self.districts.iter().map(District::battle_count).sum();
        let mut results = Vec::with_capacity(total);

        for index in 0..self.districts.len() {
            let district = self.districts[index].clone();
            results.extend(self.run_district(&district)?);
        }

        info!(
            player = %self.player.name,
            battles = results.len(),
            wins = results.iter().filter(|r| r.player_won).count(),
            level = self.player.level(),
            unlocks = self.unlocks.len(),
            "campaign finished"
        );
        Ok(results)
    }

    /// Fights one district (warmups, midboss, boss) and applies its rewards.
    pub fn run_district(&mut self, district: &District) -> Result<Vec<MatchResult>, UppercutError> {
        info!(district = %district.id, battles = district.battle_count(), "entering district");

        let stages = district
            .warmups
            .iter()
            .map(|name| (Stage::Warmup, name))
            .chain([
                (Stage::Midboss, &district.midboss),
                (Stage::Boss, &district.boss),
            ]);

        let mut results = Vec::with_capacity(district.battle_count());
        for (stage, enemy) in stages {
            results.push(self.fight(&district.id, stage, enemy)?);
        }

        if self.config.reward_policy.permits(&results) {
            self.apply_rewards(district);
        } else {
            info!(
                district = %district.id,
                policy = %self.config.reward_policy,
                "rewards withheld"
            );
        }
        Ok(results)
    }

    fn fight(
        &mut self,
        district: &str,
        stage: Stage,
        enemy: &str,
    ) -> Result<MatchResult, UppercutError> {
        let seed = self.rng.next_seed();
        let mut opponent = self
            .catalog
            .spawn(enemy, Some(Box::new(PcgRng::new(seed))))?;

        let mut battle = Battle::with_config(&mut self.player, &mut opponent, &self.config);
        let winner = battle.play()?;
        let player_won = battle
            .outcome()
            .is_some_and(|outcome| outcome.winner == Side::First);
        let transcript = battle.into_transcript();

        debug!(%district, %stage, %enemy, %winner, player_won, hp = self.player.health, "battle recorded");
        Ok(MatchResult::new(district, stage, winner, player_won, transcript))
    }

    /// Adds the district's unlocks. Already-held unlocks are left untouched.
    ///
    /// With `auto_equip_rewards` enabled, newly unlocked gear is equipped
    /// when the player's slot for it is empty.
    fn apply_rewards(&mut self, district: &District) {
        let added = self.unlocks.grant(&district.rewards);
        for key in &added {
            info!(district = %district.id, unlock = %key, "unlocked");
        }

        if !self.config.auto_equip_rewards {
            return;
        }
        for key in &added {
            let Some(id) = key.strip_prefix(Unlocks::GEAR_PREFIX) else {
                continue;
            };
            let Some(item) = self.catalog.gear(id) else {
                continue;
            };
            if self.player.equipment.is_slot_empty(item.slot) {
                self.player.equip(std::sync::Arc::clone(item));
                info!(gear = %item.id, slot = %item.slot, "equipped reward");
            }
        }
    }
}
