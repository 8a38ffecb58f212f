//! The mutable battle participant.

use std::fmt;
use std::sync::Arc;

use crate::combat::{bar_damage, block_chance, initiative_bias, special_damage, timing_accuracy};
use crate::config::GameConfig;
use crate::env::{PcgRng, RandomSource};
use crate::error::CombatError;

use super::equipment::{Equipment, GearItem, StatMods};
use super::moves::Move;

/// A rapper: vitals, progression, gear, loadout and a private random source.
///
/// # Invariants
///
/// - `health <= max_health`. Health may drop below zero only in the round
///   that ends a battle.
/// - `max_health >= 1` and never decreases.
/// - `combo_meter` and `special_ready` are session state: a [`Battle`]
///   resets them when it is constructed.
///
/// The random source is owned exclusively and never shared, which is what
/// makes seeded battles reproducible.
///
/// [`Battle`]: crate::battle::Battle
pub struct Combatant {
    pub name: String,

    // === Vitals ===
    pub health: i32,
    max_health: i32,

    // === Progression ===
    level: u32,
    experience: u32,

    // === Base stats ===
    pub base_accuracy: f64,
    pub base_defense: f64,

    // === Gear & loadout ===
    pub equipment: Equipment,
    pub loadout: Vec<Arc<Move>>,

    // === Session state ===
    pub combo_meter: u32,
    pub special_ready: bool,

    rng: Box<dyn RandomSource>,
}

/// A bar that was spit: which move and how hard it hits before blocking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bar {
    pub move_name: String,
    pub damage: i32,
}

impl Combatant {
    pub const DEFAULT_HEALTH: i32 = 15;
    pub const DEFAULT_LEVEL: u32 = 1;
    pub const DEFAULT_ACCURACY: f64 = 0.6;
    pub const DEFAULT_DEFENSE: f64 = 0.15;

    /// Creates a builder for a combatant named `name`.
    pub fn builder(name: impl Into<String>) -> CombatantBuilder {
        CombatantBuilder::new(name)
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn is_standing(&self) -> bool {
        self.health > 0
    }

    /// Replaces the random source, e.g. to reseed a persistent combatant.
    pub fn set_rng(&mut self, rng: impl RandomSource + 'static) {
        self.rng = Box::new(rng);
    }

    // ===== Derived stats =====

    /// Sum of all equipped gear deltas.
    pub fn bonuses(&self) -> StatMods {
        self.equipment.bonuses()
    }

    pub fn accuracy_bonus(&self) -> f64 {
        self.bonuses().accuracy
    }

    pub fn attack_bonus(&self) -> f64 {
        self.bonuses().attack
    }

    pub fn defense_bonus(&self) -> f64 {
        self.bonuses().defense
    }

    /// Equips `item` in its slot, returning whatever it replaced.
    pub fn equip(&mut self, item: Arc<GearItem>) -> Option<Arc<GearItem>> {
        self.equipment.equip(item)
    }

    // ===== Core actions =====

    /// Timing near the beat: base accuracy plus gear plus noise, clamped to [0, 1].
    pub fn roll_accuracy(&mut self) -> f64 {
        let noise = self
            .rng
            .uniform(-GameConfig::ACCURACY_NOISE, GameConfig::ACCURACY_NOISE);
        timing_accuracy(self.base_accuracy, self.accuracy_bonus(), noise)
    }

    /// Initiative bias for this round; the higher bias attacks.
    pub fn roll_initiative(&mut self) -> f64 {
        let draw = self.rng.next_f64();
        initiative_bias(self.base_accuracy, self.accuracy_bonus(), draw)
    }

    /// Picks a move uniformly from the loadout.
    pub fn choose_move(&mut self) -> Result<Arc<Move>, CombatError> {
        if self.loadout.is_empty() {
            return Err(CombatError::EmptyLoadout(self.name.clone()));
        }
        let index = self.rng.below(self.loadout.len());
        Ok(Arc::clone(&self.loadout[index]))
    }

    /// Spits a bar at `accuracy` and advances the combo meter.
    ///
    /// Accuracy at or above [`GameConfig::HIGH_ACCURACY`] builds the meter,
    /// anything lower drains it by one. Once the meter reaches
    /// [`GameConfig::COMBO_THRESHOLD`] the special stays armed until fired.
    pub fn spit_bar(&mut self, accuracy: f64) -> Result<Bar, CombatError> {
        let chosen = self.choose_move()?;
        let damage = bar_damage(chosen.base_damage, accuracy, self.attack_bonus());

        if accuracy >= GameConfig::HIGH_ACCURACY {
            self.combo_meter += 1;
        } else {
            self.combo_meter = self.combo_meter.saturating_sub(1);
        }
        if self.combo_meter >= GameConfig::COMBO_THRESHOLD {
            self.special_ready = true;
        }

        Ok(Bar {
            move_name: chosen.name.clone(),
            damage,
        })
    }

    /// Fires the special if armed.
    ///
    /// Returns 0 and changes nothing when the special is not ready. Otherwise
    /// disarms it, empties the combo meter and returns `6 + level`.
    pub fn special_move(&mut self) -> i32 {
        if !self.special_ready {
            return 0;
        }
        self.special_ready = false;
        self.combo_meter = 0;
        special_damage(self.level)
    }

    /// Attempts to block using this combatant's own timing roll.
    pub fn defend(&mut self, accuracy: f64) -> bool {
        let chance = block_chance(accuracy, self.base_defense, self.defense_bonus());
        self.rng.next_f64() < chance
    }

    /// Clears combo meter and special flag at the start of a battle.
    pub fn reset_session(&mut self) {
        self.combo_meter = 0;
        self.special_ready = false;
    }

    // ===== Progression =====

    /// Adds experience and levels up while the threshold is met.
    ///
    /// Level, threshold and max health saturate instead of overflowing.
    ///
    /// Each level-up spends `XP_PER_LEVEL * level` experience, raises max
    /// health by `HEALTH_PER_LEVEL` and fully heals. Returns the number of
    /// levels gained.
    pub fn gain_xp(&mut self, amount: u32) -> u32 {
        self.experience = self.experience.saturating_add(amount);

        let mut gained = 0;
        loop {
            let threshold = GameConfig::XP_PER_LEVEL.saturating_mul(self.level);
            if self.experience < threshold {
                break;
            }
            self.experience -= threshold;
            self.level = self.level.saturating_add(1);
            self.max_health = self.max_health.saturating_add(GameConfig::HEALTH_PER_LEVEL);
            self.health = self.max_health;
            gained += 1;
        }
        gained
    }
}

impl fmt::Debug for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combatant")
            .field("name", &self.name)
            .field("health", &self.health)
            .field("max_health", &self.max_health)
            .field("level", &self.level)
            .field("experience", &self.experience)
            .field("base_accuracy", &self.base_accuracy)
            .field("base_defense", &self.base_defense)
            .field("equipment", &self.equipment)
            .field("loadout", &self.loadout)
            .field("combo_meter", &self.combo_meter)
            .field("special_ready", &self.special_ready)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Lv {}, HP {}/{}, XP {})",
            self.name, self.level, self.health, self.max_health, self.experience
        )
    }
}

/// Builder for constructing combatants.
pub struct CombatantBuilder {
    name: String,
    health: i32,
    level: u32,
    base_accuracy: f64,
    base_defense: f64,
    equipment: Equipment,
    loadout: Vec<Arc<Move>>,
    rng: Option<Box<dyn RandomSource>>,
}

impl CombatantBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: Combatant::DEFAULT_HEALTH,
            level: Combatant::DEFAULT_LEVEL,
            base_accuracy: Combatant::DEFAULT_ACCURACY,
            base_defense: Combatant::DEFAULT_DEFENSE,
            equipment: Equipment::empty(),
            loadout: Vec::new(),
            rng: None,
        }
    }

    /// Sets starting and maximum health (floored at 1).
    pub fn health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    /// Sets the starting level (floored at 1).
    pub fn level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn base_accuracy(mut self, base_accuracy: f64) -> Self {
        self.base_accuracy = base_accuracy;
        self
    }

    pub fn base_defense(mut self, base_defense: f64) -> Self {
        self.base_defense = base_defense;
        self
    }

    pub fn equip(mut self, item: Arc<GearItem>) -> Self {
        self.equipment.equip(item);
        self
    }

    pub fn with_move(mut self, chosen: Arc<Move>) -> Self {
        self.loadout.push(chosen);
        self
    }

    pub fn loadout(mut self, moves: impl IntoIterator<Item = Arc<Move>>) -> Self {
        self.loadout.extend(moves);
        self
    }

    /// Sets the random source. Defaults to an entropy-seeded [`PcgRng`].
    pub fn rng(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Seeds the default [`PcgRng`].
    pub fn seed(self, seed: u64) -> Self {
        self.rng(PcgRng::new(seed))
    }

    pub fn build(self) -> Combatant {
        let max_health = self.health.max(1);
        Combatant {
            name: self.name,
            health: max_health,
            max_health,
            level: self.level.max(1),
            experience: 0,
            base_accuracy: self.base_accuracy,
            base_defense: self.base_defense,
            equipment: self.equipment,
            loadout: self.loadout,
            combo_meter: 0,
            special_ready: false,
            rng: self
                .rng
                .unwrap_or_else(|| Box::new(PcgRng::from_entropy())),
        }
    }
}
