//! Deterministic rules for Uppercut City rap battles.
//!
//! `uppercut-core` owns the combat model and campaign progression and
//! exposes pure APIs reused by the content loaders and the simulator binary.
//! Every random draw goes through a [`RandomSource`], so a seeded battle or
//! campaign replays identically.
//!
//! - [`state`]: combatants, moves and gear
//! - [`combat`]: pure hit, block and damage formulas
//! - [`battle`]: round resolution and transcripts
//! - [`campaign`]: district ladders, rewards and unlocks
//! - [`env`]: the validated content catalog and random sources
pub mod battle;
pub mod campaign;
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod state;

pub use battle::{Battle, BattleEvent, BattleOutcome, BattleTranscript, Decision, Side};
pub use campaign::{Campaign, MatchResult, Stage, Unlocks};
pub use config::{GameConfig, RewardPolicy};
pub use env::{
    Catalog, CharacterTemplate, District, DistrictRewards, PcgRng, RandomSource, ScriptedRng,
};
pub use error::{CatalogError, CombatError, ErrorSeverity, GameError, UppercutError};
pub use state::{Bar, Combatant, CombatantBuilder, Equipment, GearItem, GearSlot, Move, Moveset, StatMods};
