//! Inputs the engine reads but never owns: content and randomness.
//!
//! The [`Catalog`] holds validated, read-only content shared by every battle.
//! [`RandomSource`] implementations are owned one-per-combatant (and one per
//! campaign) so that runs stay reproducible when seeded.
mod catalog;
mod rng;

pub use catalog::{Catalog, CharacterTemplate, District, DistrictRewards};
pub use rng::{PcgRng, RandomSource, ScriptedRng};
