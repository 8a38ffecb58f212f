//! Combatant state and the immutable content it is built from.
//!
//! Moves and gear are shared, read-only definitions. A [`Combatant`] owns its
//! vitals, progression and session state; the battle engine mutates it only
//! through the methods defined here.
pub mod combatant;
pub mod equipment;
pub mod moves;

pub use combatant::{Bar, Combatant, CombatantBuilder};
pub use equipment::{Equipment, GearItem, GearSlot, StatMods};
pub use moves::{Move, Moveset};
