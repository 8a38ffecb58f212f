//! Combat resolution formulas.
//!
//! This module provides pure functions for the numbers behind a round.
//! Everything here is side-effect free; the random draws are made by the
//! [`Combatant`](crate::Combatant) that owns the source and passed in.
//!
//! # Core Functions
//!
//! - `timing_accuracy`: Base accuracy plus noise, clamped to [0, 1]
//! - `block_chance`: Probability that a defender blocks a bar
//! - `damage_multiplier` / `bar_damage`: Damage for a landed bar
//! - `special_damage`: Fixed, unblockable special damage

pub mod damage;
pub mod hit;

pub use damage::{bar_damage, damage_multiplier, special_damage};
pub use hit::{block_chance, initiative_bias, timing_accuracy};
