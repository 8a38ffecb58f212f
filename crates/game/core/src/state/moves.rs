//! Bars a combatant can spit.

use std::sync::Arc;

/// A single attack in a combatant's loadout.
///
/// Moves are immutable and shared by reference: every combatant built from
/// the same moveset points at the same `Arc<Move>` values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub id: String,
    pub name: String,
    pub base_damage: u32,
}

impl Move {
    pub fn new(id: impl Into<String>, name: impl Into<String>, base_damage: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base_damage,
        }
    }
}

/// Ordered, shareable list of moves.
pub type Moveset = Arc<[Arc<Move>]>;
