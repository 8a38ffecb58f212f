//! Battle transcript: what happened, round by round.

use std::fmt;

use super::Decision;

/// One entry in a battle transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    /// An armed special was fired. Specials cannot be blocked.
    Special { attacker: String, damage: i32 },

    /// The defender timed a block; no damage was applied.
    Blocked {
        attacker: String,
        defender: String,
        move_name: String,
    },

    /// A bar landed for `damage`.
    Landed {
        attacker: String,
        move_name: String,
        damage: i32,
    },

    /// Final line of every completed battle.
    Victory {
        winner: String,
        loser: String,
        rounds: u32,
        decided_by: Decision,
    },
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Special { attacker, damage } => {
                write!(f, "🌟 {attacker} SPECIAL for {damage}!")
            }
            Self::Blocked {
                attacker,
                defender,
                move_name,
            } => write!(f, "🛡️ {defender} blocked {attacker}'s {move_name}!"),
            Self::Landed {
                attacker,
                move_name,
                damage,
            } => write!(f, "🎤 {attacker} lands {move_name} for {damage}!"),
            Self::Victory {
                winner,
                loser,
                rounds,
                decided_by: Decision::Knockout,
            } => write!(f, "🏆 {winner} defeats {loser} in {rounds} rounds!"),
            Self::Victory {
                winner,
                loser,
                rounds,
                decided_by: Decision::RoundCap,
            } => write!(f, "🏆 {winner} outlasts {loser} after {rounds} rounds!"),
        }
    }
}

/// Ordered, append-only record of a single battle plus its round counter.
///
/// Only the owning [`Battle`](super::Battle) appends; everyone else gets a
/// shared reference or a clone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleTranscript {
    rounds: u32,
    events: Vec<BattleEvent>,
}

impl BattleTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub(crate) fn complete_round(&mut self) {
        self.rounds += 1;
    }

    /// Rounds resolved so far.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Human-readable lines in order.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.events.iter().map(ToString::to_string)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&BattleEvent> {
        self.events.last()
    }
}

impl fmt::Display for BattleTranscript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, event) in self.events.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{event}")?;
        }
        Ok(())
    }
}
