//! Round resolution and battle termination.

use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::error::CombatError;
use crate::state::Combatant;

use super::transcript::{BattleEvent, BattleTranscript};

/// Which of the two combatants, by construction order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

/// How a battle was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decision {
    /// One combatant dropped to zero health or below.
    Knockout,
    /// The round cap was reached with both standing; higher health wins,
    /// an exact tie goes to the first combatant.
    RoundCap,
}

/// Terminal result of a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleOutcome {
    pub winner: Side,
    pub winner_name: String,
    pub loser_name: String,
    pub rounds: u32,
    pub decided_by: Decision,
}

/// Initiative for one round: does `a` attack `b`?
///
/// Each combatant draws its own tiebreak noise (`a` first). Ties go to `a`.
/// Recomputed every round, so initiative is never sticky.
pub fn attacker_first(a: &mut Combatant, b: &mut Combatant) -> bool {
    let bias_a = a.roll_initiative();
    let bias_b = b.roll_initiative();
    bias_a >= bias_b
}

/// A single battle between two combatants.
///
/// Constructing a battle resets both combatants' session state (combo meter
/// and special flag). Health, level and experience are left alone, so a
/// campaign's player carries damage from one battle into the next.
pub struct Battle<'a> {
    first: &'a mut Combatant,
    second: &'a mut Combatant,
    transcript: BattleTranscript,
    max_rounds: u32,
    victory_xp: u32,
    outcome: Option<BattleOutcome>,
}

impl<'a> Battle<'a> {
    /// Creates a battle with default configuration.
    pub fn new(first: &'a mut Combatant, second: &'a mut Combatant) -> Self {
        Self::with_config(first, second, &GameConfig::default())
    }

    pub fn with_config(
        first: &'a mut Combatant,
        second: &'a mut Combatant,
        config: &GameConfig,
    ) -> Self {
        first.reset_session();
        second.reset_session();
        Self {
            first,
            second,
            transcript: BattleTranscript::new(),
            max_rounds: config.max_rounds,
            victory_xp: config.victory_xp,
            outcome: None,
        }
    }

    /// Overrides the round cap.
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn first(&self) -> &Combatant {
        &*self.first
    }

    pub fn second(&self) -> &Combatant {
        &*self.second
    }

    pub fn transcript(&self) -> &BattleTranscript {
        &self.transcript
    }

    pub fn into_transcript(self) -> BattleTranscript {
        self.transcript
    }

    pub fn rounds(&self) -> u32 {
        self.transcript.rounds()
    }

    pub fn outcome(&self) -> Option<&BattleOutcome> {
        self.outcome.as_ref()
    }

    /// True once a combatant is down or the round cap is reached.
    pub fn is_over(&self) -> bool {
        !self.first.is_standing()
            || !self.second.is_standing()
            || self.transcript.rounds() >= self.max_rounds
    }

    fn ensure_loadouts(&self) -> Result<(), CombatError> {
        for combatant in [&*self.first, &*self.second] {
            if combatant.loadout.is_empty() {
                return Err(CombatError::EmptyLoadout(combatant.name.clone()));
            }
        }
        Ok(())
    }

    /// Resolves one round.
    ///
    /// 1. Initiative picks attacker and defender.
    /// 2. An armed special fires and hits unblockably.
    /// 3. Otherwise both roll timing; the attacker spits a bar at its own
    ///    accuracy and the defender tries to block with *its* accuracy.
    /// 4. The round counter advances.
    ///
    /// Does nothing once the battle is over.
    pub fn play_round(&mut self) -> Result<(), CombatError> {
        self.ensure_loadouts()?;
        if self.is_over() {
            return Ok(());
        }

        let (attacker, defender) = if attacker_first(&mut *self.first, &mut *self.second) {
            (&mut *self.first, &mut *self.second)
        } else {
            (&mut *self.second, &mut *self.first)
        };

        let event = if attacker.special_ready {
            let damage = attacker.special_move();
            defender.health = defender.health.saturating_sub(damage);
            BattleEvent::Special {
                attacker: attacker.name.clone(),
                damage,
            }
        } else {
            let attack_accuracy = attacker.roll_accuracy();
            let defend_accuracy = defender.roll_accuracy();
            let bar = attacker.spit_bar(attack_accuracy)?;
            if defender.defend(defend_accuracy) {
                BattleEvent::Blocked {
                    attacker: attacker.name.clone(),
                    defender: defender.name.clone(),
                    move_name: bar.move_name,
                }
            } else {
                defender.health = defender.health.saturating_sub(bar.damage);
                BattleEvent::Landed {
                    attacker: attacker.name.clone(),
                    move_name: bar.move_name,
                    damage: bar.damage,
                }
            }
        };

        self.transcript.complete_round();
        debug!(
            round = self.transcript.rounds(),
            first_hp = self.first.health,
            second_hp = self.second.health,
            "{event}"
        );
        self.transcript.push(event);
        Ok(())
    }

    /// Plays rounds until a knockout or the round cap, then crowns a winner.
    ///
    /// The winner gains the configured victory XP and a final line is
    /// appended to the transcript. Calling `play` on a finished battle
    /// returns the same winner without granting XP again.
    ///
    /// # Errors
    ///
    /// Returns [`CombatError::EmptyLoadout`] before any round is played if
    /// either combatant has no moves.
    pub fn play(&mut self) -> Result<String, CombatError> {
        if let Some(outcome) = &self.outcome {
            return Ok(outcome.winner_name.clone());
        }
        self.ensure_loadouts()?;

        while self.first.is_standing()
            && self.second.is_standing()
            && self.transcript.rounds() < self.max_rounds
        {
            self.play_round()?;
        }

        let outcome = self.decide();
        if outcome.decided_by == Decision::RoundCap {
            warn!(
                rounds = outcome.rounds,
                first_hp = self.first.health,
                second_hp = self.second.health,
                "battle hit the round cap"
            );
        }

        let winner = match outcome.winner {
            Side::First => &mut *self.first,
            Side::Second => &mut *self.second,
        };
        let levels = winner.gain_xp(self.victory_xp);

        info!(
            winner = %outcome.winner_name,
            loser = %outcome.loser_name,
            rounds = outcome.rounds,
            decided_by = ?outcome.decided_by,
            levels_gained = levels,
            "battle finished"
        );

        self.transcript.push(BattleEvent::Victory {
            winner: outcome.winner_name.clone(),
            loser: outcome.loser_name.clone(),
            rounds: outcome.rounds,
            decided_by: outcome.decided_by,
        });
        let name = outcome.winner_name.clone();
        self.outcome = Some(outcome);
        Ok(name)
    }

    /// Applies the termination rule to the current state.
    ///
    /// Only the defender takes damage in a round, so at most one combatant
    /// can be down. With both standing (round cap) the higher health wins
    /// and an exact tie goes to the first combatant.
    fn decide(&self) -> BattleOutcome {
        let first_up = self.first.is_standing();
        let second_up = self.second.is_standing();

        let (winner, decided_by) = match (first_up, second_up) {
            (true, false) => (Side::First, Decision::Knockout),
            (false, true) => (Side::Second, Decision::Knockout),
            (true, true) => (self.leader(), Decision::RoundCap),
            (false, false) => (self.leader(), Decision::Knockout),
        };

        let (w, l) = match winner {
            Side::First => (&*self.first, &*self.second),
            Side::Second => (&*self.second, &*self.first),
        };
        BattleOutcome {
            winner,
            winner_name: w.name.clone(),
            loser_name: l.name.clone(),
            rounds: self.transcript.rounds(),
            decided_by,
        }
    }

    fn leader(&self) -> Side {
        if self.second.health > self.first.health {
            Side::Second
        } else {
            Side::First
        }
    }
}
