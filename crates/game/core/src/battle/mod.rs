//! Battle engine: resolves one battle between two combatants.
//!
//! A [`Battle`] borrows both combatants mutably for its lifetime, owns its
//! [`BattleTranscript`], and ends on a knockout or at the round cap. See
//! [`Decision`] for the tie-break applied at the cap.

mod engine;
mod transcript;

pub use engine::{Battle, BattleOutcome, Decision, Side, attacker_first};
pub use transcript::{BattleEvent, BattleTranscript};
