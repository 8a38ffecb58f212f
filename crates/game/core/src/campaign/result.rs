//! Per-battle campaign records.

use crate::battle::BattleTranscript;

/// Position of a battle within its district.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Stage {
    Warmup,
    Midboss,
    Boss,
}

/// Outcome of one campaign battle. Immutable once recorded.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    pub district: String,
    pub stage: Stage,
    pub winner: String,
    /// True when the campaign's player won, whatever the names involved.
    pub player_won: bool,
    pub transcript: BattleTranscript,
}

impl MatchResult {
    pub fn new(
        district: impl Into<String>,
        stage: Stage,
        winner: impl Into<String>,
        player_won: bool,
        transcript: BattleTranscript,
    ) -> Self {
        Self {
            district: district.into(),
            stage,
            winner: winner.into(),
            player_won,
            transcript,
        }
    }
}
