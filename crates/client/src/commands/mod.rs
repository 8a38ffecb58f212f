//! Simulator subcommands.

mod battle;
mod campaign;

pub use battle::{BattleCmd, BattleReport};
pub use campaign::{CampaignCmd, CampaignReport, PlayerSummary};
