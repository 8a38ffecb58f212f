//! Full district ladder for one player.

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use uppercut_core::{Campaign, Combatant, MatchResult};

use crate::session::Session;

/// Run the campaign ladder and print each result
#[derive(Parser, Debug)]
pub struct CampaignCmd {
    /// Player character
    pub player: String,
}

/// Player state after the campaign.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PlayerSummary {
    pub name: String,
    pub level: u32,
    pub experience: u32,
    pub health: i32,
    pub max_health: i32,
    /// Equipped gear ids in slot order.
    pub gear: Vec<String>,
}

impl From<&Combatant> for PlayerSummary {
    fn from(player: &Combatant) -> Self {
        Self {
            name: player.name.clone(),
            level: player.level(),
            experience: player.experience(),
            health: player.health,
            max_health: player.max_health(),
            gear: player.equipment.items().map(|item| item.id.clone()).collect(),
        }
    }
}

/// Machine-readable campaign result.
#[derive(Debug, Serialize)]
pub struct CampaignReport {
    pub results: Vec<MatchResult>,
    pub player: PlayerSummary,
    pub unlocks: Vec<String>,
}

impl CampaignCmd {
    pub fn run(&self, session: &Session) -> Result<(CampaignReport, String)> {
        let mut campaign = Campaign::for_character(&self.player, &session.catalog, session.seed)?
            .with_config(session.config.clone());
        let results = campaign.run()?;

        let unlocks = campaign.unlocks().iter().map(str::to_string).collect();
        let player_line = campaign.player().to_string();
        let report = CampaignReport {
            results,
            player: PlayerSummary::from(campaign.player()),
            unlocks,
        };
        Ok((report, player_line))
    }

    pub fn execute(self, session: &Session, json: bool) -> Result<()> {
        let (report, player_line) = self.run(session)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        for result in &report.results {
            println!("[{}:{}] → {}", result.district, result.stage, result.winner);
        }
        println!("{player_line}");
        println!("Unlocks: {:?}", report.unlocks);
        Ok(())
    }
}
