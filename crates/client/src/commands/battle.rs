//! Single battle between two catalog characters.

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use uppercut_core::{Battle, BattleEvent, Decision};

use crate::session::Session;

/// Run one battle and print its transcript
#[derive(Parser, Debug)]
pub struct BattleCmd {
    /// Challenger (wins exact ties at the round cap)
    pub first: String,

    /// Opponent
    pub second: String,
}

/// Machine-readable battle result.
#[derive(Debug, Serialize)]
pub struct BattleReport {
    pub winner: String,
    pub rounds: u32,
    pub decided_by: Option<Decision>,
    pub transcript: Vec<String>,
    pub events: Vec<BattleEvent>,
}

impl BattleCmd {
    pub fn run(&self, session: &Session) -> Result<BattleReport> {
        let mut master = session.master_rng();
        let mut a = session
            .catalog
            .spawn(&self.first, Some(Session::child_rng(&mut master)))?;
        let mut b = session
            .catalog
            .spawn(&self.second, Some(Session::child_rng(&mut master)))?;

        let mut battle = Battle::with_config(&mut a, &mut b, &session.config);
        let winner = battle.play()?;
        let decided_by = battle.outcome().map(|o| o.decided_by);
        let rounds = battle.rounds();
        let transcript = battle.into_transcript();

        Ok(BattleReport {
            winner,
            rounds,
            decided_by,
            transcript: transcript.lines().collect(),
            events: transcript.events().to_vec(),
        })
    }

    pub fn execute(self, session: &Session, json: bool) -> Result<()> {
        let report = self.run(session)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            for line in &report.transcript {
                println!("{line}");
            }
            println!("Winner: {}", report.winner);
        }
        Ok(())
    }
}
