//! Uppercut City simulator binary.
//!
//! # Examples
//!
//! ```bash
//! uppercut battle "MC Blaze" "DJ Uppercut" --seed 7
//! uppercut campaign "MC Blaze" --json
//! UPPERCUT_DATA_DIR=./my-content uppercut campaign "MC Blaze"
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use uppercut_client::commands::{BattleCmd, CampaignCmd};
use uppercut_client::{ClientConfig, Session, logging};

/// Turn-based rap battle simulator
#[derive(Parser)]
#[command(name = "uppercut")]
#[command(about = "Run Uppercut City battles and campaigns", long_about = None)]
#[command(version)]
struct Cli {
    /// Load content from this directory instead of the built-in roster
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Master seed for a reproducible run
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Round cap per battle
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    max_rounds: Option<u32>,

    /// Print a JSON report instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run one battle between two characters
    Battle(BattleCmd),

    /// Run the district ladder with one player
    Campaign(CampaignCmd),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for UPPERCUT_* variables)
    let _ = dotenvy::dotenv();
    logging::setup_logging();

    let cli = Cli::parse();
    let flags = ClientConfig {
        data_dir: cli.data_dir,
        seed: cli.seed,
        max_rounds: cli.max_rounds,
    };
    let config = ClientConfig::from_env().overridden_by(flags);
    let session = Session::load(&config)?;

    match cli.command {
        Command::Battle(cmd) => cmd.execute(&session, cli.json),
        Command::Campaign(cmd) => cmd.execute(&session, cli.json),
    }
}
