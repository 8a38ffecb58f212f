//! Content and configuration shared by every command.

use anyhow::{Context, Result};
use uppercut_content::{ContentFactory, builtin};
use uppercut_core::{Catalog, GameConfig, PcgRng, RandomSource};

use crate::config::ClientConfig;

/// Loaded catalog plus the effective game configuration.
pub struct Session {
    pub catalog: Catalog,
    pub config: GameConfig,
    pub seed: Option<u64>,
}

impl Session {
    /// Loads content from `data_dir` when set, otherwise the built-in content.
    pub fn load(client: &ClientConfig) -> Result<Self> {
        let (catalog, mut config) = match &client.data_dir {
            Some(dir) => {
                tracing::info!("Loading content from {}", dir.display());
                let factory = ContentFactory::new(dir);
                let catalog = factory
                    .load_catalog()
                    .with_context(|| format!("invalid content in {}", dir.display()))?;
                (catalog, factory.load_config()?)
            }
            None => {
                tracing::debug!("Using built-in content");
                (builtin::catalog()?, builtin::config()?)
            }
        };

        if let Some(max_rounds) = client.max_rounds {
            config = config.with_max_rounds(max_rounds);
        }

        Ok(Self {
            catalog,
            config,
            seed: client.seed,
        })
    }

    /// Master source: seeded when a seed was given, entropy otherwise.
    pub fn master_rng(&self) -> PcgRng {
        match self.seed {
            Some(seed) => PcgRng::new(seed),
            None => PcgRng::from_entropy(),
        }
    }

    /// Seed for a child source drawn from `master`.
    pub fn child_rng(master: &mut PcgRng) -> Box<dyn RandomSource> {
        Box::new(PcgRng::new(master.next_seed()))
    }
}
