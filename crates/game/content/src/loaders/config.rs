//! Game configuration loader.

use std::path::Path;

use uppercut_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        if config.max_rounds == 0 {
            anyhow::bail!("max_rounds must be at least 1");
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uppercut_core::RewardPolicy;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("reward_policy = \"boss_victory\"\n").unwrap();
        assert_eq!(config.reward_policy, RewardPolicy::BossVictory);
        assert_eq!(config.max_rounds, GameConfig::DEFAULT_MAX_ROUNDS);
        assert!(!config.auto_equip_rewards);
    }

    #[test]
    fn zero_round_cap_is_rejected() {
        assert!(ConfigLoader::parse("max_rounds = 0\n").is_err());
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(ConfigLoader::parse("reward_policy = \"sometimes\"\n").is_err());
    }
}
