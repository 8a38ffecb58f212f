//! Simulator configuration from the environment.
use std::env;
use std::path::PathBuf;

/// Settings read from the environment (and `.env` via `dotenvy`).
///
/// Command-line flags take precedence over every field here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Content directory; built-in content when unset.
    pub data_dir: Option<PathBuf>,
    /// Master seed for reproducible runs.
    pub seed: Option<u64>,
    /// Round cap override.
    pub max_rounds: Option<u32>,
}

impl ClientConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `UPPERCUT_DATA_DIR` - Directory with `characters.ron`, `moves.ron`, ...
    /// - `UPPERCUT_SEED` - Master seed (unsigned integer)
    /// - `UPPERCUT_MAX_ROUNDS` - Round cap per battle (at least 1)
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var_os("UPPERCUT_DATA_DIR").map(PathBuf::from),
            seed: read_env("UPPERCUT_SEED"),
            max_rounds: read_env::<u32>("UPPERCUT_MAX_ROUNDS").map(|n| n.max(1)),
        }
    }

    /// Layers explicit values over this configuration.
    pub fn overridden_by(self, other: ClientConfig) -> Self {
        Self {
            data_dir: other.data_dir.or(self.data_dir),
            seed: other.seed.or(self.seed),
            max_rounds: other.max_rounds.or(self.max_rounds),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_win_over_environment() {
        let env = ClientConfig {
            data_dir: Some("/srv/content".into()),
            seed: Some(1),
            max_rounds: Some(30),
        };
        let flags = ClientConfig {
            seed: Some(99),
            ..Default::default()
        };

        let merged = env.overridden_by(flags);
        assert_eq!(merged.seed, Some(99));
        assert_eq!(merged.max_rounds, Some(30));
        assert_eq!(merged.data_dir, Some(PathBuf::from("/srv/content")));
    }
}
