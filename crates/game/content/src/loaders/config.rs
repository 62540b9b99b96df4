//! Game configuration loader.

use std::path::Path;

use merge_core::GameConfig;

use crate::loaders::{LoadResult, read_file};
use crate::policies::PolicyConfig;

/// Contents of `config.toml`.
///
/// ```toml
/// [game]
/// size = 4
/// seed = 7
///
/// [policy]
/// initial_tiles = 2
/// high_value_percent = 10
/// ```
///
/// Every section and key is optional and falls back to its default.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub game: GameConfig,
    pub policy: PolicyConfig,
}

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not valid TOML, or holds values
    /// the engine would reject.
    pub fn load(path: &Path) -> LoadResult<ContentConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            size = config.game.size,
            seed = config.game.seed,
            "loaded config"
        );
        Ok(config)
    }

    /// Parse and validate config from TOML text.
    pub fn parse(content: &str) -> LoadResult<ContentConfig> {
        let config: ContentConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        config
            .game
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid [game] section: {}", e))?;
        anyhow::ensure!(
            config.policy.high_value_percent <= 100,
            "Invalid [policy] section: high_value_percent {} exceeds 100",
            config.policy.high_value_percent
        );
        anyhow::ensure!(
            config.policy.low_value != 0 && config.policy.high_value != 0,
            "Invalid [policy] section: spawn values must be non-zero"
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, ContentConfig::default());
    }

    #[test]
    fn partial_sections_are_filled() {
        let config = ConfigLoader::parse("[game]\nsize = 5\n").unwrap();
        assert_eq!(config.game.size, 5);
        assert_eq!(config.game.seed, GameConfig::DEFAULT_SEED);
        assert_eq!(config.policy, PolicyConfig::default());
    }

    #[test]
    fn rejects_invalid_size() {
        let err = ConfigLoader::parse("[game]\nsize = 0\n").unwrap_err();
        assert!(err.to_string().contains("[game]"));
    }

    #[test]
    fn rejects_bad_percent() {
        let err = ConfigLoader::parse("[policy]\nhigh_value_percent = 150\n").unwrap_err();
        assert!(err.to_string().contains("high_value_percent"));
    }

    #[test]
    fn rejects_zero_spawn_value() {
        assert!(ConfigLoader::parse("[policy]\nlow_value = 0\n").is_err());
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = ConfigLoader::parse("[game\nsize = 4").unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
