//! Content factory for building engines from data files.

use std::path::{Path, PathBuf};

use merge_core::GridEngine;

use crate::loaders::{ConfigLoader, ContentConfig, LoadResult};
use crate::policies::ClassicPolicy;

/// Content factory that loads game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// └── config.toml
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game and policy configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<ContentConfig> {
        ConfigLoader::load(&self.config_path())
    }

    /// Build an engine running the classic policy described by `config.toml`.
    pub fn build_engine(&self) -> LoadResult<GridEngine<ClassicPolicy>> {
        let config = self.load_config()?;
        let policy = ClassicPolicy::new(config.policy);
        let engine = GridEngine::from_config(&config.game, policy)?;
        tracing::info!(
            size = config.game.size,
            seed = config.game.seed,
            "engine built from content"
        );
        Ok(engine)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(factory.config_path(), Path::new("/tmp/data/config.toml"));
    }

    #[test]
    fn missing_config_is_an_error() {
        let factory = ContentFactory::new("/nonexistent/merge-content");
        let err = factory.load_config().unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
