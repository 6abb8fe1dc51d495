//! Game configuration loader.

use std::path::Path;

use usable_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their [`GameConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let config = ConfigLoader::parse("inventory_capacity = 5\n").unwrap();
        assert_eq!(config.inventory_capacity, 5);
        assert_eq!(
            config.max_active_effects,
            GameConfig::DEFAULT_MAX_ACTIVE_EFFECTS
        );
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(ConfigLoader::parse("inventory_capacity = \"many\"\n").is_err());
    }
}
