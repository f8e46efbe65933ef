//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to the defaults in [`GameConfig`].
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
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("boss_hp = 20\nregex_damage = 4\n").unwrap();

        assert_eq!(config.boss_hp, 20);
        assert_eq!(config.regex_damage, 4);
        assert_eq!(config.message_capacity, GameConfig::DEFAULT_MESSAGE_CAPACITY);
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(ConfigLoader::parse("boss_hp = \"lots\"").is_err());
    }
}
