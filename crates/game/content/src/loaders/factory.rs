//! Content factory for loading a content pack from a data directory.

use std::path::{Path, PathBuf};

use game_core::{GameConfig, LevelDescriptor};

use crate::curriculum::builtin_levels;
use crate::loaders::{ConfigLoader, LevelLoader, LoadResult};

/// Content factory that loads game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── levels.ron
/// ```
///
/// Either file may be missing; the built-in defaults are used instead.
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

    /// Load game configuration from `config.toml`, or the defaults.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the level list from `levels.ron`, or the built-in curriculum.
    pub fn load_levels(&self) -> LoadResult<Vec<LevelDescriptor>> {
        let path = self.data_dir.join("levels.ron");
        if !path.exists() {
            return builtin_levels();
        }
        LevelLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
