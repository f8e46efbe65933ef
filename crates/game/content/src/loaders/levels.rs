//! Level list loader.

use std::collections::BTreeSet;
use std::path::Path;

use game_core::LevelDescriptor;

use crate::loaders::{LoadResult, read_file};

/// Loader for level lists from RON files.
///
/// Only the list shape is checked here. Map validity is decided by the
/// engine when a level is loaded.
pub struct LevelLoader;

impl LevelLoader {
    /// Load a level list from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<LevelDescriptor>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load levels from {}: {}", path.display(), e))
    }

    /// Parse a level list from RON text.
    ///
    /// The list must be non-empty and level numbers must be unique.
    pub fn parse(content: &str) -> LoadResult<Vec<LevelDescriptor>> {
        let levels: Vec<LevelDescriptor> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse levels RON: {}", e))?;

        anyhow::ensure!(!levels.is_empty(), "Level list is empty");

        let mut seen = BTreeSet::new();
        for level in &levels {
            anyhow::ensure!(
                seen.insert(level.number),
                "Duplicate level number {}",
                level.number
            );
        }

        Ok(levels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_level() {
        let levels = LevelLoader::parse(
            r#"[(number: 1, name: "One", instructions: "Go.", map: ["@.>"])]"#,
        )
        .unwrap();

        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].par_keystrokes, 0);
        assert!(levels[0].unlocked_commands.is_empty());
    }

    #[test]
    fn rejects_empty_list() {
        let err = LevelLoader::parse("[]").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn rejects_duplicate_numbers() {
        let err = LevelLoader::parse(
            r#"[
                (number: 2, name: "A", instructions: "", map: ["@"]),
                (number: 2, name: "B", instructions: "", map: ["@"]),
            ]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate level number 2"));
    }

    #[test]
    fn reports_missing_file() {
        let err = LevelLoader::load(Path::new("/nonexistent/levels.ron")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
