//! Client configuration: environment variables and the settings file.
use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

const APP_NAME: &str = "vimrunner";

/// Process-level configuration read from the environment.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub session_id: Option<String>,
    /// Settings TOML; defaults to `settings.toml` in the platform config dir.
    pub settings_path: Option<PathBuf>,
    /// Content pack directory holding `config.toml` and/or `levels.ron`.
    pub content_dir: Option<PathBuf>,
    /// Level list overriding both the content pack and the built-ins.
    pub levels_path: Option<PathBuf>,
    /// Best-score JSON; defaults to `scores.json` in the platform data dir.
    pub scores_path: Option<PathBuf>,
    /// 1-based level number to start from.
    pub start_level: Option<u32>,
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `VIMRUNNER_SESSION_ID` - Log directory name (default: timestamp)
    /// - `VIMRUNNER_CONFIG` - Settings TOML path
    /// - `VIMRUNNER_CONTENT` - Content pack directory
    /// - `VIMRUNNER_LEVELS` - Levels RON path
    /// - `VIMRUNNER_SCORES` - Best-score JSON path
    /// - `VIMRUNNER_START_LEVEL` - Level number to start from (default: 1)
    pub fn from_env() -> Self {
        Self {
            session_id: read_env("VIMRUNNER_SESSION_ID"),
            settings_path: read_env::<String>("VIMRUNNER_CONFIG").map(PathBuf::from),
            content_dir: read_env::<String>("VIMRUNNER_CONTENT").map(PathBuf::from),
            levels_path: read_env::<String>("VIMRUNNER_LEVELS").map(PathBuf::from),
            scores_path: read_env::<String>("VIMRUNNER_SCORES").map(PathBuf::from),
            start_level: read_env::<u32>("VIMRUNNER_START_LEVEL").filter(|level| *level > 0),
        }
    }

    pub fn settings_path(&self) -> Option<PathBuf> {
        self.settings_path
            .clone()
            .or_else(|| project_dirs().map(|dirs| dirs.config_dir().join("settings.toml")))
    }

    pub fn scores_path(&self) -> PathBuf {
        self.scores_path
            .clone()
            .or_else(|| project_dirs().map(|dirs| dirs.data_dir().join("scores.json")))
            .unwrap_or_else(|| PathBuf::from("vimrunner_scores.json"))
    }

    /// Zero-based index of the first level to play.
    pub fn start_index(&self) -> usize {
        self.start_level.map_or(0, |level| level as usize - 1)
    }
}

/// Player preferences loaded from TOML.
///
/// ```toml
/// theme = "tokyonight"
/// sound_enabled = true
///
/// [key_map]
/// a = "h"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    pub sound_enabled: bool,
    /// Pressed key to the key delivered to the game.
    pub key_map: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "tokyonight".to_string(),
            sound_enabled: true,
            key_map: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Reads the settings file, or returns the defaults when it is absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path.filter(|path| path.exists()) else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid settings {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Single-character remap entries; anything else is skipped with a warning.
    pub fn key_remap(&self) -> BTreeMap<char, char> {
        self.key_map
            .iter()
            .filter_map(|(from, to)| match (single_char(from), single_char(to)) {
                (Some(from), Some(to)) => Some((from, to)),
                _ => {
                    tracing::warn!("Ignoring key_map entry {:?} = {:?}", from, to);
                    None
                }
            })
            .collect()
    }
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    let ch = chars.next()?;
    chars.next().is_none().then_some(ch)
}

pub(crate) fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
