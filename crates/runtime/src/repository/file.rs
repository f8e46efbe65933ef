//! File-based ScoreRepository implementation.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::repository::traits::improves;
use crate::repository::{RepositoryError, Result, ScoreRepository};

/// File-based implementation of ScoreRepository.
///
/// # File Format
///
/// A single flat JSON object mapping the level number (as a string key) to
/// the best keystroke count:
///
/// ```json
/// {"1": 4, "2": 2}
/// ```
///
/// The whole object is rewritten through a temp file and an atomic rename
/// whenever a record improves.
#[derive(Debug)]
pub struct FileScoreRepository {
    path: PathBuf,
    scores: RwLock<BTreeMap<u32, u32>>,
}

impl FileScoreRepository {
    /// Open the score file, starting empty if it does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let scores = if path.exists() {
            let bytes = fs::read(&path)?;
            decode(&bytes)?
        } else {
            BTreeMap::new()
        };

        tracing::debug!("Loaded {} best scores from {}", scores.len(), path.display());

        Ok(Self {
            path,
            scores: RwLock::new(scores),
        })
    }

    /// Start with no scores; the file is overwritten on the first record.
    pub fn fresh(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            scores: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, scores: &BTreeMap<u32, u32>) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        let bytes =
            serde_json::to_vec(scores).map_err(|e| RepositoryError::Json(e.to_string()))?;

        // Write to temp file
        fs::write(&temp_path, bytes)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Saved {} best scores to {}", scores.len(), self.path.display());

        Ok(())
    }
}

fn decode(bytes: &[u8]) -> Result<BTreeMap<u32, u32>> {
    let scores: BTreeMap<u32, u32> =
        serde_json::from_slice(bytes).map_err(|e| RepositoryError::Json(e.to_string()))?;

    if let Some((level, _)) = scores.iter().find(|(_, strokes)| **strokes == 0) {
        return Err(RepositoryError::CorruptedData(format!(
            "level {level} records zero keystrokes"
        )));
    }

    Ok(scores)
}

impl ScoreRepository for FileScoreRepository {
    fn best(&self, level: u32) -> Result<Option<u32>> {
        let scores = self
            .scores
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(scores.get(&level).copied())
    }

    fn record(&self, level: u32, strokes: u32) -> Result<bool> {
        let mut scores = self
            .scores
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        if !improves(scores.get(&level).copied(), strokes) {
            return Ok(false);
        }

        let previous = scores.insert(level, strokes);
        if let Err(err) = self.persist(&scores) {
            // Keep memory and disk in agreement.
            match previous {
                Some(best) => scores.insert(level, best),
                None => scores.remove(&level),
            };
            return Err(err);
        }
        Ok(true)
    }

    fn all(&self) -> Result<BTreeMap<u32, u32>> {
        let scores = self
            .scores
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(scores.clone())
    }
}
