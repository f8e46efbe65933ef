//! In-memory ScoreRepository implementation for tests and local runs.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::repository::traits::improves;
use crate::repository::{RepositoryError, Result, ScoreRepository};

/// In-memory implementation of ScoreRepository.
///
/// Nothing survives the process.
#[derive(Debug)]
pub struct InMemoryScoreRepository {
    scores: RwLock<BTreeMap<u32, u32>>,
}

impl InMemoryScoreRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            scores: RwLock::new(BTreeMap::new()),
        }
    }

    /// Create with pre-seeded best scores.
    pub fn with_scores(scores: impl IntoIterator<Item = (u32, u32)>) -> Self {
        Self {
            scores: RwLock::new(scores.into_iter().collect()),
        }
    }
}

impl Default for InMemoryScoreRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreRepository for InMemoryScoreRepository {
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
        scores.insert(level, strokes);
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
