//! Errors surfaced by the session layer.

use thiserror::Error;

use game_core::LevelError;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session requires at least one level")]
    NoLevels,

    #[error("level at index {index} cannot be loaded")]
    InvalidLevel {
        index: usize,
        #[source]
        source: LevelError,
    },

    #[error("start index {index} is out of range for {count} levels")]
    StartOutOfRange { index: usize, count: usize },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
