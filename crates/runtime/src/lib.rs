//! Session orchestration for VimRunner.
//!
//! This crate wires the rules engine from `game-core` to level progression
//! and best-score persistence. Consumers embed a [`Session`] and feed it
//! platform-independent keys.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the controller that drives engine and parser
//! - [`scoring`] grades runs against par
//! - [`repository`] persists best keystroke counts
pub mod error;
pub mod repository;
pub mod scoring;
pub mod session;

pub use error::{Result, RuntimeError};
pub use repository::{
    FileScoreRepository, InMemoryScoreRepository, RepositoryError, ScoreRepository,
};
pub use scoring::Rating;
pub use session::{KeyOutcome, LevelSummary, Session};
