//! Repository layer for best-score persistence.
//!
//! Level content is static and handled by `game-content`; repositories only
//! hold data that changes while playing.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileScoreRepository;
pub use memory::InMemoryScoreRepository;
pub use traits::ScoreRepository;
