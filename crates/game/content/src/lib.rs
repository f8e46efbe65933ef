//! Data-driven level content and loaders.
//!
//! This crate houses the authored curriculum and the files that tune it:
//! - Level descriptors (data-driven via RON, the built-in set is embedded)
//! - Generated training sectors that extend the curriculum
//! - Narrative milestone texts shown between levels
//! - Game configuration (data-driven via TOML)
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

pub mod narrative;

#[cfg(feature = "loaders")]
pub mod curriculum;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use narrative::Milestone;

#[cfg(feature = "loaders")]
pub use curriculum::{BUILTIN_LEVELS_RON, FINAL_LEVEL, builtin_levels, sector};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LevelLoader, LoadResult};
