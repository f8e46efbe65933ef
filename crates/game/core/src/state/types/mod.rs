mod common;
mod entities;
mod level;
mod mode;

pub use common::Position;
pub use entities::{Entity, EntityKind};
pub use level::LevelDescriptor;
pub use mode::Mode;
