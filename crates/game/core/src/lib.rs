//! Deterministic game logic and data types for the VimRunner dungeon.
//!
//! `game-core` defines the canonical rules and exposes pure, synchronous APIs
//! that the runtime and presentation layers build on:
//! - [`parser`] turns raw keys into resolved commands
//! - [`engine`] owns the world and applies those commands
//! - [`state`] holds the data model
//!
//! All state mutation flows through [`engine::GameEngine`].
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod parser;
pub mod state;

pub use action::{
    Action, ActionOutcome, ActionTransition, DeleteAction, DeleteOutcome, DeleteScope,
    MoveAction, MoveOutcome, MoveStop, PutAction, PutOutcome, RegexAttackAction, RegexOutcome,
    Substitution, YankAction, YankOutcome,
};
pub use config::GameConfig;
pub use engine::{GameEngine, LevelError};
pub use error::{ErrorSeverity, GameError};
pub use parser::{CommandSink, Key, KeyParser, Motion, Operator};
pub use state::{
    Entity, EntityKind, LevelDescriptor, MessageLog, Mode, Position, RegisterTable, WorldState,
};
