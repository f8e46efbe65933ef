//! Authoritative world state representation.
//!
//! This module owns the data structures that describe the grid, entities,
//! registers and bookkeeping counters. Presentation layers read this state
//! but mutate it exclusively through the engine.
mod message;
mod registers;
pub mod types;

pub use message::MessageLog;
pub use registers::RegisterTable;
pub use types::{Entity, EntityKind, LevelDescriptor, Mode, Position};

use crate::config::GameConfig;

/// Floor glyph in the walkability grid; every other glyph is a wall.
pub const FLOOR: char = '.';

/// Canonical snapshot of a running level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldState {
    /// Walkability grid, row-major. Entities are never embedded here.
    pub tiles: Vec<Vec<char>>,
    pub width: usize,
    pub height: usize,
    pub player: Entity,
    /// Enemies and bosses, in spawn order.
    pub enemies: Vec<Entity>,
    /// Keys, locks, rubble and exits, in spawn order.
    pub interactables: Vec<Entity>,
    pub registers: RegisterTable,
    pub messages: MessageLog,
    pub mode: Mode,
    /// Resolved commands since the level was loaded.
    pub keystrokes: u32,
    pub level_complete: bool,
    pub aura_active: bool,
    /// Second aura trigger; nothing in the rule set currently raises it.
    pub last_move_efficient: bool,
}

impl WorldState {
    /// Creates an empty world holding only a player at the origin.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            tiles: Vec::new(),
            width: 0,
            height: 0,
            player: Entity::player(Position::ORIGIN, config.player_hp),
            enemies: Vec::new(),
            interactables: Vec::new(),
            registers: RegisterTable::new(),
            messages: MessageLog::new(config.message_capacity),
            mode: Mode::Normal,
            keystrokes: 0,
            level_complete: false,
            aura_active: false,
            last_move_efficient: false,
        }
    }

    /// Returns true if the position lies within the grid.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as usize) < self.width
            && (position.y as usize) < self.height
    }

    /// Clamps a position into the grid (no wraparound).
    pub fn clamp(&self, position: Position) -> Position {
        let max_x = self.width.saturating_sub(1) as i32;
        let max_y = self.height.saturating_sub(1) as i32;
        Position::new(position.x.clamp(0, max_x), position.y.clamp(0, max_y))
    }

    pub fn tile(&self, position: Position) -> Option<char> {
        if !self.contains(position) {
            return None;
        }
        self.tiles
            .get(position.y as usize)
            .and_then(|row| row.get(position.x as usize))
            .copied()
    }

    pub fn is_floor(&self, position: Position) -> bool {
        self.tile(position) == Some(FLOOR)
    }

    /// First non-player entity at the exact position (enemies before interactables).
    pub fn entity_at(&self, position: Position) -> Option<&Entity> {
        self.enemies
            .iter()
            .chain(self.interactables.iter())
            .find(|entity| entity.position == position)
    }

    /// Marks the level as complete. Only a fresh level load clears the flag.
    pub fn complete_level(&mut self) {
        self.level_complete = true;
    }

    /// Returns an iterator over every entity on the grid, player last.
    pub fn all_entities(&self) -> impl Iterator<Item = &Entity> {
        self.interactables
            .iter()
            .chain(self.enemies.iter())
            .chain(std::iter::once(&self.player))
    }
}
