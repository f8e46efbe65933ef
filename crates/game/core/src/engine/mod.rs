//! World engine: the single owner of mutable game state.
//!
//! The [`GameEngine`] loads levels, applies resolved commands and produces
//! render snapshots. All mutation goes through its methods; callers hold the
//! engine by value or by exclusive reference and never share it between
//! sessions.

mod errors;
mod loader;

pub use errors::LevelError;

use crate::action::{Action, ActionOutcome, ActionTransition, MoveAction, MoveOutcome};
use crate::config::GameConfig;
use crate::parser::CommandSink;
use crate::state::{Entity, LevelDescriptor, MessageLog, Mode, Position, RegisterTable, WorldState};

/// Greeting placed in the message log when an engine is created.
pub const GREETING: &str = "VimRunner Online. Neural link established.";

pub struct GameEngine {
    config: GameConfig,
    world: WorldState,
    level: Option<LevelDescriptor>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameEngine {
    /// Creates an engine with an empty world; call [`load_level`](Self::load_level) next.
    pub fn new(config: GameConfig) -> Self {
        let mut world = WorldState::new(&config);
        world.messages.push(GREETING);
        Self {
            config,
            world,
            level: None,
        }
    }

    /// Replaces the map and entities with the level's initial layout.
    ///
    /// Resets mode, keystroke count, completion and aura. Registers and the
    /// message log carry over between levels. On error nothing is changed.
    pub fn load_level(&mut self, level: &LevelDescriptor) -> Result<(), LevelError> {
        let layout = loader::scan(level, &self.config)?;

        self.world.tiles = layout.tiles;
        self.world.width = layout.width;
        self.world.height = layout.height;
        self.world.player.position = layout.player;
        self.world.enemies = layout.enemies;
        self.world.interactables = layout.interactables;
        self.world.mode = Mode::Normal;
        self.world.keystrokes = 0;
        self.world.level_complete = false;
        self.world.aura_active = false;
        self.world.last_move_efficient = false;
        self.world
            .messages
            .push(format!("Level {}: {}", level.number, level.name));
        self.level = Some(level.clone());

        Ok(())
    }

    /// Applies one resolved command, counting it as a keystroke.
    pub fn apply(&mut self, action: &Action) -> ActionOutcome {
        self.world.keystrokes = self.world.keystrokes.saturating_add(1);
        self.perform_action(action)
    }

    /// Dispatches an action without touching the keystroke counter.
    pub fn perform_action(&mut self, action: &Action) -> ActionOutcome {
        action.apply(&mut self.world, &self.config)
    }

    pub fn move_player(&mut self, dx: i32, dy: i32, count: u32) -> MoveOutcome {
        MoveAction::new(dx, dy, count).apply(&mut self.world, &self.config)
    }

    /// First enemy or interactable at the exact position.
    pub fn get_entity_at(&self, position: Position) -> Option<&Entity> {
        self.world.entity_at(position)
    }

    pub fn add_message(&mut self, message: impl Into<String>) {
        self.world.messages.push(message);
    }

    pub fn complete_level(&mut self) {
        self.world.complete_level();
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.world.mode = mode;
    }

    /// Character matrix for display: floor/walls overlaid with interactables,
    /// then enemies, then the player.
    pub fn render_grid(&self) -> Vec<Vec<char>> {
        let mut grid = self.world.tiles.clone();
        for entity in self.world.all_entities() {
            let Position { x, y } = entity.position;
            if let Some(cell) = grid
                .get_mut(y as usize)
                .and_then(|row| row.get_mut(x as usize))
            {
                *cell = entity.symbol;
            }
        }
        grid
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The level most recently loaded successfully.
    pub fn level(&self) -> Option<&LevelDescriptor> {
        self.level.as_ref()
    }

    pub fn par_keystrokes(&self) -> u32 {
        self.level.as_ref().map_or(0, |level| level.par_keystrokes)
    }

    pub fn player(&self) -> &Entity {
        &self.world.player
    }

    pub fn enemies(&self) -> &[Entity] {
        &self.world.enemies
    }

    pub fn interactables(&self) -> &[Entity] {
        &self.world.interactables
    }

    pub fn registers(&self) -> &RegisterTable {
        &self.world.registers
    }

    pub fn messages(&self) -> &MessageLog {
        &self.world.messages
    }

    pub fn mode(&self) -> Mode {
        self.world.mode
    }

    pub fn keystrokes(&self) -> u32 {
        self.world.keystrokes
    }

    pub fn is_level_complete(&self) -> bool {
        self.world.level_complete
    }

    pub fn aura_active(&self) -> bool {
        self.world.aura_active
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.world.width, self.world.height)
    }
}

/// Lets the parser drive the engine directly: mode changes are stored and
/// every resolved command is applied as one keystroke.
impl CommandSink for GameEngine {
    fn on_mode_change(&mut self, mode: Mode) {
        self.set_mode(mode);
    }

    fn on_action(&mut self, action: Action) {
        self.apply(&action);
    }
}
