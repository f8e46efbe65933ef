//! Resolved player commands and the state transitions they perform.
//!
//! Every command the key parser resolves becomes one [`Action`]. Each variant
//! wraps a concrete action struct implementing [`ActionTransition`]; the
//! engine routes them through [`Action::apply`]. Blocked moves, empty
//! registers and malformed substitutions are ordinary outcomes reported
//! through the message log, never errors.

pub mod combat;
pub mod movement;
pub mod regex;
pub mod register;

pub use combat::{DeleteAction, DeleteOutcome, DeleteScope};
pub use movement::{MoveAction, MoveOutcome, MoveStop};
pub use regex::{RegexAttackAction, RegexOutcome, Substitution};
pub use register::{PutAction, PutOutcome, YankAction, YankOutcome};

use crate::config::GameConfig;
use crate::state::WorldState;

/// Defines how a concrete action variant mutates world state.
pub trait ActionTransition {
    type Outcome;

    /// Applies the action by mutating the world directly.
    fn apply(&self, world: &mut WorldState, config: &GameConfig) -> Self::Outcome;
}

/// Closed set of commands the engine accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move(MoveAction),
    Yank(YankAction),
    Put(PutAction),
    RegexAttack(RegexAttackAction),
    Delete(DeleteAction),
}

/// What an applied action did, for logging and presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Move(MoveOutcome),
    Yank(YankOutcome),
    Put(PutOutcome),
    RegexAttack(RegexOutcome),
    Delete(DeleteOutcome),
}

impl Action {
    pub fn moving(dx: i32, dy: i32, count: u32) -> Self {
        Self::Move(MoveAction::new(dx, dy, count))
    }

    pub fn yank(register: char) -> Self {
        Self::Yank(YankAction::new(register))
    }

    pub fn put(register: char) -> Self {
        Self::Put(PutAction::new(register))
    }

    pub fn regex_attack(command: impl Into<String>) -> Self {
        Self::RegexAttack(RegexAttackAction::new(command))
    }

    pub fn delete(scope: DeleteScope, count: u32) -> Self {
        Self::Delete(DeleteAction::new(scope, count))
    }

    /// Routes the action to its transition.
    pub fn apply(&self, world: &mut WorldState, config: &GameConfig) -> ActionOutcome {
        match self {
            Action::Move(action) => ActionOutcome::Move(action.apply(world, config)),
            Action::Yank(action) => ActionOutcome::Yank(action.apply(world, config)),
            Action::Put(action) => ActionOutcome::Put(action.apply(world, config)),
            Action::RegexAttack(action) => ActionOutcome::RegexAttack(action.apply(world, config)),
            Action::Delete(action) => ActionOutcome::Delete(action.apply(world, config)),
        }
    }

    /// Returns the snake_case name of the action, used as a logging key.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::Move(_) => "move",
            Action::Yank(_) => "yank",
            Action::Put(_) => "put",
            Action::RegexAttack(_) => "regex_attack",
            Action::Delete(action) => action.scope.as_snake_case(),
        }
    }
}

impl From<MoveAction> for Action {
    fn from(action: MoveAction) -> Self {
        Self::Move(action)
    }
}

impl From<YankAction> for Action {
    fn from(action: YankAction) -> Self {
        Self::Yank(action)
    }
}

impl From<PutAction> for Action {
    fn from(action: PutAction) -> Self {
        Self::Put(action)
    }
}

impl From<RegexAttackAction> for Action {
    fn from(action: RegexAttackAction) -> Self {
        Self::RegexAttack(action)
    }
}

impl From<DeleteAction> for Action {
    fn from(action: DeleteAction) -> Self {
        Self::Delete(action)
    }
}
