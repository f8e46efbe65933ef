use crate::action::ActionTransition;
use crate::config::GameConfig;
use crate::state::{EntityKind, WorldState};

/// Copies an adjacent key into a register and removes the key from the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YankAction {
    pub register: char,
}

impl YankAction {
    pub fn new(register: char) -> Self {
        Self { register }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YankOutcome {
    Stored { letter: char },
    NothingInRange,
}

impl ActionTransition for YankAction {
    type Outcome = YankOutcome;

    fn apply(&self, world: &mut WorldState, _config: &GameConfig) -> YankOutcome {
        let origin = world.player.position;
        let found = world
            .interactables
            .iter()
            .enumerate()
            .find_map(|(index, entity)| match entity.kind {
                EntityKind::Key { letter } if origin.is_adjacent(entity.position) => {
                    Some((index, letter))
                }
                _ => None,
            });

        let Some((index, letter)) = found else {
            world.messages.push("Nothing here to yank.");
            return YankOutcome::NothingInRange;
        };

        let key = world.interactables.remove(index);
        world.registers.set(self.register, letter);
        world.messages.push(format!(
            "Success: {} extracted into register '{}'",
            key.name, self.register
        ));
        YankOutcome::Stored { letter }
    }
}

/// Uses a register's letter on an adjacent lock. The register keeps its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PutAction {
    pub register: char,
}

impl PutAction {
    pub fn new(register: char) -> Self {
        Self { register }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PutOutcome {
    EmptyRegister,
    Unlocked { letter: char },
    /// Every lock in range rejected the letter; reports the last one tried.
    Mismatch { held: char, required: char },
    /// No lock in range. Deliberately silent in the message log.
    NothingInRange,
}

impl ActionTransition for PutAction {
    type Outcome = PutOutcome;

    fn apply(&self, world: &mut WorldState, _config: &GameConfig) -> PutOutcome {
        let Some(held) = world.registers.get(self.register) else {
            world.messages.push(format!(
                "Error: Register '{}' is currently empty.",
                self.register
            ));
            return PutOutcome::EmptyRegister;
        };

        // Snapshot the locks in reach, then unlock the first one that matches.
        let origin = world.player.position;
        let in_range: Vec<(usize, char, char)> = world
            .interactables
            .iter()
            .enumerate()
            .filter_map(|(index, entity)| match entity.kind {
                EntityKind::Lock { letter } if origin.is_adjacent(entity.position) => {
                    Some((index, letter, entity.symbol))
                }
                _ => None,
            })
            .collect();

        let mut outcome = PutOutcome::NothingInRange;
        for (index, required, glyph) in in_range {
            if required == held {
                world.interactables.remove(index);
                world
                    .messages
                    .push(format!("Access Granted: Lock {glyph} disengaged!"));
                return PutOutcome::Unlocked { letter: required };
            }
            world.messages.push(format!(
                "Failure: Register '{}' holds '{}', Lock {} rejects it.",
                self.register, held, glyph
            ));
            outcome = PutOutcome::Mismatch { held, required };
        }
        outcome
    }
}
