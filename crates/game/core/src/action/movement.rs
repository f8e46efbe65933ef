use crate::action::ActionTransition;
use crate::config::GameConfig;
use crate::state::{EntityKind, Position, WorldState};

/// Relative movement of up to `repeat` steps.
///
/// `count` is the count the player typed and drives the aura. It equals
/// `repeat` for ordinary motions; line jumps sweep the row with a count of 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub dx: i32,
    pub dy: i32,
    pub count: u32,
    pub repeat: u32,
}

impl MoveAction {
    pub fn new(dx: i32, dy: i32, count: u32) -> Self {
        Self {
            dx,
            dy,
            count,
            repeat: count,
        }
    }

    /// Horizontal sweep toward a row edge (`0`, `$`).
    pub fn line(dx: i32) -> Self {
        Self {
            dx,
            dy: 0,
            count: 1,
            repeat: GameConfig::MAX_MAP_WIDTH as u32,
        }
    }

    fn destination_from(&self, world: &WorldState, origin: Position) -> Position {
        world.clamp(Position::new(origin.x + self.dx, origin.y + self.dy))
    }
}

/// Why a multi-step move ended before using up its count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveStop {
    /// The step landed on the exit; the level is complete.
    ReachedExit,
    /// An enemy, boss, rubble or lock occupies the next cell.
    Blocked { by: String },
    /// The next cell is a wall.
    Wall,
    /// Clamping at the grid edge left the player in place.
    Edge,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub steps: u32,
    pub stop: Option<MoveStop>,
}

impl ActionTransition for MoveAction {
    type Outcome = MoveOutcome;

    fn apply(&self, world: &mut WorldState, _config: &GameConfig) -> MoveOutcome {
        // `last_move_efficient` is never raised, so only the count matters in practice.
        world.aura_active = self.count > 1 || world.last_move_efficient;

        let mut steps = 0;
        for _ in 0..self.repeat {
            let origin = world.player.position;
            let destination = self.destination_from(world, origin);
            if destination == origin {
                return MoveOutcome {
                    steps,
                    stop: Some(MoveStop::Edge),
                };
            }

            let occupant = world
                .entity_at(destination)
                .map(|entity| (entity.kind, entity.name.clone()));
            match occupant {
                Some((EntityKind::Exit, _)) => {
                    world.complete_level();
                    return MoveOutcome {
                        steps,
                        stop: Some(MoveStop::ReachedExit),
                    };
                }
                Some((kind, by)) if kind.is_obstacle() => {
                    world.messages.push(format!("Path blocked by: {by}"));
                    return MoveOutcome {
                        steps,
                        stop: Some(MoveStop::Blocked { by }),
                    };
                }
                _ => {}
            }

            if !world.is_floor(destination) {
                world.messages.push("Collided with boundary.");
                return MoveOutcome {
                    steps,
                    stop: Some(MoveStop::Wall),
                };
            }

            world.player.position = destination;
            steps += 1;
        }

        MoveOutcome { steps, stop: None }
    }
}
