use crate::action::ActionTransition;
use crate::config::GameConfig;
use crate::state::WorldState;

/// Which delete-operator form produced the strike.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeleteScope {
    /// `dd`
    Line,
    /// `dw`
    Word,
    /// `d` followed by any other motion.
    Char,
}

impl DeleteScope {
    pub const fn as_snake_case(self) -> &'static str {
        match self {
            Self::Line => "delete_line",
            Self::Word => "delete_word",
            Self::Char => "delete_char",
        }
    }
}

/// Melee strike against the first hostile in the player's 8-neighbourhood.
///
/// Repeats `count` times while a target remains in range. Rubble is not a
/// valid target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeleteAction {
    pub scope: DeleteScope,
    pub count: u32,
}

impl DeleteAction {
    pub fn new(scope: DeleteScope, count: u32) -> Self {
        Self { scope, count }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DeleteOutcome {
    pub strikes: u32,
    pub erased: u32,
}

impl ActionTransition for DeleteAction {
    type Outcome = DeleteOutcome;

    fn apply(&self, world: &mut WorldState, config: &GameConfig) -> DeleteOutcome {
        let damage = if world.aura_active {
            config.aura_damage
        } else {
            config.melee_damage
        };

        let mut outcome = DeleteOutcome::default();
        for _ in 0..self.count.max(1) {
            let origin = world.player.position;
            let Some(index) = world
                .enemies
                .iter()
                .position(|enemy| enemy.kind.is_hostile() && origin.is_adjacent(enemy.position))
            else {
                break;
            };

            outcome.strikes += 1;
            let target = &mut world.enemies[index];
            let erased = target.take_damage(damage);
            let name = target.name.clone();
            world
                .messages
                .push(format!("LINK DAMAGE: {name} suffered {damage} damage."));
            if erased {
                world.enemies.remove(index);
                world.messages.push(format!("ERASED: {name}"));
                outcome.erased += 1;
            }
        }

        if outcome.strikes == 0 {
            world.messages.push("Nothing to delete here.");
        }
        outcome
    }
}
