use std::sync::LazyLock;

use regex_lite::Regex;

use crate::action::ActionTransition;
use crate::config::GameConfig;
use crate::state::{EntityKind, WorldState};

// Exactly three slashes, two nonempty fields, trailing `g`.
static SUBSTITUTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^s/([^/]+)/([^/]+)/g$").expect("valid regex"));

/// Parsed `s/<target>/<replacement>/g` command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Substitution {
    pub target: String,
    /// Checked for syntax only; it never influences the attack.
    pub replacement: String,
}

impl Substitution {
    pub fn parse(command: &str) -> Option<Self> {
        let captures = SUBSTITUTION_RE.captures(command)?;
        Some(Self {
            target: captures.get(1)?.as_str().to_string(),
            replacement: captures.get(2)?.as_str().to_string(),
        })
    }
}

/// Command-line substitution aimed at the first boss on the level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegexAttackAction {
    pub command: String,
}

impl RegexAttackAction {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegexOutcome {
    InvalidSyntax,
    NoTarget,
    Damaged { remaining_hp: i32 },
    Purged,
}

impl ActionTransition for RegexAttackAction {
    type Outcome = RegexOutcome;

    fn apply(&self, world: &mut WorldState, config: &GameConfig) -> RegexOutcome {
        let Some(substitution) = Substitution::parse(&self.command) else {
            world
                .messages
                .push("Invalid syntax. Use s/target/replace/g to initiate regex attack.");
            return RegexOutcome::InvalidSyntax;
        };

        let Some(index) = world
            .enemies
            .iter()
            .position(|enemy| enemy.kind == EntityKind::Boss)
        else {
            world
                .messages
                .push("No eligible targets for regex attack in range.");
            return RegexOutcome::NoTarget;
        };

        world.messages.push(format!(
            "SYSTEM PURGE: Targeted {} corruption...",
            substitution.target
        ));

        let boss = &mut world.enemies[index];
        if boss.take_damage(config.regex_damage) {
            let boss = world.enemies.remove(index);
            world
                .messages
                .push(format!("THREAT NEUTRALIZED: {} purged.", boss.name));
            RegexOutcome::Purged
        } else {
            RegexOutcome::Damaged {
                remaining_hp: boss.hp,
            }
        }
    }
}
