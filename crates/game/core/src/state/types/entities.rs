use super::Position;

/// Closed set of entity kinds, each carrying only the data it needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    Player,
    Enemy,
    Boss,
    /// Impassable debris; no modeled action removes it.
    Rubble,
    Exit,
    /// Collectible key; `letter` is what a yank stores in a register.
    Key { letter: char },
    /// Barrier opened by putting a register holding `letter`.
    Lock { letter: char },
}

impl EntityKind {
    /// Returns true if the kind stops movement into its cell.
    pub const fn is_obstacle(self) -> bool {
        matches!(self, Self::Enemy | Self::Boss | Self::Rubble | Self::Lock { .. })
    }

    /// Returns true if the kind can be struck by melee or regex attacks.
    pub const fn is_hostile(self) -> bool {
        matches!(self, Self::Enemy | Self::Boss)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Enemy => "enemy",
            Self::Boss => "boss",
            Self::Rubble => "rubble",
            Self::Exit => "exit",
            Self::Key { .. } => "key",
            Self::Lock { .. } => "lock",
        }
    }
}

/// Anything placed on the grid: the player, hostiles and interactables.
///
/// Entities float over floor cells; the walkability grid underneath an
/// entity is always floor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub name: String,
    pub symbol: char,
    pub position: Position,
    pub hp: i32,
    pub max_hp: i32,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(
        name: impl Into<String>,
        symbol: char,
        position: Position,
        hp: i32,
        kind: EntityKind,
    ) -> Self {
        Self {
            name: name.into(),
            symbol,
            position,
            hp,
            max_hp: hp,
            kind,
        }
    }

    pub fn player(position: Position, hp: i32) -> Self {
        Self::new("Player", '@', position, hp, EntityKind::Player)
    }

    pub fn enemy(position: Position, hp: i32) -> Self {
        Self::new("Minion", 'G', position, hp, EntityKind::Enemy)
    }

    pub fn boss(position: Position, hp: i32) -> Self {
        Self::new("Corrupted Binary", 'B', position, hp, EntityKind::Boss)
    }

    pub fn rubble(position: Position) -> Self {
        Self::new("Rubble", 'R', position, 1, EntityKind::Rubble)
    }

    pub fn exit(position: Position) -> Self {
        Self::new("Exit", '>', position, 1, EntityKind::Exit)
    }

    pub fn key(position: Position, letter: char) -> Self {
        Self::new(
            format!("Key {letter}"),
            letter,
            position,
            1,
            EntityKind::Key { letter },
        )
    }

    /// Locks are drawn with the uppercase glyph and opened by the lowercase letter.
    pub fn lock(position: Position, glyph: char) -> Self {
        let letter = glyph.to_lowercase().next().unwrap_or(glyph);
        Self::new(
            format!("Lock {glyph}"),
            glyph,
            position,
            1,
            EntityKind::Lock { letter },
        )
    }

    /// Quick check if the entity still has hit points left.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Applies damage and reports whether the entity dropped to zero or below.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.hp -= amount;
        !self.is_alive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_metadata_is_lowercase_of_glyph() {
        let lock = Entity::lock(Position::new(1, 0), 'A');
        assert_eq!(lock.symbol, 'A');
        assert_eq!(lock.kind, EntityKind::Lock { letter: 'a' });
        assert!(lock.kind.is_obstacle());

        let accented = Entity::lock(Position::ORIGIN, 'Ñ');
        assert_eq!(accented.kind, EntityKind::Lock { letter: 'ñ' });
    }

    #[test]
    fn damage_reports_death() {
        let mut boss = Entity::boss(Position::ORIGIN, 10);
        assert!(!boss.take_damage(5));
        assert!(boss.take_damage(5));
        assert_eq!(boss.max_hp, 10);
    }
}
