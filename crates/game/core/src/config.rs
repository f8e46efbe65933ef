/// Gameplay tunables and compile-time limits.
///
/// Defaults reproduce the canonical rules; content packs may override the
/// runtime-tunable fields through a TOML file.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Maximum number of entries retained in the message log.
    pub message_capacity: usize,
    pub player_hp: i32,
    pub enemy_hp: i32,
    pub boss_hp: i32,
    /// Damage dealt to a boss by a well-formed substitution command.
    pub regex_damage: i32,
    /// Damage dealt by the delete operator without aura.
    pub melee_damage: i32,
    /// Damage dealt by the delete operator while the aura is active.
    pub aura_damage: i32,
    /// Columns covered by a single `w`/`b` step.
    pub word_jump: i32,
}

impl GameConfig {
    // ===== compile-time limits =====
    pub const MAX_MAP_WIDTH: usize = 256;
    pub const MAX_MAP_HEIGHT: usize = 256;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MESSAGE_CAPACITY: usize = 10;
    pub const DEFAULT_PLAYER_HP: i32 = 20;
    pub const DEFAULT_ENEMY_HP: i32 = 5;
    pub const DEFAULT_BOSS_HP: i32 = 10;
    pub const DEFAULT_REGEX_DAMAGE: i32 = 5;
    pub const DEFAULT_MELEE_DAMAGE: i32 = 2;
    pub const DEFAULT_AURA_DAMAGE: i32 = 5;
    pub const DEFAULT_WORD_JUMP: i32 = 3;

    pub fn new() -> Self {
        Self {
            message_capacity: Self::DEFAULT_MESSAGE_CAPACITY,
            player_hp: Self::DEFAULT_PLAYER_HP,
            enemy_hp: Self::DEFAULT_ENEMY_HP,
            boss_hp: Self::DEFAULT_BOSS_HP,
            regex_damage: Self::DEFAULT_REGEX_DAMAGE,
            melee_damage: Self::DEFAULT_MELEE_DAMAGE,
            aura_damage: Self::DEFAULT_AURA_DAMAGE,
            word_jump: Self::DEFAULT_WORD_JUMP,
        }
    }

    pub fn with_message_capacity(message_capacity: usize) -> Self {
        Self {
            message_capacity: message_capacity.max(1),
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
