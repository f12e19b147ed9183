use crate::env::RollRange;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Highest level a level-up cascade may reach.
    pub max_level: i32,
    /// Enemy group size assumed when a hit rate is asked for without one.
    pub default_enemy_group_count: i32,
    /// Enemy armor class assumed when a hit rate is asked for without one.
    pub default_enemy_ac: i32,
    /// Armor class of an unarmored adventurer.
    pub base_ac: i32,
    pub starting_age: RollRange,
    pub starting_gold: RollRange,
}

impl GameConfig {
    // ===== compile-time constants =====
    pub const MIN_LEVEL: i32 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_LEVEL: i32 = 500;
    pub const DEFAULT_ENEMY_GROUP_COUNT: i32 = 7;
    pub const DEFAULT_ENEMY_AC: i32 = 10;
    pub const DEFAULT_BASE_AC: i32 = 10;
    pub const DEFAULT_STARTING_AGE: RollRange = RollRange::new(14, 16);
    pub const DEFAULT_STARTING_GOLD: RollRange = RollRange::new(100, 199);

    pub fn new() -> Self {
        Self {
            max_level: Self::DEFAULT_MAX_LEVEL,
            default_enemy_group_count: Self::DEFAULT_ENEMY_GROUP_COUNT,
            default_enemy_ac: Self::DEFAULT_ENEMY_AC,
            base_ac: Self::DEFAULT_BASE_AC,
            starting_age: Self::DEFAULT_STARTING_AGE,
            starting_gold: Self::DEFAULT_STARTING_GOLD,
        }
    }

    pub fn with_max_level(max_level: i32) -> Self {
        Self {
            max_level,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
