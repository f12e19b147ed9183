//! Hitting power and hit chance calculations.

use crate::state::Class;

/// Strength modifier applied to hitting power and damage.
///
/// # Formula
///
/// ```text
/// str ≥ 16      → str - 15
/// 6 ≤ str < 16  → 0
/// str < 6       → str - 6
/// ```
pub const fn strength_bonus(strength: i32) -> i32 {
    if strength >= 16 {
        strength - 15
    } else if strength >= 6 {
        0
    } else {
        strength - 6
    }
}

/// Level contribution to hitting power.
///
/// Fighting classes gain `level / 3 + 2`; casters and thieves `level / 5`.
/// Division floors, so levels below 0 round toward negative infinity.
pub const fn level_bonus(level: i32, class: Class) -> i32 {
    match class {
        Class::Fighter | Class::Priest | Class::Samurai | Class::Lord | Class::Ninja => {
            level.div_euclid(3) + 2
        }
        Class::Mage | Class::Thief | Class::Bishop => level.div_euclid(5),
    }
}

/// Combined bonus from level, strength and equipment, saturating at the
/// `i32` bounds.
pub const fn hitting_power(level: i32, class: Class, strength: i32, equipped_strength: i32) -> i32 {
    level_bonus(level, class)
        .saturating_add(strength_bonus(strength))
        .saturating_add(equipped_strength)
}

/// Chance of one swing landing, in steps of 5% from 0% to 95%.
///
/// Stored as whole twentieths so comparisons stay exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitRate(u8);

impl HitRate {
    pub const NEVER: Self = Self(0);
    pub const MAX: Self = Self(19);

    /// Hit rate for a clamped judge value in `[0, 19]`.
    const fn from_judge(judge: i32) -> Self {
        Self((19 - judge) as u8)
    }

    pub const fn twentieths(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 20.0
    }

    /// Whether a uniform draw in `[0, 1)` counts as a hit.
    pub fn is_hit(self, draw: f64) -> bool {
        draw < self.as_f64()
    }
}

/// Calculate the hit rate of one swing against an enemy group.
///
/// # Formula
///
/// ```text
/// judge = clamp(19 + enemy_group_count - enemy_ac - hitting_power, 0, 19)
/// rate  = (19 - judge) / 20
/// ```
///
/// Rises with hitting power and with lower enemy armor class.
pub const fn hit_rate(
    level: i32,
    class: Class,
    strength: i32,
    equipped_strength: i32,
    enemy_group_count: i32,
    enemy_ac: i32,
) -> HitRate {
    hit_rate_for_power(
        hitting_power(level, class, strength, equipped_strength),
        enemy_group_count,
        enemy_ac,
    )
}

/// [`hit_rate`] for an already computed hitting power.
pub const fn hit_rate_for_power(hitting_power: i32, enemy_group_count: i32, enemy_ac: i32) -> HitRate {
    let judge = 19i32
        .saturating_add(enemy_group_count)
        .saturating_sub(enemy_ac)
        .saturating_sub(hitting_power);
    let judge = if judge < 0 {
        0
    } else if judge > 19 {
        19
    } else {
        judge
    };
    HitRate::from_judge(judge)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_bonus_branches() {
        assert_eq!(strength_bonus(18), 3);
        assert_eq!(strength_bonus(16), 1);
        assert_eq!(strength_bonus(15), 0);
        assert_eq!(strength_bonus(6), 0);
        assert_eq!(strength_bonus(5), -1);
        assert_eq!(strength_bonus(0), -6);
    }

    #[test]
    fn level_bonus_by_class_group() {
        assert_eq!(level_bonus(1, Class::Fighter), 2);
        assert_eq!(level_bonus(9, Class::Ninja), 5);
        assert_eq!(level_bonus(4, Class::Mage), 0);
        assert_eq!(level_bonus(10, Class::Bishop), 2);
        assert_eq!(level_bonus(0, Class::Thief), 0);
    }

    #[test]
    fn level_bonus_floors_below_zero() {
        assert_eq!(level_bonus(-1, Class::Fighter), 1);
        assert_eq!(level_bonus(-3, Class::Lord), 1);
        assert_eq!(level_bonus(-1, Class::Mage), -1);
        assert_eq!(level_bonus(-5, Class::Bishop), -1);
    }

    #[test]
    fn extreme_equipment_saturates() {
        assert_eq!(hitting_power(1, Class::Fighter, 18, i32::MAX), i32::MAX);
        assert_eq!(hitting_power(1, Class::Fighter, 0, i32::MIN), i32::MIN);
        assert_eq!(hit_rate(1, Class::Fighter, 18, i32::MAX, 7, 10), HitRate::MAX);
        assert_eq!(hit_rate(1, Class::Fighter, 0, i32::MIN, 7, 10), HitRate::NEVER);
    }

    #[test]
    fn human_fighter_hitting_power() {
        // Level 1, strength 18: level bonus 2 + strength bonus 3
        assert_eq!(hitting_power(1, Class::Fighter, 18, 0), 5);
        assert_eq!(hitting_power(1, Class::Fighter, 18, 6), 11);
    }

    #[test]
    fn hit_rate_defaults() {
        // judge = 19 + 7 - 10 - 5 = 11 → (19 - 11) / 20
        let rate = hit_rate(1, Class::Fighter, 18, 0, 7, 10);
        assert_eq!(rate.twentieths(), 8);
        assert!((rate.as_f64() - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn hit_rate_clamps_both_ends() {
        assert_eq!(hit_rate_for_power(-100, 7, 10), HitRate::NEVER);
        assert_eq!(hit_rate_for_power(100, 7, -10), HitRate::MAX);
        assert_eq!(hit_rate_for_power(i32::MIN, i32::MAX, i32::MIN), HitRate::NEVER);
        assert!((HitRate::MAX.as_f64() - 0.95).abs() < f64::EPSILON);
    }

    #[test]
    fn hit_checks_are_strict() {
        let rate = hit_rate_for_power(5, 7, 10);
        assert!(rate.is_hit(0.0));
        assert!(rate.is_hit(0.399));
        assert!(!rate.is_hit(0.4));
        assert!(!HitRate::NEVER.is_hit(0.0));
    }
}
