//! Experience curve and level-up checks.
//!
//! The curve is piecewise. Levels 2-13 follow a fitted exponential per class;
//! past level 13 every further level costs a fixed per-class "master"
//! increment:
//!
//! ```text
//! required(1)      = 0
//! required(L ≤ 13) = round(exp(slope × L + intercept)) + 1
//! required(L > 13) = required(13) + master × (L - 13)
//! ```
//!
//! Experience is cumulative and never consumed by leveling.

use crate::env::TablesOracle;
use crate::error::RulesError;
use crate::state::Class;

/// Last level covered by the fitted exponential.
pub const CURVE_LAST_LEVEL: i32 = 13;

fn fitted(level: i32, class: Class, tables: &(impl TablesOracle + ?Sized)) -> u64 {
    let coefficients = tables.curve(class);
    let value = (coefficients.slope * f64::from(level) + coefficients.intercept).exp();
    (value.round() as u64).saturating_add(1)
}

/// Cumulative experience needed to reach `target_level`.
///
/// # Errors
///
/// Returns `RulesError::InvalidLevel` for levels below 1.
pub fn required_experience(
    target_level: i32,
    class: Class,
    tables: &(impl TablesOracle + ?Sized),
) -> Result<u64, RulesError> {
    match target_level {
        ..=0 => Err(RulesError::InvalidLevel(target_level)),
        1 => Ok(0),
        2..=CURVE_LAST_LEVEL => Ok(fitted(target_level, class, tables)),
        _ => {
            let extra_levels = (target_level - CURVE_LAST_LEVEL) as u64;
            let grind = tables.master_increment(class).saturating_mul(extra_levels);
            Ok(fitted(CURVE_LAST_LEVEL, class, tables).saturating_add(grind))
        }
    }
}

/// True when `experience` is enough for the level after `level`.
pub fn is_level_up(
    experience: u64,
    level: i32,
    class: Class,
    tables: &(impl TablesOracle + ?Sized),
) -> Result<bool, RulesError> {
    Ok(experience >= required_experience(level.saturating_add(1), class, tables)?)
}

/// Experience still missing for the next level, 0 if already earned.
pub fn experience_to_next_level(
    experience: u64,
    level: i32,
    class: Class,
    tables: &(impl TablesOracle + ?Sized),
) -> Result<u64, RulesError> {
    Ok(required_experience(level.saturating_add(1), class, tables)?.saturating_sub(experience))
}

/// Resolves a level-up cascade.
///
/// Re-checks the threshold after every level gained, so one large experience
/// award can raise several levels at once. Stops at `max_level`.
///
/// Returns the new level.
pub fn cascade_level(
    experience: u64,
    level: i32,
    class: Class,
    max_level: i32,
    tables: &(impl TablesOracle + ?Sized),
) -> Result<i32, RulesError> {
    let mut level = level;
    while level < max_level && is_level_up(experience, level, class, tables)? {
        level += 1;
    }
    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::RulesTables;
    use strum::IntoEnumIterator;

    #[test]
    fn level_one_is_free_and_zero_is_invalid() {
        let tables = RulesTables::default();
        for class in Class::iter() {
            assert_eq!(required_experience(1, class, &tables), Ok(0));
        }
        assert_eq!(
            required_experience(0, Class::Mage, &tables),
            Err(RulesError::InvalidLevel(0))
        );
        assert_eq!(
            required_experience(-5, Class::Mage, &tables),
            Err(RulesError::InvalidLevel(-5))
        );
    }

    #[test]
    fn fitted_range_matches_reference_values() {
        let tables = RulesTables::default();
        // round(exp(0.5447447747283312 * 2 + 5.817734123206997)) + 1
        assert_eq!(required_experience(2, Class::Fighter, &tables), Ok(1000));
        assert_eq!(required_experience(3, Class::Fighter, &tables), Ok(1724));
        assert_eq!(required_experience(13, Class::Fighter, &tables), Ok(400_080));
        assert_eq!(required_experience(2, Class::Mage, &tables), Ok(1100));
        assert_eq!(required_experience(2, Class::Thief, &tables), Ok(900));
        assert_eq!(required_experience(2, Class::Ninja, &tables), Ok(1450));
        assert_eq!(required_experience(13, Class::Ninja, &tables), Ok(702_241));
    }

    #[test]
    fn linear_past_level_thirteen() {
        let tables = RulesTables::default();
        for class in Class::iter() {
            let l13 = required_experience(13, class, &tables).unwrap();
            let l14 = required_experience(14, class, &tables).unwrap();
            let l20 = required_experience(20, class, &tables).unwrap();
            let master = tables.master_increment(class);
            assert_eq!(l14, l13 + master);
            assert_eq!(l20, l13 + 7 * master);
        }
        assert_eq!(required_experience(14, Class::Fighter, &tables), Ok(689_789));
    }

    #[test]
    fn strictly_increasing_per_class() {
        let tables = RulesTables::default();
        for class in Class::iter() {
            let mut previous = required_experience(1, class, &tables).unwrap();
            for level in 2..=60 {
                let next = required_experience(level, class, &tables).unwrap();
                assert!(next > previous, "{class} level {level}");
                previous = next;
            }
        }
    }

    #[test]
    fn level_up_threshold_is_inclusive() {
        let tables = RulesTables::default();
        assert_eq!(is_level_up(999, 1, Class::Fighter, &tables), Ok(false));
        assert_eq!(is_level_up(1000, 1, Class::Fighter, &tables), Ok(true));
        assert_eq!(experience_to_next_level(400, 1, Class::Fighter, &tables), Ok(600));
        assert_eq!(experience_to_next_level(5000, 1, Class::Fighter, &tables), Ok(0));
    }

    #[test]
    fn cascade_climbs_several_levels() {
        let tables = RulesTables::default();
        // Fighter thresholds: 1000, 1724, 2972, 5124, 8834, 15230
        assert_eq!(cascade_level(10_000, 1, Class::Fighter, 500, &tables), Ok(6));
        assert_eq!(cascade_level(999, 1, Class::Fighter, 500, &tables), Ok(1));
        assert_eq!(cascade_level(10_000, 1, Class::Fighter, 3, &tables), Ok(3));
        assert_eq!(cascade_level(u64::MAX, 1, Class::Ninja, 500, &tables), Ok(500));
    }
}
