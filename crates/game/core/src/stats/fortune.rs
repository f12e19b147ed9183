//! Fortune - saving-throw difficulty.
//!
//! Lower is better: a fortune of 0 means the adventurer resists every time.
//!
//! ```text
//! fortune = 19
//!         - clamp(level, 1, 255) / 5
//!         - luck / 6
//!         - class_bonus[category]
//!         - race_bonus[category]
//! floored at 0
//! ```

use strum::{Display, EnumCount, EnumIter, IntoStaticStr};

use crate::env::TablesOracle;
use crate::error::RulesError;
use crate::state::{Class, Classified, Race};

const BASE_FORTUNE: i32 = 19;

/// The five saving-throw categories, numbered 1-5.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr, EnumCount,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FortuneCategory {
    Death = 1,
    Paralysis = 2,
    Petrification = 3,
    Breath = 4,
    Spell = 5,
}

impl FortuneCategory {
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Column index into fortune bonus tables.
    pub const fn index(self) -> usize {
        self as usize - 1
    }
}

impl TryFrom<u8> for FortuneCategory {
    type Error = RulesError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Self::Death),
            2 => Ok(Self::Paralysis),
            3 => Ok(Self::Petrification),
            4 => Ok(Self::Breath),
            5 => Ok(Self::Spell),
            _ => Err(RulesError::InvalidFortuneCategory(number)),
        }
    }
}

/// Per-category bonuses for one class or race row.
pub type FortuneBonuses = [i32; FortuneCategory::COUNT];

/// Saving-throw difficulty for one category.
///
/// # Errors
///
/// Returns `RulesError::InvalidRace` or `RulesError::InvalidClass` when the
/// adventurer's classification did not validate.
pub fn fortune(
    level: i32,
    luck: i32,
    race: Classified<Race>,
    class: Classified<Class>,
    category: FortuneCategory,
    tables: &(impl TablesOracle + ?Sized),
) -> Result<i32, RulesError> {
    let race = race.require(RulesError::InvalidRace)?;
    let class = class.require(RulesError::InvalidClass)?;

    let column = category.index();
    let value = BASE_FORTUNE
        - level.clamp(1, 255) / 5
        - luck.div_euclid(6)
        - tables.class_fortune(class)[column]
        - tables.race_fortune(race)[column];

    Ok(value.max(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::RulesTables;
    use strum::IntoEnumIterator;

    #[test]
    fn categories_number_one_to_five() {
        let numbers: Vec<u8> = FortuneCategory::iter().map(FortuneCategory::number).collect();
        assert_eq!(numbers, [1, 2, 3, 4, 5]);
        assert_eq!(FortuneCategory::try_from(4), Ok(FortuneCategory::Breath));
        assert_eq!(
            FortuneCategory::try_from(0),
            Err(RulesError::InvalidFortuneCategory(0))
        );
        assert_eq!(
            FortuneCategory::try_from(6),
            Err(RulesError::InvalidFortuneCategory(6))
        );
    }

    #[test]
    fn human_fighter_death_save() {
        let tables = RulesTables::default();
        // 19 - 1/5 - 9/6 - 3 (fighter) - 1 (human) = 19 - 0 - 1 - 3 - 1
        let value = fortune(
            1,
            9,
            Race::Human.into(),
            Class::Fighter.into(),
            FortuneCategory::Death,
            &tables,
        );
        assert_eq!(value, Ok(14));
    }

    #[test]
    fn level_is_clamped_to_255() {
        let tables = RulesTables::default();
        let at = |level| {
            fortune(
                level,
                0,
                Race::Elf.into(),
                Class::Mage.into(),
                FortuneCategory::Breath,
                &tables,
            )
        };
        assert_eq!(at(0), at(1));
        assert_eq!(at(-40), at(1));
        assert_eq!(at(255), Ok(0));
        assert_eq!(at(10), Ok(17));
    }

    #[test]
    fn ninja_dwarf_floors_at_zero() {
        let tables = RulesTables::default();
        let value = fortune(
            60,
            18,
            Race::Dwarf.into(),
            Class::Ninja.into(),
            FortuneCategory::Breath,
            &tables,
        );
        // 19 - 12 - 3 - 3 - 4 = -3, floored
        assert_eq!(value, Ok(0));
    }

    #[test]
    fn invalid_classification_is_an_error() {
        let tables = RulesTables::default();
        let race_missing = fortune(
            1,
            9,
            Classified::Invalid,
            Class::Fighter.into(),
            FortuneCategory::Spell,
            &tables,
        );
        assert_eq!(race_missing, Err(RulesError::InvalidRace));
        let class_missing = fortune(
            1,
            9,
            Race::Human.into(),
            Classified::Invalid,
            FortuneCategory::Spell,
            &tables,
        );
        assert_eq!(class_missing, Err(RulesError::InvalidClass));
    }
}
