//! Ability scores - the six attributes that define an adventurer.
//!
//! An [`Ability`] is an immutable value. Growth never mutates it in place:
//! [`increase`] returns a fresh record with one field replaced and clamped to
//! `[0, maximum]`, where the maximum depends on race and sex:
//!
//! ```text
//! maximum = race_base + 10 (+1 strength if male, +1 vitality if female)
//! ```

use core::str::FromStr;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::env::TablesOracle;
use crate::error::RulesError;
use crate::state::{Classified, Race, Sex};

/// Headroom every race has above its base score.
pub const ABILITY_HEADROOM: i32 = 10;

/// Enum naming the six ability fields.
///
/// Parses from the exact field names (`"strength"` … `"luck"`).
/// Any other spelling, including a different case, does not parse.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AttributeKind {
    Strength,
    Intelligence,
    Piety,
    Vitality,
    Agility,
    Luck,
}

/// The six ability scores of an adventurer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    pub strength: i32,
    pub intelligence: i32,
    pub piety: i32,
    pub vitality: i32,
    pub agility: i32,
    pub luck: i32,
}

impl Ability {
    pub const fn new(
        strength: i32,
        intelligence: i32,
        piety: i32,
        vitality: i32,
        agility: i32,
        luck: i32,
    ) -> Self {
        Self {
            strength,
            intelligence,
            piety,
            vitality,
            agility,
            luck,
        }
    }

    pub const fn get(&self, attribute: AttributeKind) -> i32 {
        match attribute {
            AttributeKind::Strength => self.strength,
            AttributeKind::Intelligence => self.intelligence,
            AttributeKind::Piety => self.piety,
            AttributeKind::Vitality => self.vitality,
            AttributeKind::Agility => self.agility,
            AttributeKind::Luck => self.luck,
        }
    }

    /// Returns a copy with exactly one field replaced.
    #[must_use]
    pub const fn with(mut self, attribute: AttributeKind, value: i32) -> Self {
        match attribute {
            AttributeKind::Strength => self.strength = value,
            AttributeKind::Intelligence => self.intelligence = value,
            AttributeKind::Piety => self.piety = value,
            AttributeKind::Vitality => self.vitality = value,
            AttributeKind::Agility => self.agility = value,
            AttributeKind::Luck => self.luck = value,
        }
        self
    }
}

/// Attribute that receives the +1 sex bonus, if any.
pub const fn sex_bonus_attribute(sex: Classified<Sex>) -> Option<AttributeKind> {
    match sex {
        Classified::Valid(Sex::Male) => Some(AttributeKind::Strength),
        Classified::Valid(Sex::Female) => Some(AttributeKind::Vitality),
        Classified::Invalid => None,
    }
}

/// Starting ability scores for a race, before the sex bonus.
///
/// # Errors
///
/// Returns `RulesError::InvalidRace` if the race did not validate.
pub fn initial(
    race: Classified<Race>,
    tables: &(impl TablesOracle + ?Sized),
) -> Result<Ability, RulesError> {
    let race = race.require(RulesError::InvalidRace)?;
    Ok(tables.base_ability(race))
}

/// Upper bound for one attribute: race base + 10, plus the sex bonus.
pub fn maximum(
    race: Race,
    sex: Classified<Sex>,
    attribute: AttributeKind,
    tables: &(impl TablesOracle + ?Sized),
) -> i32 {
    let bonus = i32::from(sex_bonus_attribute(sex) == Some(attribute));
    tables.base_ability(race).get(attribute) + ABILITY_HEADROOM + bonus
}

/// Adds `delta` to one attribute, clamped into `[0, maximum]`.
pub fn increase(
    current: Ability,
    race: Race,
    sex: Classified<Sex>,
    attribute: AttributeKind,
    delta: i32,
    tables: &(impl TablesOracle + ?Sized),
) -> Ability {
    let max = maximum(race, sex, attribute, tables);
    let value = current.get(attribute).saturating_add(delta).clamp(0, max.max(0));
    current.with(attribute, value)
}

/// [`increase`] addressed by field name.
///
/// Unknown names leave the ability unchanged; callers passing free-form
/// input (scripted events, items) are not required to validate first.
pub fn increase_named(
    current: Ability,
    race: Race,
    sex: Classified<Sex>,
    attribute: &str,
    delta: i32,
    tables: &(impl TablesOracle + ?Sized),
) -> Ability {
    match AttributeKind::from_str(attribute) {
        Ok(attribute) => increase(current, race, sex, attribute, delta, tables),
        Err(_) => {
            tracing::trace!(
                target: "adventurer_core::stats",
                attribute,
                "ignoring unknown attribute"
            );
            current
        }
    }
}

/// Applies +1 strength for males, +1 vitality for females.
pub fn apply_sex_bonus(
    ability: Ability,
    race: Race,
    sex: Classified<Sex>,
    tables: &(impl TablesOracle + ?Sized),
) -> Ability {
    match sex_bonus_attribute(sex) {
        Some(attribute) => increase(ability, race, sex, attribute, 1, tables),
        None => ability,
    }
}
