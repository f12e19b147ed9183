//! Closed enumerations that classify an adventurer.
//!
//! Declaration order is significant: it is the row order of every static
//! table in [`RulesTables`](crate::env::RulesTables).

use core::str::FromStr;

use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::error::RulesError;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Sex {
    Male,
    Female,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Alignment {
    Good,
    Neutral,
    Evil,
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    EnumCount,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Race {
    Human,
    Elf,
    Dwarf,
    Gnome,
    Halfling,
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    EnumCount,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Class {
    Fighter,
    Mage,
    Priest,
    Thief,
    Bishop,
    Samurai,
    Lord,
    Ninja,
}

/// Condition of an adventurer, stored as an ordinal 0-7.
///
/// The rules engine only records and reports the status. Transitions and any
/// gating of actions (a dead adventurer attacking, say) belong to the
/// embedding game.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    EnumCount,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Status {
    #[default]
    Normal,
    Sleep,
    Panic,
    Paralysis,
    Petrification,
    Death,
    Ash,
    Disappearance,
}

impl Status {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        Some(match ordinal {
            0 => Self::Normal,
            1 => Self::Sleep,
            2 => Self::Panic,
            3 => Self::Paralysis,
            4 => Self::Petrification,
            5 => Self::Death,
            6 => Self::Ash,
            7 => Self::Disappearance,
            _ => return None,
        })
    }

    /// Human-readable name for status displays.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl TryFrom<u8> for Status {
    type Error = RulesError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal).ok_or(RulesError::InvalidStatus(ordinal))
    }
}

/// A classification value that either validated or was marked invalid.
///
/// Adventurers accept unvalidated input at creation. Anything that does not
/// name a known variant is kept as [`Classified::Invalid`] instead of failing
/// construction; computations that need the value then return a
/// [`RulesError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Classified<T> {
    Valid(T),
    Invalid,
}

impl<T: Copy> Classified<T> {
    pub const fn get(&self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(*value),
            Self::Invalid => None,
        }
    }

    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns the value, or `error` when it was marked invalid.
    pub fn require(&self, error: RulesError) -> Result<T, RulesError> {
        self.get().ok_or(error)
    }
}

impl<T: FromStr> Classified<T> {
    /// Parses a name, falling back to [`Classified::Invalid`] on failure.
    pub fn parse(name: &str) -> Self {
        name.trim()
            .parse::<T>()
            .map_or(Self::Invalid, Self::Valid)
    }
}

impl<T> From<T> for Classified<T> {
    fn from(value: T) -> Self {
        Self::Valid(value)
    }
}

impl<T> From<Option<T>> for Classified<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Invalid, Self::Valid)
    }
}
