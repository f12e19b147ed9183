use crate::env::RollRange;
use crate::state::{Class, Race};
use crate::stats::{Ability, FortuneBonuses};

/// Oracle providing game rules and balance tables.
///
/// This oracle defines the static data the rules read: race base abilities,
/// class hit point ranges, saving-throw bonuses and the experience curve. It
/// does NOT hold adventurer data. [`RulesTables`] is the stock implementation;
/// embedding games may supply their own for balance tuning.
pub trait TablesOracle: Send + Sync {
    fn base_ability(&self, race: Race) -> Ability;
    fn hp_range(&self, class: Class) -> RollRange;
    fn class_fortune(&self, class: Class) -> FortuneBonuses;
    fn race_fortune(&self, race: Race) -> FortuneBonuses;
    fn curve(&self, class: Class) -> CurveCoefficients;
    fn master_increment(&self, class: Class) -> u64;
}

/// Per-race lookup table, one named row per race.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaceTable<T> {
    pub human: T,
    pub elf: T,
    pub dwarf: T,
    pub gnome: T,
    pub halfling: T,
}

impl<T: Copy> RaceTable<T> {
    pub const fn get(&self, race: Race) -> T {
        match race {
            Race::Human => self.human,
            Race::Elf => self.elf,
            Race::Dwarf => self.dwarf,
            Race::Gnome => self.gnome,
            Race::Halfling => self.halfling,
        }
    }
}

/// Per-class lookup table, one named row per class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassTable<T> {
    pub fighter: T,
    pub mage: T,
    pub priest: T,
    pub thief: T,
    pub bishop: T,
    pub samurai: T,
    pub lord: T,
    pub ninja: T,
}

impl<T: Copy> ClassTable<T> {
    pub const fn get(&self, class: Class) -> T {
        match class {
            Class::Fighter => self.fighter,
            Class::Mage => self.mage,
            Class::Priest => self.priest,
            Class::Thief => self.thief,
            Class::Bishop => self.bishop,
            Class::Samurai => self.samurai,
            Class::Lord => self.lord,
            Class::Ninja => self.ninja,
        }
    }
}

/// Fitted `exp(slope × level + intercept)` coefficients of one class's
/// experience curve.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveCoefficients {
    pub slope: f64,
    pub intercept: f64,
}

impl CurveCoefficients {
    pub const fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }
}

/// Experience curve tables.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExperienceTables {
    pub coefficients: ClassTable<CurveCoefficients>,
    /// Experience per level past the fitted range.
    pub master_increments: ClassTable<u64>,
}

impl ExperienceTables {
    pub const STANDARD: Self = Self {
        coefficients: ClassTable {
            fighter: CurveCoefficients::new(0.5447447747283312, 5.817734123206997),
            mage: CurveCoefficients::new(0.5447457590750674, 5.912557376890108),
            priest: CurveCoefficients::new(0.5447461113352284, 5.866302632956038),
            thief: CurveCoefficients::new(0.5447457844727372, 5.711980964858709),
            bishop: CurveCoefficients::new(0.5621341620328307, 5.965181579854299),
            samurai: CurveCoefficients::new(0.5621341620328307, 5.965181579854299),
            lord: CurveCoefficients::new(0.5621317663057328, 6.045232902446928),
            ninja: CurveCoefficients::new(0.5621314991474423, 6.15432123265716),
        },
        master_increments: ClassTable {
            fighter: 289709,
            mage: 318529,
            priest: 304132,
            thief: 260639,
            bishop: 428479,
            samurai: 428479,
            lord: 475008,
            ninja: 529756,
        },
    };
}

impl Default for ExperienceTables {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Complete set of static rule tables.
///
/// Every section defaults to the standard values, so a data file only needs
/// to list what it overrides.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RulesTables {
    pub race_abilities: RaceTable<Ability>,
    /// Starting hit points, inclusive on both ends.
    pub hp_ranges: ClassTable<RollRange>,
    pub class_fortunes: ClassTable<FortuneBonuses>,
    pub race_fortunes: RaceTable<FortuneBonuses>,
    pub experience: ExperienceTables,
}

impl RulesTables {
    pub const STANDARD: Self = Self {
        race_abilities: RaceTable {
            human: Ability::new(8, 8, 5, 8, 8, 9),
            elf: Ability::new(7, 10, 10, 6, 9, 6),
            dwarf: Ability::new(10, 7, 10, 10, 5, 6),
            gnome: Ability::new(7, 7, 10, 8, 10, 7),
            halfling: Ability::new(5, 7, 7, 6, 10, 15),
        },
        hp_ranges: ClassTable {
            fighter: RollRange::new(8, 14),
            mage: RollRange::new(2, 6),
            priest: RollRange::new(6, 12),
            thief: RollRange::new(4, 8),
            bishop: RollRange::new(4, 8),
            samurai: RollRange::new(12, 18),
            lord: RollRange::new(8, 14),
            ninja: RollRange::new(6, 11),
        },
        class_fortunes: ClassTable {
            fighter: [3, 0, 0, 0, 0],
            mage: [0, 0, 0, 0, 3],
            priest: [0, 3, 0, 0, 0],
            thief: [0, 0, 0, 3, 0],
            bishop: [0, 2, 2, 0, 2],
            samurai: [2, 0, 0, 0, 2],
            lord: [2, 2, 0, 0, 0],
            ninja: [3, 2, 4, 3, 2],
        },
        race_fortunes: RaceTable {
            human: [1, 0, 0, 0, 0],
            elf: [0, 0, 2, 0, 0],
            dwarf: [0, 0, 0, 4, 0],
            gnome: [0, 2, 0, 0, 0],
            halfling: [0, 0, 0, 0, 3],
        },
        experience: ExperienceTables::STANDARD,
    };
}

impl Default for RulesTables {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl TablesOracle for RulesTables {
    fn base_ability(&self, race: Race) -> Ability {
        self.race_abilities.get(race)
    }

    fn hp_range(&self, class: Class) -> RollRange {
        self.hp_ranges.get(class)
    }

    fn class_fortune(&self, class: Class) -> FortuneBonuses {
        self.class_fortunes.get(class)
    }

    fn race_fortune(&self, race: Race) -> FortuneBonuses {
        self.race_fortunes.get(race)
    }

    fn curve(&self, class: Class) -> CurveCoefficients {
        self.experience.coefficients.get(class)
    }

    fn master_increment(&self, class: Class) -> u64 {
        self.experience.master_increments.get(class)
    }
}
