//! Deterministic adventurer rules: abilities, progression, saving throws and
//! melee.
//!
//! `adventurer-core` defines the canonical formulas as pure functions and
//! wraps them in the [`Adventurer`] aggregate. Rule data is read through
//! [`TablesOracle`], tunables through [`GameConfig`], and every random draw
//! comes from a caller-supplied [`RngOracle`], so a seeded generator replays
//! identically.
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod progression;
pub mod state;
pub mod stats;

pub use combat::{
    AttackModifiers, AttackOutcome, AttackRequest, AttackSequence, DamageDice, HitRate,
    SwingProgression,
};
pub use config::GameConfig;
pub use env::{
    ClassTable, CurveCoefficients, ExperienceTables, PcgRng, RaceTable, RngOracle, RollRange,
    RulesEnv, RulesTables, TablesOracle,
};
pub use error::{ErrorSeverity, GameError, RulesError};
pub use state::{
    Adventurer, Alignment, CasterRole, Class, Classified, ManaPools, Race, ResourceMeter, Sex,
    SpellBook, Status,
};
pub use stats::{Ability, AttributeKind, FortuneBonuses, FortuneCategory};
