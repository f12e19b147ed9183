//! Ability scores and the values derived from them.
//!
//! - [`ability`]: the six attributes with race/sex-capped growth
//! - [`fortune`]: saving-throw difficulty per category

pub mod ability;
pub mod fortune;

pub use ability::{ABILITY_HEADROOM, Ability, AttributeKind};
pub use fortune::{FortuneBonuses, FortuneCategory, fortune};
