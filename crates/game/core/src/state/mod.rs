//! Adventurer state and the classifications it is built from.
//!
//! The [`Adventurer`] owns its scores, vitals and spell resources and mutates
//! them only through its own methods; everything else in the crate is pure
//! functions over these values.
pub mod adventurer;
pub mod classification;
pub mod resources;

pub use adventurer::Adventurer;
pub use classification::{Alignment, Class, Classified, Race, Sex, Status};
pub use resources::{CasterRole, ManaPools, ResourceMeter, SPELL_TIERS, SpellBook};
