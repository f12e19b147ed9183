//! Combat resolution system.
//!
//! This module provides the melee formulas and the attack sequence that
//! chains them. Every formula is a plain function of its inputs; the only
//! source of chance is the [`RngOracle`](crate::env::RngOracle) the caller
//! passes in.
//!
//! # Pipeline
//!
//! ```text
//! attack_count ──► per swing: roll < hit_rate ? ──► damage_per_hit
//! ```
//!
//! # Core Functions
//!
//! - `strength_bonus` / `level_bonus` / `hitting_power`: attacker bonuses
//! - `hit_rate`: chance per swing, 0% to 95% in 5% steps
//! - `attack_count`: swings per round by class group and level
//! - `damage_per_hit`: dice + bonus + strength, floored at 0
//! - `resolve_attack_sequence`: the full round
//! - `apply_damage`: HP reduction (clamped to 0)

pub mod attacks;
pub mod damage;
pub mod hit;
pub mod result;

pub use attacks::{MAX_EQUIPPED_SWINGS, SwingProgression, attack_count};
pub use damage::{DamageDice, apply_damage, damage_per_hit};
pub use hit::{HitRate, hit_rate, hit_rate_for_power, hitting_power, level_bonus, strength_bonus};
pub use result::{
    AttackModifiers, AttackOutcome, AttackRequest, AttackSequence, resolve_attack_sequence,
};
