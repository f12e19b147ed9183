//! Combat result types and attack sequence resolution.

use crate::env::RngOracle;
use crate::state::Class;

use super::attacks::attack_count;
use super::damage::{DamageDice, damage_per_hit};
use super::hit::{HitRate, hit_rate};

/// Outcome of a single swing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Swing missed the target.
    Miss,
    /// Swing landed for the given damage.
    Hit { damage: u32 },
}

impl AttackOutcome {
    pub const fn damage(&self) -> u32 {
        match self {
            Self::Miss => 0,
            Self::Hit { damage } => *damage,
        }
    }

    pub const fn is_hit(&self) -> bool {
        matches!(self, Self::Hit { .. })
    }
}

/// Equipment and target modifiers for one attack, pre-resolved by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackModifiers {
    /// Extra hitting power granted by the weapon.
    pub equipped_strength: i32,
    /// Minimum swings granted by the weapon.
    pub equipped_attack_count: i32,
    pub enemy_group_count: i32,
    pub enemy_ac: i32,
    pub dice: DamageDice,
}

impl AttackModifiers {
    /// Bare hands against a group of 7 with armor class 10.
    pub const fn unarmed() -> Self {
        Self {
            equipped_strength: 0,
            equipped_attack_count: 1,
            enemy_group_count: 7,
            enemy_ac: 10,
            dice: DamageDice::UNARMED,
        }
    }

    #[must_use]
    pub const fn with_weapon(mut self, equipped_strength: i32, dice: DamageDice) -> Self {
        self.equipped_strength = equipped_strength;
        self.dice = dice;
        self
    }

    #[must_use]
    pub const fn with_attack_count(mut self, equipped_attack_count: i32) -> Self {
        self.equipped_attack_count = equipped_attack_count;
        self
    }

    #[must_use]
    pub const fn against(mut self, enemy_group_count: i32, enemy_ac: i32) -> Self {
        self.enemy_group_count = enemy_group_count;
        self.enemy_ac = enemy_ac;
        self
    }
}

impl Default for AttackModifiers {
    fn default() -> Self {
        Self::unarmed()
    }
}

/// Attacker-side inputs for one attack sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackRequest {
    pub level: i32,
    pub class: Class,
    pub strength: i32,
    pub modifiers: AttackModifiers,
}

/// Result of a full attack sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackSequence {
    /// Number of swings that landed.
    pub hits: u32,
    /// Damage summed over every landed swing.
    pub total_damage: u32,
    /// Swings attempted this round.
    pub attack_count: u32,
    pub hit_rate: HitRate,
    /// Per-swing outcomes in order.
    pub swings: Vec<AttackOutcome>,
}

impl AttackSequence {
    pub fn missed(&self) -> bool {
        self.hits == 0
    }
}

/// Resolve a complete attack sequence.
///
/// Every swing rolls independently: a uniform draw below the hit rate lands
/// and rolls one [`damage_per_hit`]. With no landed swing both hits and total
/// damage are 0.
pub fn resolve_attack_sequence(
    request: &AttackRequest,
    rng: &mut (impl RngOracle + ?Sized),
) -> AttackSequence {
    let modifiers = &request.modifiers;
    let attack_count = attack_count(request.level, request.class, modifiers.equipped_attack_count);
    let hit_rate = hit_rate(
        request.level,
        request.class,
        request.strength,
        modifiers.equipped_strength,
        modifiers.enemy_group_count,
        modifiers.enemy_ac,
    );

    let mut swings = Vec::with_capacity(attack_count as usize);
    let mut hits = 0u32;
    let mut total_damage = 0u32;

    for swing in 0..attack_count {
        let draw = rng.roll_unit();
        let outcome = if hit_rate.is_hit(draw) {
            let damage = damage_per_hit(modifiers.dice, request.strength, rng);
            hits += 1;
            total_damage = total_damage.saturating_add(damage);
            AttackOutcome::Hit { damage }
        } else {
            AttackOutcome::Miss
        };
        tracing::trace!(
            target: "adventurer_core::combat",
            swing,
            draw,
            hit = outcome.is_hit(),
            damage = outcome.damage(),
            "swing resolved"
        );
        swings.push(outcome);
    }

    AttackSequence {
        hits,
        total_damage,
        attack_count,
        hit_rate,
        swings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::MAX_EQUIPPED_SWINGS;
    use crate::env::PcgRng;
    use rand::SeedableRng;

    fn fighter(level: i32, strength: i32, modifiers: AttackModifiers) -> AttackRequest {
        AttackRequest {
            level,
            class: Class::Fighter,
            strength,
            modifiers,
        }
    }

    #[test]
    fn hopeless_attack_never_lands() {
        let mut rng = PcgRng::seed_from_u64(1);
        let modifiers = AttackModifiers::unarmed().with_weapon(-200, DamageDice::UNARMED);
        let sequence = resolve_attack_sequence(&fighter(1, 10, modifiers), &mut rng);
        assert_eq!(sequence.hit_rate, HitRate::NEVER);
        assert!(sequence.missed());
        assert_eq!(sequence.total_damage, 0);
        assert_eq!(sequence.swings.len(), 1);
    }

    #[test]
    fn totals_match_swings() {
        let mut rng = PcgRng::seed_from_u64(2024);
        let modifiers = AttackModifiers::unarmed()
            .with_weapon(6, DamageDice::new(1, 3, 9))
            .against(7, -2);
        let sequence = resolve_attack_sequence(&fighter(20, 18, modifiers), &mut rng);

        assert_eq!(sequence.attack_count, 5);
        assert_eq!(sequence.swings.len(), 5);
        let hits = sequence.swings.iter().filter(|s| s.is_hit()).count() as u32;
        let damage: u32 = sequence.swings.iter().map(AttackOutcome::damage).sum();
        assert_eq!(sequence.hits, hits);
        assert_eq!(sequence.total_damage, damage);
        for swing in &sequence.swings {
            if let AttackOutcome::Hit { damage } = swing {
                // 1d3 + 9 + strength bonus 3
                assert!((13..=15).contains(damage));
            }
        }
    }

    #[test]
    fn best_rate_lands_most_swings() {
        let mut rng = PcgRng::seed_from_u64(8);
        let modifiers = AttackModifiers::unarmed().against(1, -10).with_attack_count(36);
        let mut landed = 0;
        let mut swung = 0;
        for _ in 0..50 {
            let sequence = resolve_attack_sequence(&fighter(100, 18, modifiers), &mut rng);
            assert_eq!(sequence.hit_rate, HitRate::MAX);
            landed += sequence.hits;
            swung += sequence.attack_count;
        }
        let ratio = f64::from(landed) / f64::from(swung);
        assert!(ratio > 0.85 && ratio < 1.0, "{ratio}");
    }

    #[test]
    fn oversized_attack_count_is_bounded() {
        let mut rng = PcgRng::seed_from_u64(3);
        let modifiers = AttackModifiers::unarmed().with_attack_count(i32::MAX);
        let sequence = resolve_attack_sequence(&fighter(1, 10, modifiers), &mut rng);
        assert_eq!(sequence.attack_count, MAX_EQUIPPED_SWINGS as u32);
        assert_eq!(sequence.swings.len(), MAX_EQUIPPED_SWINGS as usize);
    }

    #[test]
    fn seeded_sequences_replay() {
        let modifiers = AttackModifiers::unarmed().with_weapon(2, DamageDice::new(2, 6, 1));
        let request = fighter(12, 16, modifiers);
        let mut a = PcgRng::seed_from_u64(55);
        let mut b = PcgRng::seed_from_u64(55);
        assert_eq!(
            resolve_attack_sequence(&request, &mut a),
            resolve_attack_sequence(&request, &mut b)
        );
    }
}
