//! Damage calculation and application.

use crate::env::RngOracle;

use super::hit::strength_bonus;

/// Weapon damage expressed as dice: `count`d`sides` + `bonus`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageDice {
    pub count: u32,
    pub sides: u32,
    pub bonus: i32,
}

impl DamageDice {
    pub const fn new(count: u32, sides: u32, bonus: i32) -> Self {
        Self {
            count,
            sides,
            bonus,
        }
    }

    /// Bare-handed default: 1d6.
    pub const UNARMED: Self = Self::new(1, 6, 0);
}

impl Default for DamageDice {
    fn default() -> Self {
        Self::UNARMED
    }
}

/// Roll damage for one landed swing.
///
/// # Formula
///
/// ```text
/// damage = Σ count × d(sides) + bonus + strength_bonus(strength)
/// floored at 0
/// ```
pub fn damage_per_hit(dice: DamageDice, strength: i32, rng: &mut (impl RngOracle + ?Sized)) -> u32 {
    let rolled: i64 = (0..dice.count)
        .map(|_| i64::from(rng.roll_die(dice.sides)))
        .sum();
    let total = rolled + i64::from(dice.bonus) + i64::from(strength_bonus(strength));
    total.clamp(0, i64::from(u32::MAX)) as u32
}

/// Apply damage to current HP.
///
/// Returns the new HP value (clamped to 0).
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use rand::SeedableRng;

    #[test]
    fn damage_stays_within_dice_bounds() {
        let mut rng = PcgRng::seed_from_u64(11);
        let dice = DamageDice::new(2, 4, 1);
        for _ in 0..500 {
            // strength 10 adds nothing
            let damage = damage_per_hit(dice, 10, &mut rng);
            assert!((3..=9).contains(&damage), "{damage}");
        }
    }

    #[test]
    fn strength_bonus_adds_to_each_hit() {
        let mut rng = PcgRng::seed_from_u64(3);
        let dice = DamageDice::new(1, 1, 0);
        assert_eq!(damage_per_hit(dice, 18, &mut rng), 4);
        assert_eq!(damage_per_hit(dice, 10, &mut rng), 1);
    }

    #[test]
    fn damage_is_floored_at_zero() {
        let mut rng = PcgRng::seed_from_u64(5);
        let dice = DamageDice::new(1, 3, -10);
        for _ in 0..50 {
            assert_eq!(damage_per_hit(dice, 3, &mut rng), 0);
        }
        assert_eq!(damage_per_hit(DamageDice::new(0, 6, 2), 10, &mut rng), 2);
    }

    #[test]
    fn same_seed_same_damage() {
        let dice = DamageDice::new(3, 8, 2);
        let mut a = PcgRng::seed_from_u64(77);
        let mut b = PcgRng::seed_from_u64(77);
        for _ in 0..20 {
            assert_eq!(damage_per_hit(dice, 17, &mut a), damage_per_hit(dice, 17, &mut b));
        }
    }

    #[test]
    fn apply_damage_saturates() {
        assert_eq!(apply_damage(10, 3), 7);
        assert_eq!(apply_damage(3, 10), 0);
    }
}
