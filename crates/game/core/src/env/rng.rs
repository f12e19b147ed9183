//! RNG oracle for reproducible random number generation.
//!
//! Every random draw in the rules engine (starting age and gold, hit points,
//! hit rolls, damage dice) goes through an [`RngOracle`] handed in by the
//! caller. There is no hidden global generator.
//!
//! # Determinism
//!
//! Any [`rand::RngCore`] is an oracle, so an embedding game can pass its own
//! generator. [`PcgRng`] is the bundled seedable implementation: given the
//! same seed it always produces the same sequence, which keeps combat replays
//! and tests reproducible.

use rand::distributions::Standard;
use rand::{Rng, RngCore, SeedableRng};

/// RNG oracle for the dice and draws used by the rules.
///
/// Blanket-implemented for every [`RngCore`]; the methods only fix the
/// conventions (inclusive ranges, 1-based dice, unit interval draws).
pub trait RngOracle: RngCore {
    /// Roll a die with N sides (1-N inclusive). A zero-sided die rolls 0.
    fn roll_die(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        self.gen_range(1..=sides)
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.gen_range(min..=max)
    }

    /// Uniform draw in `[0, 1)`.
    fn roll_unit(&mut self) -> f64 {
        self.sample(Standard)
    }
}

impl<R: RngCore + ?Sized> RngOracle for R {}

/// Inclusive `[min, max]` range of a starting roll (hit points, age, gold).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollRange {
    pub min: u32,
    pub max: u32,
}

impl RollRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn roll(&self, rng: &mut (impl RngOracle + ?Sized)) -> u32 {
        rng.range(self.min, self.max)
    }

    pub const fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// This implementation uses PCG-XSH-RR, which produces 32-bit output from
/// 64-bit state.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces same output
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        // XOR upper bits with lower bits, shift right
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;

        // Use upper bits to determine rotation amount
        let rot = (state >> 59) as u32;

        xorshifted.rotate_right(rot)
    }
}

impl RngCore for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_u32());
        let high = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for PcgRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = PcgRng::seed_from_u64(42);
        let mut b = PcgRng::seed_from_u64(42);
        for _ in 0..32 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = PcgRng::seed_from_u64(1);
        let mut b = PcgRng::seed_from_u64(2);
        let a: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let b: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn dice_stay_in_bounds() {
        let mut rng = PcgRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let roll = rng.roll_die(6);
            assert!((1..=6).contains(&roll));
            let unit = rng.roll_unit();
            assert!((0.0..1.0).contains(&unit));
        }
        assert_eq!(rng.roll_die(0), 0);
        assert_eq!(rng.range(5, 5), 5);
        assert_eq!(rng.range(9, 3), 9);
    }

    #[test]
    fn roll_range_is_inclusive() {
        let range = RollRange::new(14, 16);
        let mut rng = PcgRng::seed_from_u64(99);
        let mut seen = [false; 3];
        for _ in 0..500 {
            let value = range.roll(&mut rng);
            assert!(range.contains(value));
            seen[(value - 14) as usize] = true;
        }
        assert_eq!(seen, [true; 3]);
    }
}
