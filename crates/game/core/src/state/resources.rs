//! Spell points and learned spells, tracked per caster role and tier.

use strum::{Display, EnumIter, IntoStaticStr};

use crate::error::RulesError;

/// Number of spell tiers. Tiers are numbered `1..=SPELL_TIERS`.
pub const SPELL_TIERS: usize = 7;

/// The two spellcasting disciplines an adventurer can draw on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CasterRole {
    Mage,
    Priest,
}

/// Integer resource meter (e.g., hit points, spell points).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self { current, maximum }
    }

    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Removes `amount` points if available. Returns false and leaves the
    /// meter untouched otherwise.
    pub fn spend(&mut self, amount: u32) -> bool {
        match self.current.checked_sub(amount) {
            Some(rest) => {
                self.current = rest;
                true
            }
            None => false,
        }
    }

    /// Adds points, clamped to the maximum.
    pub fn restore(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.maximum);
    }

    pub fn refill(&mut self) {
        self.current = self.maximum;
    }

    /// Sets a new maximum, clamping the current value into it.
    pub fn set_maximum(&mut self, maximum: u32) {
        self.maximum = maximum;
        self.current = self.current.min(maximum);
    }
}

fn tier_index(tier: u8) -> Result<usize, RulesError> {
    match tier {
        1..=7 => Ok(usize::from(tier) - 1),
        _ => Err(RulesError::InvalidSpellTier(tier)),
    }
}

/// Spell points for one caster role, one meter per tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManaPools {
    tiers: [ResourceMeter; SPELL_TIERS],
}

impl ManaPools {
    /// All tiers at zero, as for a freshly created adventurer.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn tier(&self, tier: u8) -> Result<ResourceMeter, RulesError> {
        Ok(self.tiers[tier_index(tier)?])
    }

    pub fn set_maximum(&mut self, tier: u8, maximum: u32) -> Result<(), RulesError> {
        self.tiers[tier_index(tier)?].set_maximum(maximum);
        Ok(())
    }

    /// Spends points from a tier. `Ok(false)` when the tier runs short.
    pub fn spend(&mut self, tier: u8, amount: u32) -> Result<bool, RulesError> {
        Ok(self.tiers[tier_index(tier)?].spend(amount))
    }

    /// Refills every tier to its maximum.
    pub fn restore_all(&mut self) {
        self.tiers.iter_mut().for_each(ResourceMeter::refill);
    }

    /// Iterates `(tier, meter)` pairs in tier order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &ResourceMeter)> {
        (1u8..).zip(self.tiers.iter())
    }
}

/// Spells learned by one caster role, grouped by tier.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellBook {
    tiers: [Vec<String>; SPELL_TIERS],
}

impl SpellBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a spell. Learning the same spell twice is a no-op; returns
    /// whether the spell was new.
    pub fn learn(&mut self, tier: u8, spell: impl Into<String>) -> Result<bool, RulesError> {
        let spells = &mut self.tiers[tier_index(tier)?];
        let spell = spell.into();
        if spells.contains(&spell) {
            return Ok(false);
        }
        spells.push(spell);
        Ok(true)
    }

    pub fn known(&self, tier: u8) -> Result<&[String], RulesError> {
        Ok(&self.tiers[tier_index(tier)?])
    }

    pub fn knows(&self, spell: &str) -> bool {
        self.tiers.iter().flatten().any(|known| known == spell)
    }
}
