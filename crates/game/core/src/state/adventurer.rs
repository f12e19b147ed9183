//! The adventurer aggregate.

use crate::combat::{
    self, AttackModifiers, AttackRequest, AttackSequence, DamageDice, HitRate, apply_damage,
};
use crate::env::{RngOracle, RulesEnv};
use crate::error::RulesError;
use crate::progression;
use crate::stats::{self, Ability, AttributeKind, FortuneCategory};

use super::classification::{Alignment, Class, Classified, Race, Sex, Status};
use super::resources::{CasterRole, ManaPools, ResourceMeter, SpellBook};

/// A single adventurer: identity, progression, vitals and spell resources.
///
/// # Invariants
///
/// - `ability` is `None` exactly when the race did not validate
/// - `hit_points` is `None` exactly when the class did not validate
/// - every ability score stays within `[0, maximum]` for race and sex
/// - `level ≥ 1`
///
/// The adventurer is the only writer of its ability scores; changes replace
/// the whole [`Ability`] value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Adventurer {
    name: String,
    sex: Classified<Sex>,
    race: Classified<Race>,
    alignment: Classified<Alignment>,
    class: Classified<Class>,

    age: u32,
    gold: u32,
    level: i32,
    experience: u64,

    ability: Option<Ability>,
    hit_points: Option<ResourceMeter>,
    base_ac: i32,
    ac: i32,

    poison: u32,
    silence: u32,
    status: Status,

    mage_mana: ManaPools,
    priest_mana: ManaPools,
    mage_spells: SpellBook,
    priest_spells: SpellBook,
}

impl Adventurer {
    /// Creates a level 1 adventurer.
    ///
    /// Age, gold and starting hit points are drawn from `rng`. Classification
    /// values that do not validate are kept as [`Classified::Invalid`]; the
    /// adventurer is still created, without ability scores (invalid race) or
    /// hit points (invalid class).
    pub fn new(
        name: impl Into<String>,
        sex: impl Into<Classified<Sex>>,
        race: impl Into<Classified<Race>>,
        alignment: impl Into<Classified<Alignment>>,
        class: impl Into<Classified<Class>>,
        env: &RulesEnv<'_>,
        rng: &mut (impl RngOracle + ?Sized),
    ) -> Self {
        let config = env.config();
        let name = name.into();
        let sex = sex.into();
        let race = race.into();
        let class = class.into();

        let age = config.starting_age.roll(rng);
        let gold = config.starting_gold.roll(rng);
        let ability = Self::derive_ability(race, sex, env);
        let hit_points = class
            .get()
            .map(|class| ResourceMeter::full(env.tables().hp_range(class).roll(rng)));

        tracing::debug!(
            target: "adventurer_core::state",
            name = %name,
            race = ?race,
            class = ?class,
            hp = ?hit_points.map(|hp| hp.maximum),
            "adventurer created"
        );

        Self {
            name,
            sex,
            race,
            alignment: alignment.into(),
            class,
            age,
            gold,
            level: 1,
            experience: 0,
            ability,
            hit_points,
            base_ac: config.base_ac,
            ac: config.base_ac,
            poison: 0,
            silence: 0,
            status: Status::Normal,
            mage_mana: ManaPools::empty(),
            priest_mana: ManaPools::empty(),
            mage_spells: SpellBook::new(),
            priest_spells: SpellBook::new(),
        }
    }

    fn derive_ability(
        race: Classified<Race>,
        sex: Classified<Sex>,
        env: &RulesEnv<'_>,
    ) -> Option<Ability> {
        let tables = env.tables();
        let ability = stats::ability::initial(race, tables).ok()?;
        let race = race.get()?;
        Some(stats::ability::apply_sex_bonus(ability, race, sex, tables))
    }

    // ===== identity & classification =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sex(&self) -> Classified<Sex> {
        self.sex
    }

    pub fn race(&self) -> Classified<Race> {
        self.race
    }

    pub fn alignment(&self) -> Classified<Alignment> {
        self.alignment
    }

    pub fn class(&self) -> Classified<Class> {
        self.class
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Removes gold if enough is carried.
    pub fn spend_gold(&mut self, amount: u32) -> bool {
        match self.gold.checked_sub(amount) {
            Some(rest) => {
                self.gold = rest;
                true
            }
            None => false,
        }
    }

    fn require_race(&self) -> Result<Race, RulesError> {
        self.race.require(RulesError::InvalidRace)
    }

    fn require_class(&self) -> Result<Class, RulesError> {
        self.class.require(RulesError::InvalidClass)
    }

    // ===== ability scores =====

    /// Current ability scores.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::InvalidRace` if the race did not validate.
    pub fn ability(&self) -> Result<Ability, RulesError> {
        self.ability.ok_or(RulesError::InvalidRace)
    }

    /// Re-derives ability scores from race and sex, discarding all growth.
    pub fn reset_ability(&mut self, env: &RulesEnv<'_>) {
        self.ability = Self::derive_ability(self.race, self.sex, env);
    }

    pub fn max_ability(
        &self,
        attribute: AttributeKind,
        env: &RulesEnv<'_>,
    ) -> Result<i32, RulesError> {
        let race = self.require_race()?;
        Ok(stats::ability::maximum(race, self.sex, attribute, env.tables()))
    }

    /// Raises (or lowers) one score, clamped to `[0, maximum]`.
    pub fn increase_ability(
        &mut self,
        attribute: AttributeKind,
        delta: i32,
        env: &RulesEnv<'_>,
    ) -> Result<Ability, RulesError> {
        let race = self.require_race()?;
        let current = self.ability()?;
        let next = stats::ability::increase(current, race, self.sex, attribute, delta, env.tables());
        self.ability = Some(next);
        Ok(next)
    }

    /// [`Adventurer::increase_ability`] by field name. Unknown names change
    /// nothing.
    pub fn increase_ability_named(
        &mut self,
        attribute: &str,
        delta: i32,
        env: &RulesEnv<'_>,
    ) -> Result<Ability, RulesError> {
        let race = self.require_race()?;
        let current = self.ability()?;
        let next =
            stats::ability::increase_named(current, race, self.sex, attribute, delta, env.tables());
        self.ability = Some(next);
        Ok(next)
    }

    // ===== progression =====

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn experience(&self) -> u64 {
        self.experience
    }

    /// Sets the level directly (level drain, scripted events).
    ///
    /// # Errors
    ///
    /// Returns `RulesError::InvalidLevel` for levels below 1.
    pub fn set_level(&mut self, level: i32) -> Result<(), RulesError> {
        if level < 1 {
            return Err(RulesError::InvalidLevel(level));
        }
        self.level = level;
        Ok(())
    }

    pub fn required_experience_for_next_level(
        &self,
        env: &RulesEnv<'_>,
    ) -> Result<u64, RulesError> {
        progression::required_experience(
            self.level.saturating_add(1),
            self.require_class()?,
            env.tables(),
        )
    }

    pub fn is_level_up(&self, env: &RulesEnv<'_>) -> Result<bool, RulesError> {
        progression::is_level_up(self.experience, self.level, self.require_class()?, env.tables())
    }

    pub fn experience_to_next_level(&self, env: &RulesEnv<'_>) -> Result<u64, RulesError> {
        progression::experience_to_next_level(
            self.experience,
            self.level,
            self.require_class()?,
            env.tables(),
        )
    }

    /// Awards experience, then levels up as many times as it allows.
    ///
    /// Returns the number of levels gained.
    pub fn gain_experience(&mut self, amount: u64, env: &RulesEnv<'_>) -> Result<u32, RulesError> {
        let class = self.require_class()?;
        self.experience = self.experience.saturating_add(amount);
        self.advance_levels(class, env)
    }

    /// Runs the level-up cascade without awarding experience.
    pub fn check_level_up(&mut self, env: &RulesEnv<'_>) -> Result<u32, RulesError> {
        let class = self.require_class()?;
        self.advance_levels(class, env)
    }

    fn advance_levels(&mut self, class: Class, env: &RulesEnv<'_>) -> Result<u32, RulesError> {
        let max_level = env.config().max_level;
        let reached =
            progression::cascade_level(self.experience, self.level, class, max_level, env.tables())?;
        let gained = reached.saturating_sub(self.level).max(0) as u32;
        for level in (self.level + 1)..=reached {
            tracing::debug!(
                target: "adventurer_core::progression",
                name = %self.name,
                level,
                experience = self.experience,
                "level up"
            );
        }
        self.level = reached;
        Ok(gained)
    }

    // ===== saving throws =====

    pub fn fortune(
        &self,
        category: FortuneCategory,
        env: &RulesEnv<'_>,
    ) -> Result<i32, RulesError> {
        let ability = self.ability()?;
        stats::fortune(
            self.level,
            ability.luck,
            self.race,
            self.class,
            category,
            env.tables(),
        )
    }

    // ===== melee =====

    pub fn strength_bonus(&self) -> Result<i32, RulesError> {
        Ok(combat::strength_bonus(self.ability()?.strength))
    }

    pub fn level_bonus(&self) -> Result<i32, RulesError> {
        Ok(combat::level_bonus(self.level, self.require_class()?))
    }

    pub fn hitting_power(&self, equipped_strength: i32) -> Result<i32, RulesError> {
        let class = self.require_class()?;
        let strength = self.ability()?.strength;
        Ok(combat::hitting_power(self.level, class, strength, equipped_strength))
    }

    pub fn hit_rate(
        &self,
        equipped_strength: i32,
        enemy_group_count: i32,
        enemy_ac: i32,
    ) -> Result<HitRate, RulesError> {
        Ok(combat::hit_rate_for_power(
            self.hitting_power(equipped_strength)?,
            enemy_group_count,
            enemy_ac,
        ))
    }

    /// Hit rate against the configured default enemy group.
    pub fn default_hit_rate(
        &self,
        equipped_strength: i32,
        env: &RulesEnv<'_>,
    ) -> Result<HitRate, RulesError> {
        let config = env.config();
        self.hit_rate(
            equipped_strength,
            config.default_enemy_group_count,
            config.default_enemy_ac,
        )
    }

    pub fn attack_count(&self, equipped_attack_count: i32) -> Result<u32, RulesError> {
        Ok(combat::attack_count(
            self.level,
            self.require_class()?,
            equipped_attack_count,
        ))
    }

    pub fn roll_damage(
        &self,
        dice: DamageDice,
        rng: &mut (impl RngOracle + ?Sized),
    ) -> Result<u32, RulesError> {
        Ok(combat::damage_per_hit(dice, self.ability()?.strength, rng))
    }

    /// Resolves one round of melee swings.
    ///
    /// Status is not consulted; whether a sleeping or dead adventurer may act
    /// is up to the caller.
    pub fn attack(
        &self,
        modifiers: &AttackModifiers,
        rng: &mut (impl RngOracle + ?Sized),
    ) -> Result<AttackSequence, RulesError> {
        let request = AttackRequest {
            level: self.level,
            class: self.require_class()?,
            strength: self.ability()?.strength,
            modifiers: *modifiers,
        };
        let sequence = combat::resolve_attack_sequence(&request, rng);
        tracing::debug!(
            target: "adventurer_core::combat",
            name = %self.name,
            swings = sequence.attack_count,
            hits = sequence.hits,
            damage = sequence.total_damage,
            "attack resolved"
        );
        Ok(sequence)
    }

    // ===== vitals =====

    /// Hit points, `None` if the class did not validate.
    pub fn hit_points(&self) -> Option<ResourceMeter> {
        self.hit_points
    }

    pub fn is_alive(&self) -> bool {
        self.hit_points.is_some_and(|hp| hp.current > 0)
    }

    /// Applies damage, returning the remaining hit points.
    pub fn take_damage(&mut self, damage: u32) -> Result<u32, RulesError> {
        let hp = self.hit_points.as_mut().ok_or(RulesError::InvalidClass)?;
        hp.current = apply_damage(hp.current, damage);
        Ok(hp.current)
    }

    /// Restores hit points up to the maximum, returning the new value.
    pub fn heal(&mut self, amount: u32) -> Result<u32, RulesError> {
        let hp = self.hit_points.as_mut().ok_or(RulesError::InvalidClass)?;
        hp.restore(amount);
        Ok(hp.current)
    }

    pub fn base_ac(&self) -> i32 {
        self.base_ac
    }

    pub fn ac(&self) -> i32 {
        self.ac
    }

    /// Sets the armor class resolved from equipment and effects.
    pub fn set_ac(&mut self, ac: i32) {
        self.ac = ac;
    }

    // ===== status =====

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn status_name(&self) -> &'static str {
        self.status.name()
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub fn poison(&self) -> u32 {
        self.poison
    }

    pub fn set_poison(&mut self, poison: u32) {
        self.poison = poison;
    }

    pub fn silence(&self) -> u32 {
        self.silence
    }

    pub fn set_silence(&mut self, silence: u32) {
        self.silence = silence;
    }

    // ===== spells =====

    pub fn mana(&self, role: CasterRole) -> &ManaPools {
        match role {
            CasterRole::Mage => &self.mage_mana,
            CasterRole::Priest => &self.priest_mana,
        }
    }

    pub fn mana_mut(&mut self, role: CasterRole) -> &mut ManaPools {
        match role {
            CasterRole::Mage => &mut self.mage_mana,
            CasterRole::Priest => &mut self.priest_mana,
        }
    }

    fn spell_book_mut(&mut self, role: CasterRole) -> &mut SpellBook {
        match role {
            CasterRole::Mage => &mut self.mage_spells,
            CasterRole::Priest => &mut self.priest_spells,
        }
    }

    pub fn spell_book(&self, role: CasterRole) -> &SpellBook {
        match role {
            CasterRole::Mage => &self.mage_spells,
            CasterRole::Priest => &self.priest_spells,
        }
    }

    /// Records a learned spell. Returns whether it was new.
    pub fn learn_spell(
        &mut self,
        role: CasterRole,
        tier: u8,
        spell: impl Into<String>,
    ) -> Result<bool, RulesError> {
        self.spell_book_mut(role).learn(tier, spell)
    }

    pub fn known_spells(&self, role: CasterRole, tier: u8) -> Result<&[String], RulesError> {
        self.spell_book(role).known(tier)
    }
}
