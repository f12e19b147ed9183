//! Traits describing read-only rule data and injected randomness.
//!
//! The [`TablesOracle`] exposes static rule tables and the [`RngOracle`]
//! supplies every random draw, so the rules never reach for a global.
mod rng;
mod tables;

pub use rng::{PcgRng, RngOracle, RollRange};
pub use tables::{
    ClassTable, CurveCoefficients, ExperienceTables, RaceTable, RulesTables, TablesOracle,
};

use crate::config::GameConfig;

/// Aggregates the read-only tables and configuration the rules consult.
#[derive(Clone, Copy)]
pub struct RulesEnv<'a> {
    tables: &'a dyn TablesOracle,
    config: &'a GameConfig,
}

impl<'a> RulesEnv<'a> {
    pub fn new(tables: &'a dyn TablesOracle, config: &'a GameConfig) -> Self {
        Self { tables, config }
    }

    pub fn tables(&self) -> &'a dyn TablesOracle {
        self.tables
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }
}

impl core::fmt::Debug for RulesEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RulesEnv")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
