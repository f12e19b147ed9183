//! Data-driven rule content and loaders.
//!
//! This crate houses the rule data files and provides loaders for them:
//! - Rule tables: race abilities, hit point ranges, saving-throw bonuses and
//!   experience curves (TOML or RON)
//! - Game configuration (TOML)
//!
//! All loaders deserialize directly into `adventurer-core` types, which
//! enables that crate's `serde` feature.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, TablesFormat, TablesLoader};
