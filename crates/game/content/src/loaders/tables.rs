//! Rule tables loader.
//!
//! Tables are read from TOML or RON, picked by file extension.

use std::path::Path;

use adventurer_core::{RulesTables, TablesOracle};
use adventurer_core::state::Class;
use strum::IntoEnumIterator;

use crate::loaders::{LoadResult, read_file};

/// Data file format for [`RulesTables`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TablesFormat {
    Toml,
    Ron,
}

impl TablesFormat {
    /// Format implied by a file extension, `None` if unrecognised.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "ron" => Some(Self::Ron),
            _ => None,
        }
    }
}

/// Loader for game rules tables.
pub struct TablesLoader;

impl TablesLoader {
    /// Load tables from a `.toml` or `.ron` file.
    pub fn load(path: &Path) -> LoadResult<RulesTables> {
        let format = TablesFormat::from_path(path).ok_or_else(|| {
            anyhow::anyhow!("Unsupported tables file extension: {}", path.display())
        })?;
        let content = read_file(path)?;
        let tables = Self::parse(&content, format)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;
        tracing::debug!(
            target: "adventurer_content::loaders",
            path = %path.display(),
            ?format,
            "loaded rules tables"
        );
        Ok(tables)
    }

    /// Parse tables from text in the given format.
    pub fn parse(content: &str, format: TablesFormat) -> LoadResult<RulesTables> {
        let tables: RulesTables = match format {
            TablesFormat::Toml => toml::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse tables TOML: {}", e))?,
            TablesFormat::Ron => ron::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse tables RON: {}", e))?,
        };
        validate(&tables)?;
        Ok(tables)
    }
}

fn validate(tables: &RulesTables) -> LoadResult<()> {
    for class in Class::iter() {
        let hp = tables.hp_range(class);
        if hp.min == 0 || hp.min > hp.max {
            anyhow::bail!("hp_ranges.{class}: expected 1 <= min <= max, got {}..={}", hp.min, hp.max);
        }
        let curve = tables.curve(class);
        if !(curve.slope > 0.0 && curve.slope.is_finite() && curve.intercept.is_finite()) {
            anyhow::bail!("experience.coefficients.{class}: curve must be finite and increasing");
        }
        if tables.master_increment(class) == 0 {
            anyhow::bail!("experience.master_increments.{class}: must be positive");
        }
    }
    Ok(())
}
