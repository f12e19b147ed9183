//! Content factory for building rule data from a data directory.

use std::path::{Path, PathBuf};

use adventurer_core::{GameConfig, RulesTables};

use crate::loaders::{ConfigLoader, LoadResult, TablesFormat, TablesLoader};

const BUNDLED_CONFIG: &str = include_str!("../../data/config.toml");
const BUNDLED_TABLES: &str = include_str!("../../data/tables.toml");

/// Content factory that loads rule data from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── tables.toml   (or tables.ron)
/// ```
///
/// Missing files fall back to the data bundled with this crate.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(
                target: "adventurer_content::loaders",
                data_dir = %self.data_dir.display(),
                "no config.toml, using bundled config"
            );
            return Self::bundled_config();
        }
        ConfigLoader::load(&path)
    }

    /// Load rule tables from `tables.toml`, else `tables.ron`.
    pub fn load_tables(&self) -> LoadResult<RulesTables> {
        for name in ["tables.toml", "tables.ron"] {
            let path = self.data_dir.join(name);
            if path.exists() {
                return TablesLoader::load(&path);
            }
        }
        tracing::debug!(
            target: "adventurer_content::loaders",
            data_dir = %self.data_dir.display(),
            "no tables file, using bundled tables"
        );
        Self::bundled_tables()
    }

    /// Configuration shipped with this crate.
    pub fn bundled_config() -> LoadResult<GameConfig> {
        ConfigLoader::parse(BUNDLED_CONFIG)
    }

    /// Rule tables shipped with this crate.
    pub fn bundled_tables() -> LoadResult<RulesTables> {
        TablesLoader::parse(BUNDLED_TABLES, TablesFormat::Toml)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn bundled_data_matches_builtin_values() {
        assert_eq!(ContentFactory::bundled_tables().unwrap(), RulesTables::STANDARD);
        assert_eq!(ContentFactory::bundled_config().unwrap(), GameConfig::default());
    }
}
