//! Game configuration loader.

use std::path::Path;

use adventurer_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their [`GameConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;
        tracing::debug!(
            target: "adventurer_content::loaders",
            path = %path.display(),
            max_level = config.max_level,
            "loaded game config"
        );
        Ok(config)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        validate(&config)?;
        Ok(config)
    }
}

fn validate(config: &GameConfig) -> LoadResult<()> {
    if config.max_level < GameConfig::MIN_LEVEL {
        anyhow::bail!("max_level must be at least {}, got {}", GameConfig::MIN_LEVEL, config.max_level);
    }
    for (name, range) in [
        ("starting_age", config.starting_age),
        ("starting_gold", config.starting_gold),
    ] {
        if range.min > range.max {
            anyhow::bail!("{name}: min {} exceeds max {}", range.min, range.max);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn partial_file_overrides_listed_keys() {
        let config = ConfigLoader::parse("max_level = 99\nbase_ac = 8\n").unwrap();
        assert_eq!(config.max_level, 99);
        assert_eq!(config.base_ac, 8);
        assert_eq!(config.default_enemy_ac, GameConfig::DEFAULT_ENEMY_AC);
    }

    #[test]
    fn rejects_unusable_values() {
        assert!(ConfigLoader::parse("max_level = 0").is_err());
        assert!(ConfigLoader::parse("starting_gold = { min = 10, max = 5 }").is_err());
        assert!(ConfigLoader::parse("max_level = \"high\"").is_err());
    }
}
