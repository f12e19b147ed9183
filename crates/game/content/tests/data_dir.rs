use std::fs;

use adventurer_content::ContentFactory;
use adventurer_core::{
    Adventurer, Alignment, Class, GameConfig, PcgRng, Race, RulesEnv, RulesTables, Sex,
};
use rand::SeedableRng;
use tempfile::TempDir;

#[test]
fn test_empty_dir_falls_back_to_bundled_data() {
    let temp_dir = TempDir::new().unwrap();
    let factory = ContentFactory::new(temp_dir.path());

    assert_eq!(factory.load_config().unwrap(), GameConfig::default());
    assert_eq!(factory.load_tables().unwrap(), RulesTables::STANDARD);
}

#[test]
fn test_overrides_feed_adventurer_creation() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("config.toml"),
        "max_level = 3\nstarting_gold = { min = 500, max = 500 }\n",
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("tables.ron"),
        r#"(
            hp_ranges: (
                fighter: (min: 40, max: 40),
                mage: (min: 2, max: 6),
                priest: (min: 6, max: 12),
                thief: (min: 4, max: 8),
                bishop: (min: 4, max: 8),
                samurai: (min: 12, max: 18),
                lord: (min: 8, max: 14),
                ninja: (min: 6, max: 11),
            ),
        )"#,
    )
    .unwrap();

    let factory = ContentFactory::new(temp_dir.path());
    let config = factory.load_config().unwrap();
    let tables = factory.load_tables().unwrap();
    let env = RulesEnv::new(&tables, &config);
    let mut rng = PcgRng::seed_from_u64(11);

    let mut fighter = Adventurer::new(
        "Loaded",
        Sex::Male,
        Race::Dwarf,
        Alignment::Good,
        Class::Fighter,
        &env,
        &mut rng,
    );
    assert_eq!(fighter.gold(), 500);
    assert_eq!(fighter.hit_points().map(|hp| hp.maximum), Some(40));

    assert_eq!(fighter.gain_experience(1_000_000, &env).unwrap(), 2);
    assert_eq!(fighter.level(), 3);
}

#[test]
fn test_toml_tables_take_precedence_over_ron() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("tables.toml"), "").unwrap();
    fs::write(temp_dir.path().join("tables.ron"), "not ron at all").unwrap();

    let factory = ContentFactory::new(temp_dir.path());
    assert_eq!(factory.load_tables().unwrap(), RulesTables::STANDARD);
}

#[test]
fn test_malformed_file_reports_its_path() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("config.toml"), "max_level = [").unwrap();

    let factory = ContentFactory::new(temp_dir.path());
    let err = factory.load_config().unwrap_err();
    assert!(err.to_string().contains("config.toml"), "{err}");
}
