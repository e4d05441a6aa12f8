//! Config file loading tests

use std::fs;

use runnerdeck::config::ConfigError;
use runnerdeck::{Config, ThemeName};
use tempfile::TempDir;

#[test]
fn missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\ntheme = \"light\"\n\n[animation]\nauto_replay = false\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.theme, ThemeName::Light);
    assert!(!config.animation.auto_replay);
    assert_eq!(config.animation.speed_multiplier, 100);
    assert_eq!(config.animation.target_duration_secs, 433);
}

#[test]
fn save_then_load_preserves_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let mut config = Config::default();
    config.animation.replay_dwell_ms = 5_000;
    config.ui.theme = ThemeName::Light;

    config.save_to(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn invalid_value_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[animation]\ntarget_duration_secs = 0\n").unwrap();

    match Config::load_from(&path) {
        Err(ConfigError::Invalid { field, .. }) => {
            assert_eq!(field, "animation.target_duration_secs")
        }
        other => panic!("expected invalid value error, got {:?}", other),
    }
}

#[test]
fn unknown_theme_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\ntheme = \"sepia\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}
