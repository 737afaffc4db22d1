//! Integration tests for configuration files

use std::time::Duration;

use tempfile::TempDir;

use gitmaster::config::ConfigError;
use gitmaster::{Config, Timing};

#[test]
fn default_config_round_trips_through_toml() {
    let config = Config::default();
    let text = config.to_toml().unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();

    assert_eq!(parsed, config);
    assert!(text.contains("[player]"));
    assert!(text.contains("typing_interval_ms = 50"));
}

#[test]
fn partial_file_fills_missing_fields() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[clipboard]\nindicator_ms = 500\n").unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.indicator_window(), Duration::from_millis(500));
    assert_eq!(config.timing(), Timing::default());
    assert!(config.ui.show_sidebar);
}

#[test]
fn zero_timings_become_instant_playback() {
    let config: Config = toml::from_str(
        "[player]\ntyping_interval_ms = 0\nreveal_delay_ms = 0\nautoplay_pause_ms = 0\n",
    )
    .unwrap();

    assert_eq!(config.timing(), Timing::instant());
}

#[test]
fn wrong_type_is_a_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[player]\ntyping_interval_ms = \"fast\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}
