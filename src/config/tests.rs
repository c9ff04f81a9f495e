//! Unit tests for engine configuration

use super::*;
use std::io::Write;

#[test]
fn test_defaults() {
    let config = EngineConfig::default();
    assert_eq!(config.mode, StatMode::PerGame);
    assert_eq!(config.rolling_window, 5);
    assert_eq!(config.top_tier_fraction, 0.10);
    assert_eq!(config.min_league_zone_attempts, 10);
    assert!(config.is_lower_better(StatKey::Turnovers));
    assert!(config.is_lower_better(StatKey::FoulsCommitted));
    assert!(!config.is_lower_better(StatKey::Points));
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config: EngineConfig =
        serde_json::from_str(r#"{ "mode": "per_40", "rolling_window": 3 }"#).unwrap();
    assert_eq!(config.mode, StatMode::Per40);
    assert_eq!(config.rolling_window, 3);
    assert_eq!(config.top_tier_fraction, 0.10);
}

#[test]
fn test_load_rejects_zero_window() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "rolling_window": 0 }}"#).unwrap();
    let err = EngineConfig::load(file.path()).unwrap_err();
    assert!(err.is_invalid_parameter());
}

#[test]
fn test_load_reads_lower_is_better() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "lower_is_better": ["turnovers"] }}"#).unwrap();
    let config = EngineConfig::load(file.path()).unwrap();
    assert_eq!(config.lower_is_better, vec![StatKey::Turnovers]);
    assert!(!config.is_lower_better(StatKey::FoulsCommitted));
}

#[test]
fn test_ranker_direction_follows_stat() {
    let config = EngineConfig::default();
    assert!(!config.ranker(StatMode::PerGame, StatKey::Turnovers).unwrap().higher_is_better);
    assert!(config.ranker(StatMode::PerGame, StatKey::Points).unwrap().higher_is_better);
}

#[test]
fn test_bad_fraction() {
    let config = EngineConfig {
        top_tier_fraction: 1.5,
        ..Default::default()
    };
    assert!(config.validate().is_err());
    assert!(config.ranker(StatMode::PerGame, StatKey::Points).is_err());
}
