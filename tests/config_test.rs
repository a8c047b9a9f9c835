//! Tests for TOML configuration loading.

use noughts::AppConfig;
use noughts_engine::Roster;
use std::io::Write;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.roster(), Roster::default());
    assert_eq!(config.log_filter(), "warn,noughts=info,noughts_engine=info");
}

#[test]
fn test_partial_file_fills_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "first_player_name = \"Ada\"").expect("write config");

    let config = AppConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.first_player_name(), "Ada");
    assert_eq!(config.second_player_name(), "O");
    assert_eq!(config.roster(), Roster::new("Ada", "O"));
}

#[test]
fn test_full_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "first_player_name = \"Ada\"\nsecond_player_name = \"Grace\"\nlog_filter = \"debug\""
    )
    .expect("write config");

    let config = AppConfig::load_or_default(file.path()).expect("valid config");
    assert_eq!(config.roster(), Roster::new("Ada", "Grace"));
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_names_are_trimmed() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "first_player_name = \" Ada \"\nsecond_player_name = \"\tGrace\""
    )
    .expect("write config");

    let config = AppConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.first_player_name(), "Ada");
    assert_eq!(config.second_player_name(), "Grace");
    assert_eq!(config.roster(), Roster::new("Ada", "Grace"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "first_player_name = ").expect("write config");

    let error = AppConfig::from_file(file.path()).unwrap_err();
    assert!(error.message.contains("Failed to parse config"));
}

#[test]
fn test_blank_names_are_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "second_player_name = \"  \"").expect("write config");

    let error = AppConfig::from_file(file.path()).unwrap_err();
    assert!(error.to_string().contains("Player names must not be blank"));
}
