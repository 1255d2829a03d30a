//! Tests for configuration loading.

use std::io::Write;
use std::path::PathBuf;
use tictactoe_tui::{AppConfig, ThemeMode};

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.theme(), &ThemeMode::Dark);
    assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_valid_file_is_parsed() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "theme = \"light\"\nlog_filter = \"debug\"").unwrap();

    let config = AppConfig::load_or_default(file.path()).unwrap();
    assert_eq!(config.theme(), &ThemeMode::Light);
    assert_eq!(config.log_filter(), "debug");
    // Unset keys fall back to defaults.
    assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "theme = \"sepia\"").unwrap();

    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_theme_override() {
    let config = AppConfig::default().with_theme(ThemeMode::Light);
    assert_eq!(config.theme(), &ThemeMode::Light);
}
