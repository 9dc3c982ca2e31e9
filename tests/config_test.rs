//! Tests for display configuration loading.

use std::fs;
use tempfile::TempDir;

use board_row::{BoardConfig, CellValue, DEFAULT_LOG_FILTER, Mark, Theme};
use ratatui::style::Color;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("board.toml");
    fs::write(&path, content).expect("Failed to write TOML");
    path
}

#[test]
fn test_defaults_when_no_file() {
    let config = BoardConfig::load(None).expect("Defaults load");
    assert_eq!(config, BoardConfig::default());
    assert!(!*config.show_numbers());
    assert_eq!(config.log_file(), "board_row.log");
    assert_eq!(config.theme().expect("Default colors parse"), Theme::default());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "show_numbers = true\nx_color = \"green\"\n");

    let config = BoardConfig::from_file(&path).expect("Load failed");
    assert!(*config.show_numbers());
    assert_eq!(config.x_color(), "green");
    assert_eq!(config.o_color(), "red");

    let theme = config.theme().expect("Colors parse");
    assert!(theme.show_numbers());
    assert_eq!(theme.value_style(CellValue::Marked(Mark::X)).fg, Some(Color::Green));
}

#[test]
fn test_unknown_color_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "o_color = \"not-a-color\"\n");

    let config = BoardConfig::from_file(&path).expect("Load failed");
    let err = config.theme().unwrap_err();
    assert!(err.message.contains("Unknown color"));
}

#[test]
fn test_invalid_toml_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "this is not valid toml !!!@@@");

    let err = BoardConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = BoardConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_show_numbers_override() {
    let config = BoardConfig::default().with_show_numbers(true);
    assert!(*config.show_numbers());
}

#[test]
fn test_default_log_filter_is_info() {
    assert_eq!(DEFAULT_LOG_FILTER, "info");
    assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
}
