//! Tests for configuration loading

use std::fs;

use tempfile::TempDir;

use super::*;

#[test]
fn test_config_path_location() {
    let path = config_path().unwrap();
    assert!(path.to_string_lossy().contains(".config/typeahead"));
    assert!(path.ends_with("config.toml"));
}

#[test]
fn test_missing_file_gives_defaults_without_warning() {
    let dir = TempDir::new().unwrap();
    let result = load_config_from_path(&dir.path().join("config.toml"));

    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_none());
}

#[test]
fn test_valid_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[suggest]\nmax_suggestions = 4\n").unwrap();

    let result = load_config_from_path(&path);

    assert_eq!(result.config.suggest.max_suggestions, 4);
    assert!(result.warning.is_none());
}

#[test]
fn test_malformed_file_gives_defaults_with_warning() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[suggest\nmax_suggestions = ").unwrap();

    let result = load_config_from_path(&path);

    assert_eq!(result.config, Config::default());
    let warning = result.warning.unwrap();
    assert!(warning.contains("config.toml"));
    assert!(warning.contains("Invalid config"));
}

#[test]
fn test_wrong_type_is_config_error() {
    let result = parse_config("[history]\nmax_items = \"ten\"\n");
    assert!(matches!(result, Err(TypeaheadError::Config(_))));
}
