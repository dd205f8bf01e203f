use std::fs;
use std::io::Write;

use tempfile::TempDir;

use super::*;

#[test]
fn test_config_path_returns_config_path() {
    let path = config_path();
    assert!(path.is_some());
    let path = path.unwrap();
    assert!(path.to_string_lossy().contains(".config/modal-keys"));
    assert!(path.to_string_lossy().ends_with("config.toml"));
}

#[test]
fn test_parse_config_toml_empty_string() {
    let config = parse_config_toml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_config_toml_invalid_syntax() {
    let result = parse_config_toml("[keys\ncount_limit = 3");
    assert!(matches!(result, Err(ModalKeysError::Config(_))));
}

#[test]
fn test_load_config_from_missing_path_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("does-not-exist.toml");

    let config = load_config_from_path(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_config_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");

    let mut file = fs::File::create(&path).unwrap();
    writeln!(file, "[keys]").unwrap();
    writeln!(file, "temporary_normal = \"p\"").unwrap();
    writeln!(file, "count_limit = 50").unwrap();
    writeln!(file, "[indicator.search]").unwrap();
    writeln!(file, "background = \"purple\"").unwrap();
    writeln!(file, "foreground = \"yellow\"").unwrap();

    let config = load_config_from_path(&path).unwrap();
    assert_eq!(config.keys.temporary_normal, 'p');
    assert_eq!(config.keys.count_limit, 50);
    assert_eq!(
        config.indicator.search,
        IndicatorStyle::new("purple", "yellow")
    );
}

#[test]
fn test_load_config_from_directory_is_io_error() {
    let temp_dir = TempDir::new().unwrap();

    let result = load_config_from_path(temp_dir.path());
    assert!(matches!(result, Err(ModalKeysError::Io(_))));
}

#[test]
fn test_load_config_from_malformed_file_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "keys = 12").unwrap();

    let result = load_config_from_path(&path);
    assert!(matches!(result, Err(ModalKeysError::Config(_))));
}
