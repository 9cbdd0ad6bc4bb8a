use crate::config::{FatConfig, DEFAULT_BANNER, DEFAULT_LABEL};
use crate::error::FatError;
use crate::factorial::Overflow;
use std::io::Write;
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = FatConfig::default();
    assert_eq!(config.value, 10);
    assert_eq!(config.banner, DEFAULT_BANNER);
    assert_eq!(config.label, DEFAULT_LABEL);
    assert_eq!(config.prompt(), None);
    assert_eq!(config.overflow, Overflow::Checked);
}

#[test]
fn test_partial_file() {
    let file = config_file(r#"{ "value": 7, "overflow": "wrapping", "prompt": "> " }"#);
    let config = FatConfig::from_file(file.path()).unwrap();
    assert_eq!(config.value, 7);
    assert_eq!(config.overflow, Overflow::Wrapping);
    assert_eq!(config.prompt(), Some("> "));
    assert_eq!(config.banner, DEFAULT_BANNER);
}

#[test]
fn test_explicit_path_wins() {
    let file = config_file(r#"{ "label": "Result:" }"#);
    let config = FatConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.label, "Result:");
    assert_eq!(config.value, 10);
}

#[test]
fn test_invalid_json() {
    let file = config_file("{ value: ");
    let err = FatConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, FatError::Config { .. }));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = FatConfig::from_file(&dir.path().join("none.json")).unwrap_err();
    assert!(matches!(err, FatError::ConfigRead { .. }));
}

#[test]
fn test_load_without_path_uses_defaults() {
    let config = FatConfig::load(None).unwrap();
    assert_eq!(config, FatConfig::default());
}
