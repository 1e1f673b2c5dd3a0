//! Integration tests for Settings loading from an explicit config file.
//!
//! Note: These tests run without a global config and without KINSHIP_* env
//! vars, so they exercise the explicit-file layer on top of defaults.

use std::fs;

use tempfile::TempDir;

use kinship::application::ApplicationError;
use kinship::config::Settings;
use kinship::domain::DuplicatePolicy;

#[test]
fn given_no_config_file_when_load_then_defaults() {
    let settings = Settings::load(None).expect("load settings");
    assert_eq!(settings.duplicates, DuplicatePolicy::Reject);
    assert!(settings.ordinals);
}

#[test]
fn given_config_file_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kinship.toml");
    fs::write(
        &path,
        r#"
family_file = "families/royal.toml"
duplicates = "replace"
ordinals = false
"#,
    )
    .unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.duplicates, DuplicatePolicy::Replace);
    assert!(!settings.ordinals);
    // relative family_file is resolved against the config file's directory
    assert_eq!(
        settings.family_file,
        Some(dir.path().join("families/royal.toml"))
    );
}

#[test]
fn given_partial_config_file_when_load_then_keeps_unspecified_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kinship.toml");
    fs::write(&path, "ordinals = false\n").unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert!(!settings.ordinals);
    assert_eq!(settings.duplicates, DuplicatePolicy::Reject);
    assert_eq!(settings.family_file, None);
}

#[test]
fn given_unknown_policy_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kinship.toml");
    fs::write(&path, "duplicates = \"merge\"\n").unwrap();

    let err = Settings::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ApplicationError::Config { .. }));
}

#[test]
fn given_missing_config_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let err = Settings::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, ApplicationError::Config { .. }));
}
