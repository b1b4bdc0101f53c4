// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Pawhaven Contributors

//! Integration tests for settings loading and saving

use pawhaven::config::Settings;
use pawhaven::theme::Theme;

#[test]
fn test_settings_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut settings = Settings::default();
    settings.appearance.theme = "mono".to_string();
    settings.listing.columns = 3;
    settings.listing.show_backdrop = false;
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("dir").join("settings.json");

    Settings::default().save_to(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_load_missing_file_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_load_corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{not json").unwrap();

    let err = Settings::load_from(&path).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Configuration error"), "got: {msg}");
    assert!(msg.contains("settings.json"), "got: {msg}");
}

#[test]
fn test_unknown_keys_are_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{"appearance": {"theme": "mono", "font": "hack"}, "future_section": 1}"#,
    )
    .unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.appearance.theme, "mono");
}

#[test]
fn test_saved_theme_resolves() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut settings = Settings::default();
    settings.appearance.theme = "mono".to_string();
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(Theme::named(&loaded.appearance.theme), Theme::mono());
}
