//! Integration tests for opening, reconciling, and regenerating config.ini.
//!
//! These drive `Config` end-to-end against real files in a temporary
//! directory, with a `MockPathProbe` standing in for host detection.

use std::path::PathBuf;

use spicecfg::{Config, LoadOutcome, MockPathProbe, SynthesisWarning};

fn scratch() -> tempfile::TempDir {
    tempfile::tempdir().expect("tempdir")
}

// ── First run ─────────────────────────────────────────────────────────────────

#[test]
fn test_missing_file_in_missing_dir_is_generated_with_defaults() {
    // Arrange
    let dir = scratch();
    let path = dir.path().join("x").join("config.ini");

    // Act
    let (config, outcome) =
        Config::open_with_probe(&path, &MockPathProbe::nothing_found()).expect("open");

    // Assert
    let setting = config.section("Setting");
    assert_eq!(setting.get("spotify_path"), Some(""));
    assert_eq!(setting.get("prefs_path"), Some(""));
    assert_eq!(setting.get("current_theme"), Some("SpicetifyDefault"));
    assert_eq!(setting.get("inject_css"), Some("1"));
    assert_eq!(setting.get("replace_colors"), Some("1"));

    let on_disk = std::fs::read_to_string(&path).expect("file written");
    assert!(on_disk.contains("[Setting]"));
    assert!(on_disk.contains("current_theme = SpicetifyDefault"));
    assert!(on_disk.contains("; DO NOT CHANGE!\n[Backup]\nversion =\n"));

    match outcome {
        LoadOutcome::Created { warnings, .. } => assert_eq!(
            warnings,
            vec![
                SynthesisWarning::AppPathNotFound { hint: None },
                SynthesisWarning::PrefsPathNotFound
            ]
        ),
        other => panic!("expected Created, got {other:?}"),
    }
}

#[test]
fn test_detected_paths_land_in_setting_section() {
    let dir = scratch();
    let path = dir.path().join("config.ini");
    let probe = MockPathProbe::found("/opt/spotify", "/home/u/.config/spotify/prefs");

    let (config, outcome) = Config::open_with_probe(&path, &probe).expect("open");

    assert_eq!(config.section("Setting").get("spotify_path"), Some("/opt/spotify"));
    assert_eq!(
        config.section("Setting").get("prefs_path"),
        Some("/home/u/.config/spotify/prefs")
    );
    assert!(matches!(outcome, LoadOutcome::Created { ref warnings, .. } if warnings.is_empty()));
}

#[test]
fn test_malformed_file_is_replaced_with_defaults() {
    let dir = scratch();
    let path = dir.path().join("config.ini");
    std::fs::write(&path, "[Setting\ngarbage").unwrap();

    let (config, outcome) =
        Config::open_with_probe(&path, &MockPathProbe::nothing_found()).expect("open");

    assert!(matches!(outcome, LoadOutcome::Created { .. }));
    assert_eq!(config.section("Backup").comment(), Some("DO NOT CHANGE!"));
    assert!(std::fs::read_to_string(&path).unwrap().contains("[Backup]"));
}

// ── Existing file ─────────────────────────────────────────────────────────────

#[test]
fn test_partial_file_is_filled_in_and_rewritten() {
    // Arrange: an old config missing whole sections and keys
    let dir = scratch();
    let path = dir.path().join("config.ini");
    std::fs::write(
        &path,
        "[Setting]\nspotify_path = /usr/share/spotify\ncurrent_theme = Dribbblish\n\n[MyStuff]\nnote = hello\n",
    )
    .unwrap();

    // Act
    let (config, outcome) =
        Config::open_with_probe(&path, &MockPathProbe::found("/ignored", "/ignored")).expect("open");

    // Assert: user values untouched, schema keys added, probe not consulted
    let setting = config.section("Setting");
    assert_eq!(setting.get("spotify_path"), Some("/usr/share/spotify"));
    assert_eq!(setting.get("current_theme"), Some("Dribbblish"));
    assert_eq!(setting.get("prefs_path"), Some(""));
    assert_eq!(config.section("MyStuff").get("note"), Some("hello"));
    assert_eq!(config.section("Preprocesses").get("expose_apis"), Some("1"));

    let LoadOutcome::Updated(report) = outcome else {
        panic!("expected Updated");
    };
    assert_eq!(
        report.added_sections,
        vec!["Preprocesses".to_string(), "AdditionalOptions".to_string()]
    );

    let on_disk = std::fs::read_to_string(&path).unwrap();
    assert!(on_disk.contains("[MyStuff]\nnote = hello"));
    assert!(on_disk.contains("expose_apis = 1"));
}

#[test]
fn test_reopening_reconciled_file_changes_nothing() {
    let dir = scratch();
    let path = dir.path().join("config.ini");
    std::fs::write(&path, "[Setting]\ninject_css = 0\n").unwrap();
    Config::open_with_probe(&path, &MockPathProbe::nothing_found()).expect("first open");
    let after_first = std::fs::read_to_string(&path).unwrap();

    let (_, outcome) =
        Config::open_with_probe(&path, &MockPathProbe::nothing_found()).expect("second open");

    assert_eq!(outcome, LoadOutcome::Loaded);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), after_first);
}

#[test]
fn test_write_then_open_reproduces_document() {
    let dir = scratch();
    let path = dir.path().join("config.ini");
    let (mut config, _) =
        Config::open_with_probe(&path, &MockPathProbe::nothing_found()).expect("open");
    config
        .section_mut("AdditionalOptions")
        .set("extensions", "fullAppDisplay.js|shuffle+.js");
    config.document_mut().section_or_insert("Extra").set("k", " spaced ");
    config.write().expect("write");

    let (reloaded, outcome) =
        Config::open_with_probe(&path, &MockPathProbe::nothing_found()).expect("reopen");

    assert_eq!(outcome, LoadOutcome::Loaded);
    assert_eq!(reloaded.document(), config.document());
}

#[test]
fn test_write_to_unwritable_location_is_an_error() {
    let dir = scratch();
    // A regular file where a directory is expected makes create_dir_all fail.
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    let path: PathBuf = blocker.join("config.ini");

    let result = Config::open_with_probe(&path, &MockPathProbe::nothing_found());

    assert!(result.is_err());
}

#[test]
fn test_non_utf8_file_is_reconciled_not_regenerated() {
    // Arrange: a Latin-1 byte in a Windows path
    let dir = scratch();
    let path = dir.path().join("config.ini");
    std::fs::write(
        &path,
        b"[Setting]\ncurrent_theme = Dribbblish\nspotify_path = C:\\Users\\Ren\xe9\n\n[MyStuff]\nnote = keep\n",
    )
    .unwrap();

    // Act
    let (config, outcome) =
        Config::open_with_probe(&path, &MockPathProbe::nothing_found()).expect("open");

    // Assert
    assert!(matches!(outcome, LoadOutcome::Updated(_)));
    assert_eq!(config.section("Setting").get("current_theme"), Some("Dribbblish"));
    assert_eq!(config.section("MyStuff").get("note"), Some("keep"));
    let on_disk = std::fs::read_to_string(&path).expect("rewritten as UTF-8");
    assert!(on_disk.contains("[MyStuff]\nnote = keep"));
}

#[test]
fn test_header_with_trailing_comment_keeps_user_values() {
    let dir = scratch();
    let path = dir.path().join("config.ini");
    std::fs::write(&path, "[Setting] ; my settings\ncurrent_theme = Dribbblish\n").unwrap();

    let (config, outcome) =
        Config::open_with_probe(&path, &MockPathProbe::nothing_found()).expect("open");

    assert!(matches!(outcome, LoadOutcome::Updated(_)));
    assert_eq!(config.section("Setting").get("current_theme"), Some("Dribbblish"));
    assert_eq!(config.section("Setting").comment(), Some("my settings"));
}

#[test]
fn test_value_with_carriage_return_loads_and_writes_back() {
    let dir = scratch();
    let path = dir.path().join("config.ini");
    std::fs::write(&path, "[Setting]\ncurrent_theme = a\rb\n").unwrap();

    let (config, outcome) =
        Config::open_with_probe(&path, &MockPathProbe::nothing_found()).expect("open");

    assert!(matches!(outcome, LoadOutcome::Updated(_)));
    assert_eq!(config.section("Setting").get("current_theme"), Some("a\rb"));
}
