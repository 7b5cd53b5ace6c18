use playprefs::config::{save_preferences, Config, ConfigError, Preferences};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert!(config.ui.allow_theme_override);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert!(config.links.support.is_none());

    let prefs = &config.preferences;
    assert!(!prefs.dark_theme);
    assert!(prefs.grid);
    assert_eq!(prefs.seek_time_seconds, 20);
    assert_eq!(prefs.auto_rewind_seconds, 2);
    assert!(!prefs.auto_sleep.enabled);
    assert_eq!(prefs.auto_sleep.start_time, "22:00");
    assert_eq!(prefs.auto_sleep.end_time, "06:00");
    assert_eq!(prefs.auto_sleep.duration_minutes, 20);
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("playprefs/config.toml"));
}

#[test]
fn test_validation_passes_for_default() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_uses_field_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[links]
support = "https://example.org/help"

[preferences]
seek_time_seconds = 30

[preferences.auto_sleep]
enabled = true
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.links.support.as_deref(), Some("https://example.org/help"));
    assert_eq!(config.preferences.seek_time_seconds, 30);
    assert_eq!(config.preferences.auto_rewind_seconds, 2);
    assert!(config.preferences.auto_sleep.enabled);
    assert_eq!(config.preferences.auto_sleep.start_time, "22:00");
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[preferences\nseek_time_seconds = ").unwrap();

    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_out_of_range_seek_fails_validation() {
    let mut config = Config::default();
    config.preferences.seek_time_seconds = 600;

    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("seek_time_seconds"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_bad_auto_sleep_window_fails_validation() {
    let mut config = Config::default();
    config.preferences.auto_sleep.end_time = "25:00".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_zero_tick_rate_fails_validation() {
    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_save_preserves_other_tables() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[ui]
allow_theme_override = false

[links]
bug_report = "https://example.org/bugs"
"#,
    )
    .unwrap();

    let prefs = Preferences {
        grid: false,
        seek_time_seconds: 45,
        ..Preferences::default()
    };
    save_preferences(&path, &prefs).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!(!config.ui.allow_theme_override);
    assert_eq!(config.links.bug_report.as_deref(), Some("https://example.org/bugs"));
    assert_eq!(config.preferences, prefs);
}

#[test]
fn test_save_creates_missing_file_and_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    save_preferences(&path, &Preferences::default()).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_save_refuses_to_overwrite_unparseable_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "not = [valid").unwrap();

    let result = save_preferences(&path, &Preferences::default());
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    assert_eq!(fs::read_to_string(&path).unwrap(), "not = [valid");
}
