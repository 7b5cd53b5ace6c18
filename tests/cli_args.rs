//! Tests for CLI argument handling against the built binary.
//!
//! Only paths that exit before the terminal UI starts are covered.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn playprefs_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_playprefs"));
    cmd.env_remove("PLAYPREFS_LOG");
    cmd
}

#[test]
fn test_help_lists_options() {
    let output = playprefs_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--print-config"));
}

#[test]
fn test_print_config_shows_effective_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[preferences]\nseek_time_seconds = 45\n").unwrap();

    let output = playprefs_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--print-config")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("seek_time_seconds = 45"));
    assert!(stdout.contains("auto_rewind_seconds = 2"));
    assert!(stdout.contains("tick_rate_ms = 250"));
}

#[test]
fn test_print_config_with_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let output = playprefs_cmd()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("--print-config")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("seek_time_seconds = 20"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[preferences\n").unwrap();

    let output = playprefs_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--print-config")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config file"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    let output = playprefs_cmd()
        .arg("--no-such-flag")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--no-such-flag"));
}
