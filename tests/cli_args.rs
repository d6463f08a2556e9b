//! Tests for CLI argument parsing against the built binary.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn custom_lock_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_custom-lock"))
}

#[test]
fn test_help_shows_options() {
    let output = custom_lock_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--console"));
    assert!(stdout.contains("--config"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[quote]\ntimeout_ms = 0\n").unwrap();

    let output = custom_lock_cmd()
        .arg("--console")
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("timeout_ms"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    let output = custom_lock_cmd()
        .arg("--no-such-flag")
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
}
