//! End-to-end tests for `cabinmap config` commands.

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_config_show_default_json() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "show", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["default_template"], "a320");
    assert_eq!(result["pretty_text"], true);
    assert!(result["store_dir"]
        .as_str()
        .unwrap()
        .ends_with("configurations"));
}

#[test]
fn test_config_set_persists() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(
        &["config", "set", "editor.default_template", "e190"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));
    assert!(config_dir.path().join("config.toml").exists());

    let output = isolated_command(&["generate", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["configuration"]["type"], "e190");
}

#[test]
fn test_config_set_rejects_unknown_key() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "set", "ui.theme", "dark"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(!config_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_path() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "path"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim().ends_with("config.toml"));
}
