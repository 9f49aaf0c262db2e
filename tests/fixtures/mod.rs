//! Shared test fixtures for library and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use cabinmap::models::{pattern_from_groups, ColumnDescriptor, ConfigurationParameters};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Path to the cabinmap binary
pub fn cabinmap_bin() -> &'static str {
    env!("CARGO_BIN_EXE_cabinmap")
}

/// Creates a Command with an isolated config directory.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(cabinmap_bin());
    cmd.env("CABINMAP_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Scenario A parameters: 30 rows, three-three, exits at 11 and 12.
pub fn scenario_a() -> ConfigurationParameters {
    ConfigurationParameters::new(30, pattern_from_groups(&[3, 3])).with_emergency_rows([11, 12])
}

/// Scenario B parameters: 15 rows, two-two, row 13 skipped, exit at 8.
pub fn scenario_b() -> ConfigurationParameters {
    ConfigurationParameters::new(15, pattern_from_groups(&[2, 2]))
        .with_skip_rows([13])
        .with_emergency_rows([8])
}

/// A custom 1-2 regional pattern that no preset matches.
pub fn custom_one_two() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::seat(1, "A"),
        ColumnDescriptor::aisle(2),
        ColumnDescriptor::seat(3, "C"),
        ColumnDescriptor::seat(4, "D"),
    ]
}

/// Writes a document into a fresh temp directory.
///
/// Returns the file path and the TempDir (keep it alive for the test).
pub fn write_temp_document(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("cabin.json");
    fs::write(&path, content).expect("Failed to write document");
    (path, temp_dir)
}

/// A valid serialized document for an E190-like cabin.
pub const VALID_DOCUMENT: &str = r#"{
  "type": "e190",
  "rowCount": 25,
  "columnConfig": [
    { "id": 1, "label": "A", "type": "seat" },
    { "id": 2, "label": "B", "type": "seat" },
    { "id": 3, "label": "", "type": "aisle" },
    { "id": 4, "label": "C", "type": "seat" },
    { "id": 5, "label": "D", "type": "seat" }
  ],
  "skipRows": [13],
  "emergencyRows": [10]
}"#;
