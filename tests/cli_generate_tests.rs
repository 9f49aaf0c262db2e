//! End-to-end tests for `cabinmap generate`.

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_generate_template_plain_output() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["generate", "--template", "a320"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("a320 - 30 rows"));
    assert!(stdout.contains("180 seats"));
    assert!(stdout.contains("   1    1  1A 1B 1C | 1D 1E 1F"));
    assert!(stdout.contains("  11   11  11A 11B 11C | 11D 11E 11F  EXIT"));
}

#[test]
fn test_generate_scenario_b_json() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(
        &[
            "generate",
            "--template",
            "a320",
            "--rows",
            "15",
            "--preset",
            "2-2",
            "--skip",
            "13",
            "--emergency",
            "8",
            "--json",
        ],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(result["preset"], "2-2");
    assert_eq!(result["seatCount"], 14 * 4);

    let rows = result["seatMap"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 14);
    assert!(rows.iter().all(|r| r["rowNumber"] != 13));

    let row14 = rows.iter().find(|r| r["rowNumber"] == 14).unwrap();
    assert_eq!(row14["displayIndex"], 13);
    assert_eq!(row14["cells"][0]["id"], "14A");
    assert_eq!(row14["cells"][2]["type"], "aisle");

    let row8 = rows.iter().find(|r| r["rowNumber"] == 8).unwrap();
    assert_eq!(row8["isEmergency"], true);
}

#[test]
fn test_generate_unknown_template_uses_defaults() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(
        &["generate", "--template", "unknown-xyz", "--json"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["configuration"]["rowCount"], 30);
    assert_eq!(result["preset"], "3-3");
    assert_eq!(result["configuration"]["emergencyRows"], serde_json::json!([]));
}

#[test]
fn test_generate_rejects_out_of_range_skip() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(
        &["generate", "--template", "e190", "--skip", "40"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("skipRows"), "stderr: {stderr}");
}

#[test]
fn test_generate_rejects_zero_rows() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["generate", "--rows", "0"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_generate_rejects_unknown_preset() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["generate", "--preset", "4-4"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
}
