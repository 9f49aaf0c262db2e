//! End-to-end tests for `cabinmap validate`.

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

fn run_validate(path: &std::path::Path, json: bool) -> std::process::Output {
    let config_dir = TempDir::new().unwrap();
    let path = path.to_str().unwrap();
    let mut args = vec!["validate", "--file", path];
    if json {
        args.push("--json");
    }
    isolated_command(&args, config_dir.path())
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_validate_valid_document() {
    let (path, _temp_dir) = write_temp_document(VALID_DOCUMENT);
    let output = run_validate(&path, false);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Validation passed"));
    assert!(stdout.contains("2-2"));
}

#[test]
fn test_validate_valid_document_json() {
    let (path, _temp_dir) = write_temp_document(VALID_DOCUMENT);
    let output = run_validate(&path, true);

    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["valid"], true);
    assert_eq!(result["summary"]["generated_rows"], 24);
    assert_eq!(result["summary"]["seat_count"], 96);
}

#[test]
fn test_validate_duplicate_label_json() {
    let document = VALID_DOCUMENT.replace(r#""label": "D""#, r#""label": "A""#);
    let (path, _temp_dir) = write_temp_document(&document);
    let output = run_validate(&path, true);

    assert_eq!(output.status.code(), Some(1));
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["valid"], false);
    assert_eq!(result["error"]["kind"], "duplicate_seat_label");
    assert_eq!(result["error"]["field"], "columnConfig[4].label");
}

#[test]
fn test_validate_non_object_document() {
    let (path, _temp_dir) = write_temp_document("\"just a string\"");
    let output = run_validate(&path, true);

    assert_eq!(output.status.code(), Some(1));
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["error"]["kind"], "not_an_object");
}

#[test]
fn test_validate_malformed_text() {
    let (path, _temp_dir) = write_temp_document("{ \"rowCount\": ");
    let output = run_validate(&path, true);

    assert_eq!(output.status.code(), Some(1));
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["error"]["kind"], "parse_failed");
}

#[test]
fn test_validate_missing_file() {
    let output = run_validate(std::path::Path::new("/nonexistent/cabin.json"), false);
    assert_eq!(output.status.code(), Some(2));
}
