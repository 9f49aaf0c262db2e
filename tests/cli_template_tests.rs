//! End-to-end tests for `cabinmap template` commands.

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_template_list_json_structure() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["template", "list", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let templates = result["templates"].as_array().unwrap();
    assert_eq!(result["count"].as_u64().unwrap() as usize, templates.len());

    for template in templates {
        assert!(template["key"].is_string());
        assert!(template["description"].is_string());
        assert!(template["row_count"].is_number());
        assert!(template["preset"].is_string());
    }

    let a320 = templates.iter().find(|t| t["key"] == "a320").unwrap();
    assert_eq!(a320["preset"], "3-3");
    let widebody = templates.iter().find(|t| t["key"] == "a330-300").unwrap();
    assert_eq!(widebody["preset"], "custom");
}

#[test]
fn test_template_show_json_is_a_valid_document() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["template", "show", "atr72", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let text = String::from_utf8_lossy(&output.stdout);
    let params = cabinmap::parser::parse_text(&text).unwrap();
    assert!(cabinmap::validator::validate(&params).is_ok());
    assert_eq!(params.aircraft_type, "atr72");
    assert_eq!(params.skip_rows, vec![13]);
}

#[test]
fn test_template_show_unknown() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["template", "show", "concorde"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("a320"), "should list available templates");
}
