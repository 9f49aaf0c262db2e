//! Serialized-text form of a configuration.
//!
//! The text form is a human-editable object:
//!
//! ```json
//! {
//!   "type": "a320",
//!   "rowCount": 30,
//!   "columnConfig": [{ "id": 1, "label": "A", "type": "seat" }, ...],
//!   "skipRows": [],
//!   "emergencyRows": [11, 12]
//! }
//! ```
//!
//! Rendering uses `serde_json`. Parsing goes through `json5`, so hand-edited
//! text may carry comments, trailing commas and unquoted keys.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{ConfigError, ConfigResult};
use crate::models::column::{ColumnDescriptor, ColumnKind};
use crate::models::configuration::ConfigurationParameters;
use crate::validator::{validate_document, ValidationError, ValidationErrorKind};

/// One entry of `columnConfig`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnEntry {
    /// 1-based column position
    pub id: i64,
    /// Seat letter, empty for aisles
    #[serde(default)]
    pub label: String,
    /// "seat" or "aisle"
    #[serde(rename = "type")]
    pub kind: ColumnKind,
}

/// Wire structure of the serialized configuration.
///
/// Numbers are signed so that negative values reach validation and are
/// reported against their field instead of failing the parse. Unknown keys
/// are rejected so a misspelled field is never dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigDocument {
    /// Aircraft type key (empty for custom)
    #[serde(rename = "type", default)]
    pub aircraft_type: String,
    /// Number of cabin rows
    pub row_count: i64,
    /// Column slots in order
    pub column_config: Vec<ColumnEntry>,
    /// Skipped row numbers
    #[serde(default)]
    pub skip_rows: Vec<i64>,
    /// Emergency-exit row numbers
    #[serde(default)]
    pub emergency_rows: Vec<i64>,
}

impl ConfigDocument {
    /// Builds the JSON value for this document.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let columns: Vec<Value> = self
            .column_config
            .iter()
            .map(|column| {
                json!({
                    "id": column.id,
                    "label": column.label,
                    "type": column.kind.as_str(),
                })
            })
            .collect();

        json!({
            "type": self.aircraft_type,
            "rowCount": self.row_count,
            "columnConfig": columns,
            "skipRows": self.skip_rows,
            "emergencyRows": self.emergency_rows,
        })
    }
}

impl From<&ConfigurationParameters> for ConfigDocument {
    fn from(params: &ConfigurationParameters) -> Self {
        Self {
            aircraft_type: params.aircraft_type.clone(),
            row_count: i64::from(params.row_count),
            column_config: params
                .column_pattern
                .iter()
                .map(|column| ColumnEntry {
                    id: i64::from(column.position),
                    label: column.label.clone(),
                    kind: column.kind,
                })
                .collect(),
            skip_rows: params.skip_rows.iter().copied().map(i64::from).collect(),
            emergency_rows: params.emergency_rows.iter().copied().map(i64::from).collect(),
        }
    }
}

impl TryFrom<ConfigDocument> for ConfigurationParameters {
    type Error = ValidationError;

    fn try_from(doc: ConfigDocument) -> Result<Self, Self::Error> {
        let row_count = u32::try_from(doc.row_count).map_err(|_| {
            ValidationError::new(
                ValidationErrorKind::RowCountOutOfRange,
                "rowCount",
                format!("Row count must be a positive integer, got {}", doc.row_count),
            )
        })?;

        let skip_rows = convert_rows("skipRows", &doc.skip_rows)?;
        let emergency_rows = convert_rows("emergencyRows", &doc.emergency_rows)?;

        let column_pattern = doc
            .column_config
            .into_iter()
            .enumerate()
            .map(|(idx, column)| {
                let position = u32::try_from(column.id).map_err(|_| {
                    ValidationError::new(
                        ValidationErrorKind::InvalidColumnPosition,
                        format!("columnConfig[{idx}].id"),
                        format!("Column id must be a positive integer, got {}", column.id),
                    )
                })?;
                Ok(ColumnDescriptor {
                    position,
                    label: column.label,
                    kind: column.kind,
                })
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        Ok(Self {
            aircraft_type: doc.aircraft_type,
            row_count,
            column_pattern,
            skip_rows,
            emergency_rows,
        })
    }
}

fn convert_rows(field: &str, rows: &[i64]) -> Result<Vec<u32>, ValidationError> {
    rows.iter()
        .enumerate()
        .map(|(idx, &row)| {
            u32::try_from(row).map_err(|_| {
                ValidationError::new(
                    ValidationErrorKind::RowOutOfRange,
                    format!("{field}[{idx}]"),
                    format!("Row {row} is not a valid row number"),
                )
            })
        })
        .collect()
}

/// Renders parameters into the serialized text form.
#[must_use]
pub fn render_text(params: &ConfigurationParameters, pretty: bool) -> String {
    let value = ConfigDocument::from(params).to_value();
    if pretty {
        format!("{value:#}")
    } else {
        value.to_string()
    }
}

/// Parses serialized text into a document, without semantic validation.
///
/// Text that is not well-formed is a `ParseFailed`; a non-object top level or
/// a field of the wrong shape is a `ValidationFailed`.
pub fn parse_document(text: &str) -> ConfigResult<ConfigDocument> {
    let value: Value =
        json5::from_str(text).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;

    validate_document(&value)?;

    serde_json::from_value(value).map_err(|e| {
        ConfigError::ValidationFailed(ValidationError::new(
            ValidationErrorKind::MalformedStructure,
            "$",
            e.to_string(),
        ))
    })
}

/// Parses serialized text into parameters.
///
/// The result still has to pass [`crate::validator::validate`] before it may
/// be committed.
pub fn parse_text(text: &str) -> ConfigResult<ConfigurationParameters> {
    let doc = parse_document(text)?;
    Ok(ConfigurationParameters::try_from(doc)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::column::pattern_from_groups;
    use crate::services::templates::TemplateCatalog;

    #[test]
    fn test_round_trip_templates() {
        for key in TemplateCatalog::keys() {
            let params = TemplateCatalog::lookup(key).unwrap();
            for pretty in [true, false] {
                let text = render_text(&params, pretty);
                assert_eq!(parse_text(&text).unwrap(), params, "template {key}");
            }
        }
    }

    #[test]
    fn test_render_uses_wire_field_names() {
        let params = ConfigurationParameters::new(2, pattern_from_groups(&[1, 1]))
            .with_aircraft_type("dhc6")
            .with_emergency_rows([2]);
        let value: Value = serde_json::from_str(&render_text(&params, false)).unwrap();
        assert_eq!(value["type"], "dhc6");
        assert_eq!(value["rowCount"], 2);
        assert_eq!(value["columnConfig"][1]["type"], "aisle");
        assert_eq!(value["columnConfig"][1]["label"], "");
        assert_eq!(value["columnConfig"][2]["id"], 3);
        assert_eq!(value["emergencyRows"], json!([2]));
        assert_eq!(value["skipRows"], json!([]));
    }

    #[test]
    fn test_parse_accepts_json5() {
        let text = r#"{
            // hand edited
            type: 'e190',
            rowCount: 4,
            columnConfig: [
                { id: 1, label: 'A', type: 'seat' },
                { id: 2, type: 'aisle' },
                { id: 3, label: 'B', type: 'seat' },
            ],
        }"#;
        let params = parse_text(text).unwrap();
        assert_eq!(params.row_count, 4);
        assert_eq!(params.column_pattern.len(), 3);
        assert!(params.skip_rows.is_empty());
    }

    #[test]
    fn test_parse_incomplete_text_is_parse_failure() {
        let err = parse_text("{ \"rowCount\": 12, ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailed(_)));
    }

    #[test]
    fn test_parse_array_is_validation_failure() {
        let err = parse_text("[1, 2, 3]").unwrap_err();
        assert_eq!(err.validation().unwrap().kind, ValidationErrorKind::NotAnObject);
    }

    #[test]
    fn test_parse_missing_field_is_malformed() {
        let err = parse_text("{ \"rowCount\": 12 }").unwrap_err();
        let detail = err.validation().unwrap();
        assert_eq!(detail.kind, ValidationErrorKind::MalformedStructure);
        assert!(detail.message.contains("columnConfig"));
    }

    #[test]
    fn test_parse_misspelled_field_is_malformed() {
        let text = r#"{ "rowCount": 15, "columnConfig": [{ "id": 1, "label": "A", "type": "seat" }], "skiprows": [13] }"#;
        let err = parse_text(text).unwrap_err();
        let detail = err.validation().unwrap();
        assert_eq!(detail.kind, ValidationErrorKind::MalformedStructure);
        assert!(detail.message.contains("skiprows"));
    }

    #[test]
    fn test_parse_unknown_column_key_is_malformed() {
        let text = r#"{ "rowCount": 3, "columnConfig": [{ "id": 1, "lable": "A", "type": "seat" }] }"#;
        let err = parse_text(text).unwrap_err();
        let detail = err.validation().unwrap();
        assert_eq!(detail.kind, ValidationErrorKind::MalformedStructure);
        assert!(detail.message.contains("lable"));
    }

    #[test]
    fn test_parse_negative_row_count_names_field() {
        let text = r#"{ "rowCount": -3, "columnConfig": [{ "id": 1, "label": "A", "type": "seat" }] }"#;
        let err = parse_text(text).unwrap_err();
        let detail = err.validation().unwrap();
        assert_eq!(detail.kind, ValidationErrorKind::RowCountOutOfRange);
        assert_eq!(detail.field, "rowCount");
    }

    #[test]
    fn test_parse_unknown_column_type_is_malformed() {
        let text = r#"{ "rowCount": 3, "columnConfig": [{ "id": 1, "label": "A", "type": "bench" }] }"#;
        let err = parse_text(text).unwrap_err();
        assert_eq!(
            err.validation().unwrap().kind,
            ValidationErrorKind::MalformedStructure
        );
    }

    #[test]
    fn test_parse_keeps_duplicates_for_validation() {
        let text = r#"{ "rowCount": 9, "columnConfig": [{ "id": 1, "label": "A", "type": "seat" }], "skipRows": [4, 4] }"#;
        let params = parse_text(text).unwrap();
        assert_eq!(params.skip_rows, vec![4, 4]);
    }
}
