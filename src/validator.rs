//! Validation of configuration parameters and parsed documents.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. row count within `1..=MAX_ROW_COUNT`
//! 2. skip and emergency rows within `1..=row_count` and duplicate-free
//! 3. column pattern: at least one seat, well-formed labels and positions,
//!    unique seat labels
//!
//! Parsed documents additionally go through [`validate_document`], which
//! rejects any top-level value that is not an object. Nothing is ever
//! corrected in place.

use std::collections::HashSet;

use serde::Serialize;

use crate::constants::MAX_ROW_COUNT;
use crate::models::column::ColumnKind;
use crate::models::configuration::ConfigurationParameters;

/// Which invariant a candidate violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// Row count is zero or above the supported bound
    RowCountOutOfRange,
    /// A skip or emergency row lies outside `1..=row_count`
    RowOutOfRange,
    /// A skip or emergency row is listed twice
    DuplicateRow,
    /// The column pattern has no seat columns
    NoSeats,
    /// A seat column has an empty label
    MissingSeatLabel,
    /// A seat label has leading or trailing whitespace
    UntrimmedSeatLabel,
    /// An aisle column carries a label
    AisleWithLabel,
    /// A column position is zero or repeated
    InvalidColumnPosition,
    /// Two seat columns share a label
    DuplicateSeatLabel,
    /// Serialized input is not an object at the top level
    NotAnObject,
    /// Serialized input is missing a field or has a field of the wrong type
    MalformedStructure,
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RowCountOutOfRange => write!(f, "Row count out of range"),
            Self::RowOutOfRange => write!(f, "Row out of range"),
            Self::DuplicateRow => write!(f, "Duplicate row"),
            Self::NoSeats => write!(f, "No seats"),
            Self::MissingSeatLabel => write!(f, "Missing seat label"),
            Self::UntrimmedSeatLabel => write!(f, "Untrimmed seat label"),
            Self::AisleWithLabel => write!(f, "Aisle with label"),
            Self::InvalidColumnPosition => write!(f, "Invalid column position"),
            Self::DuplicateSeatLabel => write!(f, "Duplicate seat label"),
            Self::NotAnObject => write!(f, "Not an object"),
            Self::MalformedStructure => write!(f, "Malformed structure"),
        }
    }
}

/// A rejected candidate, naming the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Violated invariant
    pub kind: ValidationErrorKind,
    /// Field path as it appears in the serialized form (e.g. `skipRows[2]`)
    pub field: String,
    /// Human-readable message
    pub message: String,
    /// Optional hint for fixing the input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(
        kind: ValidationErrorKind,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Sets a suggestion for fixing the error.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.field, self.kind, self.message)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n    → {suggestion}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Validates a candidate parameter set.
pub fn validate(candidate: &ConfigurationParameters) -> Result<(), ValidationError> {
    validate_row_count(candidate.row_count)?;
    validate_rows("skipRows", &candidate.skip_rows, candidate.row_count)?;
    validate_rows("emergencyRows", &candidate.emergency_rows, candidate.row_count)?;
    validate_columns(candidate)?;
    Ok(())
}

/// Rejects parsed documents whose top-level value is not an object.
pub fn validate_document(value: &serde_json::Value) -> Result<(), ValidationError> {
    if value.is_object() {
        return Ok(());
    }

    let found = match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    };

    Err(ValidationError::new(
        ValidationErrorKind::NotAnObject,
        "$",
        format!("Expected a configuration object, found {found}"),
    )
    .with_suggestion("Wrap the configuration in { ... } with rowCount and columnConfig fields"))
}

fn validate_row_count(row_count: u32) -> Result<(), ValidationError> {
    if row_count == 0 || row_count > MAX_ROW_COUNT {
        return Err(ValidationError::new(
            ValidationErrorKind::RowCountOutOfRange,
            "rowCount",
            format!("Row count must be between 1 and {MAX_ROW_COUNT}, got {row_count}"),
        ));
    }
    Ok(())
}

fn validate_rows(field: &str, rows: &[u32], row_count: u32) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();

    for (idx, &row) in rows.iter().enumerate() {
        if row == 0 || row > row_count {
            return Err(ValidationError::new(
                ValidationErrorKind::RowOutOfRange,
                format!("{field}[{idx}]"),
                format!("Row {row} is outside the cabin (rows 1-{row_count})"),
            ));
        }
        if !seen.insert(row) {
            return Err(ValidationError::new(
                ValidationErrorKind::DuplicateRow,
                format!("{field}[{idx}]"),
                format!("Row {row} is listed more than once"),
            ));
        }
    }

    Ok(())
}

fn validate_columns(candidate: &ConfigurationParameters) -> Result<(), ValidationError> {
    let pattern = &candidate.column_pattern;

    if !pattern.iter().any(|c| c.kind == ColumnKind::Seat) {
        return Err(ValidationError::new(
            ValidationErrorKind::NoSeats,
            "columnConfig",
            "Column pattern must contain at least one seat",
        )
        .with_suggestion("Pick a preset such as 3-3 or add a column with type \"seat\""));
    }

    let mut positions = HashSet::new();
    let mut labels = HashSet::new();

    for (idx, column) in pattern.iter().enumerate() {
        if column.position == 0 || !positions.insert(column.position) {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidColumnPosition,
                format!("columnConfig[{idx}].id"),
                format!(
                    "Column position {} must be positive and unique",
                    column.position
                ),
            ));
        }

        match column.kind {
            ColumnKind::Seat => {
                if column.label.trim().is_empty() {
                    return Err(ValidationError::new(
                        ValidationErrorKind::MissingSeatLabel,
                        format!("columnConfig[{idx}].label"),
                        format!("Seat column {} has no label", column.position),
                    ));
                }
                if column.label.trim() != column.label {
                    return Err(ValidationError::new(
                        ValidationErrorKind::UntrimmedSeatLabel,
                        format!("columnConfig[{idx}].label"),
                        format!(
                            "Seat label '{}' has leading or trailing whitespace",
                            column.label
                        ),
                    )
                    .with_suggestion(format!("Use '{}'", column.label.trim())));
                }
                if !labels.insert(column.label.as_str()) {
                    return Err(ValidationError::new(
                        ValidationErrorKind::DuplicateSeatLabel,
                        format!("columnConfig[{idx}].label"),
                        format!("Seat label '{}' is used more than once", column.label),
                    ));
                }
            }
            ColumnKind::Aisle => {
                if !column.label.is_empty() {
                    return Err(ValidationError::new(
                        ValidationErrorKind::AisleWithLabel,
                        format!("columnConfig[{idx}].label"),
                        format!(
                            "Aisle column {} must not have a label, got '{}'",
                            column.position, column.label
                        ),
                    ));
                }
            }
        }
    }

    Ok(())
}
