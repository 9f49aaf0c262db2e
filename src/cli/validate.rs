//! Validation command for serialized configuration documents.

use crate::cli::common::{CliError, CliResult};
use crate::error::ConfigError;
use crate::models::configuration::ConfigurationParameters;
use crate::parser::config_json::parse_text;
use crate::services::generator::generate_seat_map;
use crate::validator::validate;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Validate a serialized configuration file
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to the configuration document (JSON or JSON5)
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Validation result for JSON output
#[derive(Debug, Clone, Serialize)]
struct ValidationResponse {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ValidationFailure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ValidationSummary>,
}

#[derive(Debug, Clone, Serialize)]
struct ValidationFailure {
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
    message: String,
}

#[derive(Debug, Clone, Serialize)]
struct ValidationSummary {
    preset: &'static str,
    generated_rows: usize,
    seat_count: usize,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let content = std::fs::read_to_string(&self.file).map_err(|e| {
            CliError::io(format!("Failed to read {}: {e}", self.file.display()))
        })?;

        let response = match check(&content) {
            Ok(params) => {
                let seat_map = generate_seat_map(&params);
                ValidationResponse {
                    valid: true,
                    error: None,
                    summary: Some(ValidationSummary {
                        preset: params.preset().key(),
                        generated_rows: seat_map.row_count(),
                        seat_count: seat_map.seat_count(),
                    }),
                }
            }
            Err(err) => ValidationResponse {
                valid: false,
                error: Some(failure_from(&err)),
                summary: None,
            },
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if let Some(summary) = &response.summary {
            println!("✓ Validation passed");
            println!("  Preset:         {}", summary.preset);
            println!("  Generated rows: {}", summary.generated_rows);
            println!("  Seats:          {}", summary.seat_count);
        } else if let Some(error) = &response.error {
            println!("✗ Validation failed");
            match &error.field {
                Some(field) => println!("  [{field}] {}", error.message),
                None => println!("  {}", error.message),
            }
        }

        if !response.valid {
            return Err(CliError::validation("Validation failed"));
        }
        Ok(())
    }
}

fn check(content: &str) -> Result<ConfigurationParameters, ConfigError> {
    let params = parse_text(content)?;
    validate(&params)?;
    Ok(params)
}

fn failure_from(err: &ConfigError) -> ValidationFailure {
    match err {
        ConfigError::ValidationFailed(detail) => ValidationFailure {
            kind: serde_json::to_value(detail.kind)
                .ok()
                .and_then(|v| v.as_str().map(String::from))
                .unwrap_or_else(|| detail.kind.to_string()),
            field: Some(detail.field.clone()),
            message: detail.message.clone(),
        },
        ConfigError::ParseFailed(message) => ValidationFailure {
            kind: "parse_failed".to_string(),
            field: None,
            message: message.clone(),
        },
        other => ValidationFailure {
            kind: "other".to_string(),
            field: None,
            message: other.to_string(),
        },
    }
}
