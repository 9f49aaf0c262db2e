//! Template catalog commands.

use crate::cli::common::{CliError, CliResult};
use crate::models::preset::ColumnPreset;
use crate::parser::config_json::render_text;
use crate::services::templates::{TemplateCatalog, TemplateEntry};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Browse built-in aircraft templates
#[derive(Debug, Clone, Args)]
pub struct TemplateArgs {
    /// Template subcommand
    #[command(subcommand)]
    pub command: TemplateCommand,
}

/// Template subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum TemplateCommand {
    /// List available templates
    List(ListArgs),
    /// Show one template's parameters
    Show(ShowArgs),
}

/// List available templates
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Show a template
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Template key (e.g., a320)
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Output the serialized configuration document
    #[arg(long)]
    pub json: bool,
}

/// Template summary for JSON output
#[derive(Debug, Clone, Serialize)]
struct TemplateInfo {
    key: &'static str,
    description: &'static str,
    row_count: u32,
    preset: &'static str,
    seats_per_row: usize,
}

/// Template list response
#[derive(Debug, Clone, Serialize)]
struct TemplateListResponse {
    templates: Vec<TemplateInfo>,
    count: usize,
}

impl From<&TemplateEntry> for TemplateInfo {
    fn from(entry: &TemplateEntry) -> Self {
        let params = entry.parameters();
        Self {
            key: entry.key,
            description: entry.description,
            row_count: entry.row_count,
            preset: params.preset().key(),
            seats_per_row: entry.seat_groups.iter().sum(),
        }
    }
}

impl TemplateArgs {
    /// Execute the template command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            TemplateCommand::List(args) => args.execute(),
            TemplateCommand::Show(args) => args.execute(),
        }
    }
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let templates: Vec<TemplateInfo> = TemplateCatalog::entries()
            .iter()
            .map(TemplateInfo::from)
            .collect();
        let count = templates.len();
        let response = TemplateListResponse { templates, count };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Available templates ({count}):\n");
            for template in &response.templates {
                println!(
                    "  {:<10} {} ({} rows, {}, {} seats per row)",
                    template.key,
                    template.description,
                    template.row_count,
                    template.preset,
                    template.seats_per_row
                );
            }
        }

        Ok(())
    }
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let entry = TemplateCatalog::entry(&self.key).ok_or_else(|| {
            CliError::validation(format!(
                "Template '{}' not found. Available: {}",
                self.key,
                TemplateCatalog::keys().join(", ")
            ))
        })?;
        let params = entry.parameters();

        if self.json {
            println!("{}", render_text(&params, true));
            return Ok(());
        }

        let preset = params.preset();
        println!("{} - {}", entry.key, entry.description);
        println!("  Rows:      {}", params.row_count);
        if preset == ColumnPreset::Custom {
            println!("  Columns:   custom ({:?})", entry.seat_groups);
        } else {
            println!("  Columns:   {} ({})", preset.display_name(), preset.key());
        }
        println!("  Skipped:   {}", join_rows(&params.skip_rows));
        println!("  Emergency: {}", join_rows(&params.emergency_rows));

        Ok(())
    }
}

/// Formats a row list for display, `-` when empty.
pub(crate) fn join_rows(rows: &[u32]) -> String {
    if rows.is_empty() {
        return "-".to_string();
    }
    rows.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
