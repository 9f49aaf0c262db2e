//! Seat map generation command.

use crate::cli::common::{parse_row_list, CliError, CliResult};
use crate::config::Config;
use crate::editor::model::ConfigurationModel;
use crate::models::preset::ColumnPreset;
use crate::models::seat_map::{Cell, GeneratedRow};
use crate::parser::config_json::ConfigDocument;
use clap::Args;
use serde_json::json;

/// Generate a seat map from a template and parameter overrides
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Template key to start from (defaults to editor.default_template)
    #[arg(short, long, value_name = "KEY")]
    pub template: Option<String>,

    /// Override the row count
    #[arg(short, long, value_name = "N")]
    pub rows: Option<u32>,

    /// Override the column preset (3-3, 2-2, 2-1, 1-1)
    #[arg(short, long, value_name = "PRESET")]
    pub preset: Option<String>,

    /// Replace skipped rows (comma-separated, e.g. "13")
    #[arg(long, value_name = "ROWS")]
    pub skip: Option<String>,

    /// Replace emergency rows (comma-separated, e.g. "11,12")
    #[arg(long, value_name = "ROWS")]
    pub emergency: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let model = self.build_model()?;
        let configuration = model.current();
        let params = &configuration.parameters;
        let seat_map = &configuration.seat_map;

        if self.json {
            let output = json!({
                "configuration": ConfigDocument::from(params).to_value(),
                "preset": params.preset().key(),
                "seatCount": seat_map.seat_count(),
                "seatMap": seat_map,
            });
            println!("{output:#}");
            return Ok(());
        }

        let label = if params.aircraft_type.is_empty() {
            "custom"
        } else {
            params.aircraft_type.as_str()
        };
        println!(
            "{} - {} rows, {}, {} seats",
            label,
            seat_map.row_count(),
            params.preset().display_name(),
            seat_map.seat_count()
        );
        println!();
        println!(" Row    #  Seats");
        for row in &seat_map.rows {
            println!("{}", format_row(row));
        }

        Ok(())
    }

    fn build_model(&self) -> CliResult<ConfigurationModel> {
        let template = match &self.template {
            Some(key) => key.clone(),
            None => {
                Config::load()
                    .map_err(|e| CliError::io(format!("Failed to load config: {e}")))?
                    .editor
                    .default_template
            }
        };

        let mut model = ConfigurationModel::from_template(&template)?;

        if let Some(rows) = self.rows {
            // Replaced row lists are cleared before the row count can shrink.
            if self.skip.is_some() {
                clear_skip_rows(&mut model)?;
            }
            if self.emergency.is_some() {
                clear_emergency_rows(&mut model)?;
            }
            model.set_row_count(rows)?;
        }

        if let Some(preset) = &self.preset {
            let preset = ColumnPreset::from_key(preset).ok_or_else(|| {
                CliError::validation(format!(
                    "Unknown preset '{preset}'. Available: 3-3, 2-2, 2-1, 1-1"
                ))
            })?;
            model.set_column_preset(preset)?;
        }

        if let Some(skip) = &self.skip {
            clear_skip_rows(&mut model)?;
            for row in parse_row_list(skip)? {
                model.add_skip_row(row)?;
            }
        }

        if let Some(emergency) = &self.emergency {
            clear_emergency_rows(&mut model)?;
            for row in parse_row_list(emergency)? {
                model.add_emergency_row(row)?;
            }
        }

        Ok(model)
    }
}

fn clear_skip_rows(model: &mut ConfigurationModel) -> CliResult<()> {
    for row in model.parameters().skip_rows.clone() {
        model.remove_skip_row(row)?;
    }
    Ok(())
}

fn clear_emergency_rows(model: &mut ConfigurationModel) -> CliResult<()> {
    for row in model.parameters().emergency_rows.clone() {
        model.remove_emergency_row(row)?;
    }
    Ok(())
}

/// Formats one generated row as `  14   13  14A 14B | 14C 14D  EXIT`.
fn format_row(row: &GeneratedRow) -> String {
    let cells: Vec<&str> = row
        .cells
        .iter()
        .map(|cell| match cell {
            Cell::Seat { id, .. } => id.as_str(),
            Cell::Aisle => "|",
        })
        .collect();

    let mut line = format!("{:>4} {:>4}  {}", row.row_number, row.display_index, cells.join(" "));
    if row.is_emergency {
        line.push_str("  EXIT");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::column::pattern_from_groups;
    use crate::models::configuration::ConfigurationParameters;
    use crate::services::generator::generate_seat_map;

    #[test]
    fn test_format_row_marks_exit_and_aisle() {
        let params = ConfigurationParameters::new(15, pattern_from_groups(&[2, 2]))
            .with_skip_rows([13])
            .with_emergency_rows([14]);
        let map = generate_seat_map(&params);
        let line = format_row(map.row_by_number(14).unwrap());
        assert_eq!(line, "  14   13  14A 14B | 14C 14D  EXIT");
    }
}
