//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the config file location
    Path,
    /// Set a configuration value
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set a configuration value
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Dotted key (paths.store_dir, editor.default_template, editor.pretty_text)
    #[arg(value_name = "KEY")]
    key: String,

    /// New value
    #[arg(value_name = "VALUE")]
    value: String,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    store_dir: String,
    default_template: String,
    pretty_text: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
                println!("{}", path.display());
                Ok(())
            }
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config =
            Config::load().map_err(|e| CliError::io(format!("Failed to load config: {e}")))?;

        let output = ConfigOutput {
            config_file: Config::config_file_path()
                .map(|p| p.display().to_string())
                .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?,
            store_dir: config
                .store_dir()
                .map(|p| p.display().to_string())
                .map_err(|e| CliError::io(format!("Failed to resolve store directory: {e}")))?,
            default_template: config.editor.default_template.clone(),
            pretty_text: config.editor.pretty_text,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&output)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Configuration ({}):", output.config_file);
            println!("  Store directory:  {}", output.store_dir);
            println!("  Default template: {}", output.default_template);
            println!("  Pretty text:      {}", output.pretty_text);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        let mut config =
            Config::load().map_err(|e| CliError::io(format!("Failed to load config: {e}")))?;

        config
            .set(&self.key, &self.value)
            .map_err(|e| CliError::validation(e.to_string()))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save config: {e}")))?;

        println!("✓ {} = {}", self.key, self.value);
        Ok(())
    }
}
