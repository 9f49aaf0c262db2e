//! Named configuration storage commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::editor::session::EditorSession;
use crate::services::store::{ConfigurationStore, FileStore};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Save, list, load and delete named configurations
#[derive(Debug, Clone, Args)]
pub struct StoreArgs {
    /// Store subcommand
    #[command(subcommand)]
    pub command: StoreCommand,
}

/// Store subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum StoreCommand {
    /// List saved configurations
    List(ListArgs),
    /// Validate a configuration document and save it under a name
    Save(SaveArgs),
    /// Print or write a saved configuration
    Load(LoadArgs),
    /// Delete a saved configuration
    Delete(DeleteArgs),
}

/// List saved configurations
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Save a configuration document
#[derive(Debug, Clone, Args)]
pub struct SaveArgs {
    /// Configuration document to save
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Name to save under
    #[arg(short, long, value_name = "NAME")]
    pub name: String,
}

/// Load a saved configuration
#[derive(Debug, Clone, Args)]
pub struct LoadArgs {
    /// Saved configuration name
    #[arg(short, long, value_name = "NAME")]
    pub name: String,

    /// Write the document to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// Delete a saved configuration
#[derive(Debug, Clone, Args)]
pub struct DeleteArgs {
    /// Saved configuration name
    #[arg(short, long, value_name = "NAME")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
struct StoreListResponse {
    names: Vec<String>,
    count: usize,
    store_dir: String,
}

impl StoreArgs {
    /// Execute the store command
    pub fn execute(&self) -> CliResult<()> {
        let config =
            Config::load().map_err(|e| CliError::io(format!("Failed to load config: {e}")))?;
        let store_dir = config
            .store_dir()
            .map_err(|e| CliError::io(format!("Failed to resolve store directory: {e}")))?;
        let mut store = FileStore::new(store_dir);

        match &self.command {
            StoreCommand::List(args) => args.execute(&store),
            StoreCommand::Save(args) => args.execute(&config, &mut store),
            StoreCommand::Load(args) => args.execute(&config, &store),
            StoreCommand::Delete(args) => args.execute(&mut store),
        }
    }
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self, store: &FileStore) -> CliResult<()> {
        let names = store
            .list()
            .map_err(|e| CliError::io(format!("Failed to list configurations: {e}")))?;
        let response = StoreListResponse {
            count: names.len(),
            names,
            store_dir: store.root().display().to_string(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.count == 0 {
            println!("No saved configurations.");
            println!("Store directory: {}", response.store_dir);
        } else {
            println!("Saved configurations ({}):\n", response.count);
            for name in &response.names {
                println!("  {name}");
            }
            println!("\nStore directory: {}", response.store_dir);
        }

        Ok(())
    }
}

impl SaveArgs {
    /// Execute the save command
    pub fn execute(&self, config: &Config, store: &mut FileStore) -> CliResult<()> {
        let content = fs::read_to_string(&self.file).map_err(|e| {
            CliError::io(format!("Failed to read {}: {e}", self.file.display()))
        })?;

        let mut session = EditorSession::default().with_pretty_text(config.editor.pretty_text);
        session.edit_text(content);
        let saved = session.save(&self.name, store)?;

        println!("✓ Configuration saved: {}", self.name);
        println!(
            "  {} rows generated, {} seats",
            saved.seat_map.row_count(),
            saved.seat_map.seat_count()
        );
        Ok(())
    }
}

impl LoadArgs {
    /// Execute the load command
    pub fn execute(&self, config: &Config, store: &FileStore) -> CliResult<()> {
        let mut session = EditorSession::default().with_pretty_text(config.editor.pretty_text);
        session.load(&self.name, store)?;

        match &self.out {
            Some(path) => {
                fs::write(path, session.text()).map_err(|e| {
                    CliError::io(format!("Failed to write {}: {e}", path.display()))
                })?;
                println!("✓ Configuration loaded: {}", self.name);
                println!("  Output: {}", path.display());
            }
            None => println!("{}", session.text()),
        }
        Ok(())
    }
}

impl DeleteArgs {
    /// Execute the delete command
    pub fn execute(&self, store: &mut FileStore) -> CliResult<()> {
        store
            .delete(&self.name)
            .map_err(|e| CliError::io(e.to_string()))?;
        println!("✓ Configuration deleted: {}", self.name);
        Ok(())
    }
}
