//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{APP_DIR_NAME, CONFIG_DIR_ENV};
use crate::services::templates::TemplateCatalog;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Directory holding named saved configurations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_dir: Option<PathBuf>,
}

/// Editor preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Template key used to seed new sessions
    #[serde(default = "default_template")]
    pub default_template: String,
    /// Pretty-print the serialized text view
    #[serde(default = "default_pretty_text")]
    pub pretty_text: bool,
}

fn default_template() -> String {
    "a320".to_string()
}

const fn default_pretty_text() -> bool {
    true
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_template: default_template(),
            pretty_text: default_pretty_text(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/CabinMap/config.toml`
/// - macOS: `~/Library/Application Support/CabinMap/config.toml`
/// - Windows: `%APPDATA%\CabinMap\config.toml`
///
/// `CABINMAP_CONFIG_DIR` replaces the whole directory when set.
///
/// # Validation
///
/// - `default_template` must be non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Editor preferences
    #[serde(default)]
    pub editor: EditorConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Resolves the directory for saved configurations.
    pub fn store_dir(&self) -> Result<PathBuf> {
        match &self.paths.store_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::config_dir()?.join("configurations")),
        }
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.editor.default_template.trim().is_empty() {
            anyhow::bail!("editor.default_template cannot be empty");
        }
        Ok(())
    }

    /// Sets a configuration value by dotted key.
    ///
    /// Supported keys: `paths.store_dir`, `editor.default_template`,
    /// `editor.pretty_text`. An empty `paths.store_dir` resets it to the default.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "paths.store_dir" => {
                self.paths.store_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "editor.default_template" => {
                if TemplateCatalog::entry(value).is_none() {
                    anyhow::bail!(
                        "Unknown template '{}'. Available: {}",
                        value,
                        TemplateCatalog::keys().join(", ")
                    );
                }
                self.editor.default_template = value.to_string();
            }
            "editor.pretty_text" => {
                self.editor.pretty_text = value
                    .parse()
                    .with_context(|| format!("Expected true or false, got '{value}'"))?;
            }
            _ => anyhow::bail!(
                "Unknown config key '{}'. Supported: paths.store_dir, editor.default_template, editor.pretty_text",
                key
            ),
        }
        self.validate()
    }
}
