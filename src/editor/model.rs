//! Configuration model: the single committed configuration of an editing session.

use tracing::{debug, warn};

use crate::error::{ConfigError, ConfigResult};
use crate::models::column::ColumnDescriptor;
use crate::models::configuration::{Configuration, ConfigurationParameters};
use crate::models::preset::ColumnPreset;
use crate::services::templates::{default_parameters, TemplateCatalog, TemplateSelection};
use crate::validator::validate;

/// Holds the committed configuration and gates every change through validation.
///
/// Each mutator builds a candidate parameter set, validates it and only then
/// replaces the committed configuration, regenerating the seat map. On
/// rejection the previous configuration stays exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationModel {
    current: Configuration,
}

impl ConfigurationModel {
    /// Creates a model from an initial parameter set.
    pub fn new(parameters: ConfigurationParameters) -> ConfigResult<Self> {
        validate(&parameters)?;
        Ok(Self {
            current: Configuration::derive(parameters),
        })
    }

    /// Creates a model seeded from a template key.
    ///
    /// Unknown keys and the custom key both start from the fallback defaults.
    pub fn from_template(key: &str) -> ConfigResult<Self> {
        let parameters = match TemplateCatalog::select(key) {
            TemplateSelection::Template(params) => params,
            TemplateSelection::KeepCurrent | TemplateSelection::Fallback(_) => default_parameters(),
        };
        Self::new(parameters)
    }

    /// The committed configuration.
    #[must_use]
    pub const fn current(&self) -> &Configuration {
        &self.current
    }

    /// The committed parameters.
    #[must_use]
    pub const fn parameters(&self) -> &ConfigurationParameters {
        &self.current.parameters
    }

    /// Applies a template, replacing row count, pattern and both row sets.
    ///
    /// The custom key leaves everything unchanged. An unknown key applies the
    /// fallback defaults and is not an error.
    pub fn apply_template(&mut self, key: &str) -> ConfigResult<()> {
        match TemplateCatalog::select(key) {
            TemplateSelection::KeepCurrent => {
                debug!("custom template selected, keeping current parameters");
                Ok(())
            }
            TemplateSelection::Template(params) => self.commit(params),
            TemplateSelection::Fallback(params) => {
                warn!(key, "unknown template key, applying default parameters");
                self.commit(params)
            }
        }
    }

    /// Sets the number of cabin rows.
    pub fn set_row_count(&mut self, row_count: u32) -> ConfigResult<()> {
        let mut candidate = self.parameters().clone();
        candidate.row_count = row_count;
        self.commit(candidate)
    }

    /// Switches to a named column preset. Selecting custom keeps the current pattern.
    pub fn set_column_preset(&mut self, preset: ColumnPreset) -> ConfigResult<()> {
        match preset.columns() {
            Some(columns) => self.set_column_pattern(columns),
            None => Ok(()),
        }
    }

    /// Replaces the column pattern with an explicit one.
    pub fn set_column_pattern(&mut self, pattern: Vec<ColumnDescriptor>) -> ConfigResult<()> {
        let mut candidate = self.parameters().clone();
        candidate.column_pattern = pattern;
        self.commit(candidate)
    }

    /// Adds a row to the skip set. Adding a member again changes nothing.
    pub fn add_skip_row(&mut self, row_number: u32) -> ConfigResult<()> {
        let mut candidate = self.parameters().clone();
        if !candidate.skip_rows.contains(&row_number) {
            candidate.skip_rows.push(row_number);
        }
        self.commit(candidate)
    }

    /// Removes a row from the skip set.
    pub fn remove_skip_row(&mut self, row_number: u32) -> ConfigResult<()> {
        let mut candidate = self.parameters().clone();
        candidate.skip_rows.retain(|&row| row != row_number);
        self.commit(candidate)
    }

    /// Adds a row to the emergency set. Adding a member again changes nothing.
    pub fn add_emergency_row(&mut self, row_number: u32) -> ConfigResult<()> {
        let mut candidate = self.parameters().clone();
        if !candidate.emergency_rows.contains(&row_number) {
            candidate.emergency_rows.push(row_number);
        }
        self.commit(candidate)
    }

    /// Removes a row from the emergency set.
    pub fn remove_emergency_row(&mut self, row_number: u32) -> ConfigResult<()> {
        let mut candidate = self.parameters().clone();
        candidate.emergency_rows.retain(|&row| row != row_number);
        self.commit(candidate)
    }

    /// Replaces all parameters at once (text apply, loading a saved configuration).
    pub fn replace(&mut self, parameters: ConfigurationParameters) -> ConfigResult<()> {
        self.commit(parameters)
    }

    fn commit(&mut self, candidate: ConfigurationParameters) -> ConfigResult<()> {
        if let Err(err) = validate(&candidate) {
            warn!(field = %err.field, "rejected configuration change: {}", err.message);
            return Err(ConfigError::ValidationFailed(err));
        }

        self.current = Configuration::derive(candidate);
        debug!(
            aircraft_type = %self.current.parameters.aircraft_type,
            rows = self.current.parameters.row_count,
            "committed configuration"
        );
        Ok(())
    }
}

impl Default for ConfigurationModel {
    fn default() -> Self {
        Self {
            current: Configuration::derive(default_parameters()),
        }
    }
}
