//! Editing session: keeps the structured view and the serialized text view in step.
//!
//! Exactly one view is authoritative at a time:
//!
//! - [`EditMode::Visual`]: structured edits commit to the model and the text
//!   buffer is re-rendered from the committed configuration after each one.
//! - [`EditMode::Text`]: keystrokes only touch the buffer. The model is
//!   frozen until [`EditorSession::apply`] parses, validates and commits the
//!   buffer, or [`EditorSession::enter_visual_mode`] throws the buffer away.

use tracing::{info, warn};

use crate::editor::model::ConfigurationModel;
use crate::error::{ConfigError, ConfigResult};
use crate::models::column::ColumnDescriptor;
use crate::models::configuration::{Configuration, ConfigurationParameters};
use crate::models::preset::ColumnPreset;
use crate::parser::config_json::{parse_text, render_text};
use crate::services::store::ConfigurationStore;

/// Which view drives commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Structured edits are authoritative
    #[default]
    Visual,
    /// The serialized text buffer is being hand-edited
    Text,
}

/// An editing session over one configuration.
#[derive(Debug, Clone)]
pub struct EditorSession {
    model: ConfigurationModel,
    mode: EditMode,
    buffer: String,
    pretty: bool,
}

impl EditorSession {
    /// Starts a session in visual mode.
    #[must_use]
    pub fn new(model: ConfigurationModel) -> Self {
        let mut session = Self {
            model,
            mode: EditMode::Visual,
            buffer: String::new(),
            pretty: true,
        };
        session.render();
        session
    }

    /// Chooses pretty or compact rendering of the text buffer.
    #[must_use]
    pub fn with_pretty_text(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self.render();
        self
    }

    /// The committed configuration.
    #[must_use]
    pub const fn current(&self) -> &Configuration {
        self.model.current()
    }

    /// The current mode.
    #[must_use]
    pub const fn mode(&self) -> EditMode {
        self.mode
    }

    /// The serialized text buffer.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Enters text-edit mode with a buffer freshly rendered from the model.
    pub fn enter_text_mode(&mut self) {
        if self.mode == EditMode::Visual {
            self.render();
            self.mode = EditMode::Text;
        }
    }

    /// Replaces the text buffer. Nothing is parsed; the model is untouched.
    ///
    /// Editing text while in visual mode enters text mode first.
    pub fn edit_text(&mut self, text: impl Into<String>) {
        self.mode = EditMode::Text;
        self.buffer = text.into();
    }

    /// Returns to visual mode, discarding any unapplied text.
    pub fn enter_visual_mode(&mut self) {
        if self.mode == EditMode::Text {
            self.mode = EditMode::Visual;
            self.render();
        }
    }

    /// Parses, validates and commits the text buffer.
    ///
    /// On success the session returns to visual mode and the preset the
    /// parsed column pattern classifies as is returned. On failure the model
    /// and the buffer are left as they were and the session stays in text mode.
    pub fn apply(&mut self) -> ConfigResult<ColumnPreset> {
        if self.mode == EditMode::Visual {
            return Ok(self.current().preset());
        }

        let result = parse_text(&self.buffer).and_then(|parameters| {
            let preset = parameters.preset();
            self.model.replace(parameters)?;
            Ok(preset)
        });

        match result {
            Ok(preset) => {
                self.mode = EditMode::Visual;
                self.render();
                Ok(preset)
            }
            Err(err) => {
                warn!("text apply rejected: {err}");
                Err(err)
            }
        }
    }

    /// Applies a template (see [`ConfigurationModel::apply_template`]).
    pub fn apply_template(&mut self, key: &str) -> ConfigResult<()> {
        self.visual_edit(|model| model.apply_template(key))
    }

    /// Sets the row count.
    pub fn set_row_count(&mut self, row_count: u32) -> ConfigResult<()> {
        self.visual_edit(|model| model.set_row_count(row_count))
    }

    /// Switches to a named column preset.
    pub fn set_column_preset(&mut self, preset: ColumnPreset) -> ConfigResult<()> {
        self.visual_edit(|model| model.set_column_preset(preset))
    }

    /// Replaces the column pattern.
    pub fn set_column_pattern(&mut self, pattern: Vec<ColumnDescriptor>) -> ConfigResult<()> {
        self.visual_edit(|model| model.set_column_pattern(pattern))
    }

    /// Adds a skip row.
    pub fn add_skip_row(&mut self, row_number: u32) -> ConfigResult<()> {
        self.visual_edit(|model| model.add_skip_row(row_number))
    }

    /// Removes a skip row.
    pub fn remove_skip_row(&mut self, row_number: u32) -> ConfigResult<()> {
        self.visual_edit(|model| model.remove_skip_row(row_number))
    }

    /// Adds an emergency row.
    pub fn add_emergency_row(&mut self, row_number: u32) -> ConfigResult<()> {
        self.visual_edit(|model| model.add_emergency_row(row_number))
    }

    /// Removes an emergency row.
    pub fn remove_emergency_row(&mut self, row_number: u32) -> ConfigResult<()> {
        self.visual_edit(|model| model.remove_emergency_row(row_number))
    }

    /// Lists stored configuration names.
    pub fn list_saved(&self, store: &dyn ConfigurationStore) -> ConfigResult<Vec<String>> {
        store
            .list()
            .map_err(|e| ConfigError::PersistenceFailed(e.to_string()))
    }

    /// Saves the committed configuration under a name and returns it.
    ///
    /// In text mode the buffer is applied first and nothing is saved if that
    /// fails. A persistence failure leaves in-memory edits in place.
    pub fn save(
        &mut self,
        name: &str,
        store: &mut dyn ConfigurationStore,
    ) -> ConfigResult<Configuration> {
        if self.mode == EditMode::Text {
            self.apply()?;
        }

        store
            .save(name, &self.current().parameters)
            .map_err(|e| ConfigError::PersistenceFailed(e.to_string()))?;

        info!(name, "saved configuration");
        Ok(self.current().clone())
    }

    /// Loads a stored configuration into the model.
    pub fn load(&mut self, name: &str, store: &dyn ConfigurationStore) -> ConfigResult<()> {
        if self.mode == EditMode::Text {
            return Err(ConfigError::ViewFrozen);
        }

        let parameters: ConfigurationParameters = store
            .load(name)
            .map_err(|e| ConfigError::PersistenceFailed(e.to_string()))?;

        self.visual_edit(|model| model.replace(parameters))?;
        info!(name, "loaded configuration");
        Ok(())
    }

    fn visual_edit(
        &mut self,
        edit: impl FnOnce(&mut ConfigurationModel) -> ConfigResult<()>,
    ) -> ConfigResult<()> {
        if self.mode == EditMode::Text {
            return Err(ConfigError::ViewFrozen);
        }
        edit(&mut self.model)?;
        self.render();
        Ok(())
    }

    fn render(&mut self) {
        self.buffer = render_text(&self.model.current().parameters, self.pretty);
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(ConfigurationModel::default())
    }
}
