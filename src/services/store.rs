//! Named-configuration persistence.
//!
//! The editor depends only on the [`ConfigurationStore`] contract. Two
//! backends ship with the crate: [`FileStore`], one JSON document per name in
//! a directory, and [`MemoryStore`] for embedding and tests. Calls are
//! synchronous; callers issue one at a time.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::configuration::ConfigurationParameters;
use crate::parser::config_json::ConfigDocument;

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 _.-]{0,63}$").expect("store name pattern is valid")
});

/// Failure reported by a persistence backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The name cannot be used as a configuration name
    #[error("invalid configuration name '{0}'")]
    InvalidName(String),
    /// No configuration is stored under the name
    #[error("configuration '{0}' not found")]
    NotFound(String),
    /// The name maps to a file that already holds another configuration
    #[error("configuration '{name}' would overwrite '{existing}'")]
    NameConflict {
        /// Requested name
        name: String,
        /// Name stored in the existing file
        existing: String,
    },
    /// A stored document could not be read back
    #[error("configuration '{name}' is corrupt: {reason}")]
    Corrupt {
        /// Stored name
        name: String,
        /// Parse failure
        reason: String,
    },
    /// Underlying I/O failure
    #[error("{context}: {source}")]
    Io {
        /// What was being attempted
        context: String,
        /// I/O error
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Save, list and load configurations by name.
pub trait ConfigurationStore {
    /// Names of all stored configurations, sorted.
    fn list(&self) -> Result<Vec<String>, StoreError>;

    /// Stores parameters under a name, replacing any previous entry.
    fn save(&mut self, name: &str, parameters: &ConfigurationParameters) -> Result<(), StoreError>;

    /// Loads the parameters stored under a name.
    ///
    /// The result has not been validated.
    fn load(&self, name: &str) -> Result<ConfigurationParameters, StoreError>;

    /// Deletes a stored configuration.
    fn delete(&mut self, name: &str) -> Result<(), StoreError>;
}

/// Checks that a name is usable as a configuration name.
pub fn validate_name(name: &str) -> Result<(), StoreError> {
    if NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(StoreError::InvalidName(name.to_string()))
    }
}

/// Sanitizes a configuration name for use as a file stem.
///
/// Replaces problematic characters with underscores and lowercases. Distinct
/// names can share a stem; [`FileStore`] checks the stored name on every access.
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    name.replace(['/', '\\', ':', ' '], "_").to_lowercase()
}

/// On-disk document written by [`FileStore`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedConfiguration {
    /// Name as given when saving
    pub name: String,
    /// Save timestamp
    pub saved_at: DateTime<Utc>,
    /// Configuration in its serialized form
    pub configuration: ConfigDocument,
}

/// Stores each configuration as `<store_dir>/<sanitized name>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at a directory. The directory is created on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The store directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.json", sanitize_filename(name)))
    }

    /// Reads the document stored for `name`, which must carry that exact name.
    fn read_named(&self, name: &str) -> Result<(PathBuf, SavedConfiguration), StoreError> {
        validate_name(name)?;

        let path = self.path_for(name);
        if !path.exists() {
            return Err(StoreError::NotFound(name.to_string()));
        }

        let saved = self.read(&path)?;
        if saved.name != name {
            return Err(StoreError::NotFound(name.to_string()));
        }
        Ok((path, saved))
    }

    fn read(&self, path: &Path) -> Result<SavedConfiguration, StoreError> {
        let content = fs::read_to_string(path)
            .map_err(|e| StoreError::io(format!("Failed to read {}", path.display()), e))?;
        serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
            name: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

impl ConfigurationStore for FileStore {
    fn list(&self) -> Result<Vec<String>, StoreError> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.root).map_err(|e| {
            StoreError::io(format!("Failed to read store directory {}", self.root.display()), e)
        })?;

        let mut names = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            match self.read(&path) {
                Ok(saved) => names.push(saved.name),
                Err(err) => warn!("skipping unreadable configuration file: {err}"),
            }
        }

        names.sort();
        Ok(names)
    }

    fn save(&mut self, name: &str, parameters: &ConfigurationParameters) -> Result<(), StoreError> {
        validate_name(name)?;

        fs::create_dir_all(&self.root).map_err(|e| {
            StoreError::io(format!("Failed to create store directory {}", self.root.display()), e)
        })?;

        let saved = SavedConfiguration {
            name: name.to_string(),
            saved_at: Utc::now(),
            configuration: ConfigDocument::from(parameters),
        };
        let content = serde_json::to_string_pretty(&saved).map_err(|e| StoreError::Corrupt {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        let path = self.path_for(name);
        if let Ok(existing) = self.read(&path) {
            if existing.name != name {
                return Err(StoreError::NameConflict {
                    name: name.to_string(),
                    existing: existing.name,
                });
            }
        }

        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, content)
            .map_err(|e| StoreError::io(format!("Failed to write {}", temp_path.display()), e))?;
        if let Err(e) = fs::rename(&temp_path, &path) {
            let _ = fs::remove_file(&temp_path);
            return Err(StoreError::io(format!("Failed to rename to {}", path.display()), e));
        }

        debug!(name, path = %path.display(), "saved configuration");
        Ok(())
    }

    fn load(&self, name: &str) -> Result<ConfigurationParameters, StoreError> {
        let (_, saved) = self.read_named(name)?;
        ConfigurationParameters::try_from(saved.configuration).map_err(|e| StoreError::Corrupt {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }

    fn delete(&mut self, name: &str) -> Result<(), StoreError> {
        let (path, _) = self.read_named(name)?;
        fs::remove_file(&path)
            .map_err(|e| StoreError::io(format!("Failed to delete {}", path.display()), e))
    }
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, ConfigurationParameters>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigurationStore for MemoryStore {
    fn list(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.entries.keys().cloned().collect())
    }

    fn save(&mut self, name: &str, parameters: &ConfigurationParameters) -> Result<(), StoreError> {
        validate_name(name)?;
        self.entries.insert(name.to_string(), parameters.clone());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<ConfigurationParameters, StoreError> {
        validate_name(name)?;
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    fn delete(&mut self, name: &str) -> Result<(), StoreError> {
        validate_name(name)?;
        self.entries
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }
}
