//! Cabin configuration parameters and the committed configuration.

use serde::{Deserialize, Serialize};

use crate::models::column::ColumnDescriptor;
use crate::models::preset::ColumnPreset;
use crate::models::seat_map::SeatMap;
use crate::services::generator;

/// Compact parameters a seat map is derived from.
///
/// # Validation
///
/// - `row_count` in `1..=MAX_ROW_COUNT`
/// - every skip and emergency row within `1..=row_count`, no duplicates
/// - at least one seat column; seat labels unique and non-empty
///
/// A row may be both skipped and flagged emergency; skipping wins because a
/// skipped row never materializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationParameters {
    /// Template key, or empty for a custom configuration
    pub aircraft_type: String,
    /// Number of physical cabin rows
    pub row_count: u32,
    /// Ordered column slots shared by every row
    pub column_pattern: Vec<ColumnDescriptor>,
    /// Row numbers excluded from the seat map (ascending once committed)
    pub skip_rows: Vec<u32>,
    /// Row numbers flagged as emergency exits (ascending once committed)
    pub emergency_rows: Vec<u32>,
}

impl ConfigurationParameters {
    /// Creates parameters for a custom configuration with no skipped or exit rows.
    pub fn new(row_count: u32, column_pattern: Vec<ColumnDescriptor>) -> Self {
        Self {
            aircraft_type: String::new(),
            row_count,
            column_pattern,
            skip_rows: Vec::new(),
            emergency_rows: Vec::new(),
        }
    }

    /// Sets the skip rows.
    #[must_use]
    pub fn with_skip_rows(mut self, rows: impl IntoIterator<Item = u32>) -> Self {
        self.skip_rows = rows.into_iter().collect();
        self
    }

    /// Sets the emergency rows.
    #[must_use]
    pub fn with_emergency_rows(mut self, rows: impl IntoIterator<Item = u32>) -> Self {
        self.emergency_rows = rows.into_iter().collect();
        self
    }

    /// Sets the aircraft type key.
    #[must_use]
    pub fn with_aircraft_type(mut self, aircraft_type: impl Into<String>) -> Self {
        self.aircraft_type = aircraft_type.into();
        self
    }

    /// The preset the column pattern classifies as.
    #[must_use]
    pub fn preset(&self) -> ColumnPreset {
        ColumnPreset::classify(&self.column_pattern)
    }

    /// Whether a row number is skipped.
    #[must_use]
    pub fn is_skipped(&self, row_number: u32) -> bool {
        self.skip_rows.contains(&row_number)
    }

    /// Whether a row number is flagged as an emergency row.
    #[must_use]
    pub fn is_emergency(&self, row_number: u32) -> bool {
        self.emergency_rows.contains(&row_number)
    }

    /// Sorts both row sets ascending.
    pub(crate) fn normalize(&mut self) {
        self.skip_rows.sort_unstable();
        self.emergency_rows.sort_unstable();
    }
}

/// A committed configuration: validated parameters plus the seat map derived from them.
///
/// Only built from parameters that passed validation; the seat map is
/// regenerated whenever a new `Configuration` is built and never patched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Committed parameters
    pub parameters: ConfigurationParameters,
    /// Seat map derived from `parameters`
    pub seat_map: SeatMap,
}

impl Configuration {
    /// Derives the seat map for already-validated parameters.
    pub(crate) fn derive(mut parameters: ConfigurationParameters) -> Self {
        parameters.normalize();
        let seat_map = generator::generate_seat_map(&parameters);
        Self {
            parameters,
            seat_map,
        }
    }

    /// Template key, or empty for a custom configuration.
    #[must_use]
    pub fn aircraft_type(&self) -> &str {
        &self.parameters.aircraft_type
    }

    /// The preset the committed column pattern classifies as.
    #[must_use]
    pub fn preset(&self) -> ColumnPreset {
        self.parameters.preset()
    }
}
