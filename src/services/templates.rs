//! Template catalog: fixed default parameter sets per aircraft type.

use serde::Serialize;

use crate::constants::CUSTOM_TEMPLATE_KEY;
use crate::models::column::pattern_from_groups;
use crate::models::configuration::ConfigurationParameters;

/// A built-in aircraft template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateEntry {
    /// Lookup key (e.g., "a320")
    pub key: &'static str,
    /// Human-readable aircraft description
    pub description: &'static str,
    /// Number of cabin rows
    pub row_count: u32,
    /// Seat group sizes between aisles
    pub seat_groups: &'static [usize],
    /// Rows left out of the cabin numbering
    pub skip_rows: &'static [u32],
    /// Emergency-exit rows
    pub emergency_rows: &'static [u32],
}

impl TemplateEntry {
    /// Expands this entry into a full parameter set.
    #[must_use]
    pub fn parameters(&self) -> ConfigurationParameters {
        ConfigurationParameters::new(self.row_count, pattern_from_groups(self.seat_groups))
            .with_aircraft_type(self.key)
            .with_skip_rows(self.skip_rows.iter().copied())
            .with_emergency_rows(self.emergency_rows.iter().copied())
    }
}

const CATALOG: &[TemplateEntry] = &[
    TemplateEntry {
        key: "a320",
        description: "Airbus A320, single class",
        row_count: 30,
        seat_groups: &[3, 3],
        skip_rows: &[],
        emergency_rows: &[11, 12],
    },
    TemplateEntry {
        key: "a321",
        description: "Airbus A321, single class",
        row_count: 37,
        seat_groups: &[3, 3],
        skip_rows: &[13],
        emergency_rows: &[10, 11, 25],
    },
    TemplateEntry {
        key: "b737-800",
        description: "Boeing 737-800",
        row_count: 32,
        seat_groups: &[3, 3],
        skip_rows: &[],
        emergency_rows: &[14, 15],
    },
    TemplateEntry {
        key: "e190",
        description: "Embraer E190",
        row_count: 25,
        seat_groups: &[2, 2],
        skip_rows: &[13],
        emergency_rows: &[10],
    },
    TemplateEntry {
        key: "atr72",
        description: "ATR 72-600",
        row_count: 18,
        seat_groups: &[2, 2],
        skip_rows: &[13],
        emergency_rows: &[1, 18],
    },
    TemplateEntry {
        key: "erj145",
        description: "Embraer ERJ-145",
        row_count: 17,
        seat_groups: &[2, 1],
        skip_rows: &[],
        emergency_rows: &[9],
    },
    TemplateEntry {
        key: "dhc6",
        description: "DHC-6 Twin Otter",
        row_count: 8,
        seat_groups: &[1, 1],
        skip_rows: &[],
        emergency_rows: &[],
    },
    TemplateEntry {
        key: "a330-300",
        description: "Airbus A330-300, economy cabin",
        row_count: 44,
        seat_groups: &[2, 4, 2],
        skip_rows: &[13],
        emergency_rows: &[19, 32],
    },
];

/// Fallback parameters used for unrecognized template keys.
///
/// 30 rows of three-three with a center aisle, no skipped rows and no
/// emergency rows, as a custom (untyped) configuration.
#[must_use]
pub fn default_parameters() -> ConfigurationParameters {
    ConfigurationParameters::new(30, pattern_from_groups(&[3, 3]))
}

/// Outcome of selecting a template key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSelection {
    /// The custom key: keep all current parameters
    KeepCurrent,
    /// A known template's parameters
    Template(ConfigurationParameters),
    /// Unknown key: the fallback defaults
    Fallback(ConfigurationParameters),
}

/// Read-only mapping from aircraft-type keys to default parameters.
pub struct TemplateCatalog;

impl TemplateCatalog {
    /// Looks up a template by key (case-insensitive).
    #[must_use]
    pub fn lookup(key: &str) -> Option<ConfigurationParameters> {
        Self::entry(key).map(TemplateEntry::parameters)
    }

    /// Returns the catalog entry for a key.
    #[must_use]
    pub fn entry(key: &str) -> Option<&'static TemplateEntry> {
        let key = key.trim();
        CATALOG.iter().find(|entry| entry.key.eq_ignore_ascii_case(key))
    }

    /// Resolves a template selection. Never fails: unknown keys fall back
    /// to [`default_parameters`].
    #[must_use]
    pub fn select(key: &str) -> TemplateSelection {
        if key.trim().eq_ignore_ascii_case(CUSTOM_TEMPLATE_KEY) {
            return TemplateSelection::KeepCurrent;
        }
        match Self::lookup(key) {
            Some(parameters) => TemplateSelection::Template(parameters),
            None => TemplateSelection::Fallback(default_parameters()),
        }
    }

    /// All template keys in catalog order.
    #[must_use]
    pub fn keys() -> Vec<&'static str> {
        CATALOG.iter().map(|entry| entry.key).collect()
    }

    /// All catalog entries.
    #[must_use]
    pub fn entries() -> &'static [TemplateEntry] {
        CATALOG
    }
}
