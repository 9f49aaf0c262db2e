//! Column descriptors: one seat-or-aisle slot within a cabin row.

use serde::{Deserialize, Serialize};

/// Whether a column slot holds a seat or is an aisle spacer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Addressable seat
    Seat,
    /// Spacing only, never addressable
    Aisle,
}

impl ColumnKind {
    /// Returns the serialized name ("seat" or "aisle").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Seat => "seat",
            Self::Aisle => "aisle",
        }
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single slot definition within a row pattern.
///
/// # Validation
///
/// - `position` is 1-based and unique within a pattern
/// - seat labels are non-empty and unique within a pattern
/// - aisle labels are always empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// 1-based position within the row
    pub position: u32,
    /// Seat letter (empty for aisles)
    pub label: String,
    /// Seat or aisle
    pub kind: ColumnKind,
}

impl ColumnDescriptor {
    /// Creates a seat column.
    pub fn seat(position: u32, label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
            kind: ColumnKind::Seat,
        }
    }

    /// Creates an aisle spacer.
    #[must_use]
    pub const fn aisle(position: u32) -> Self {
        Self {
            position,
            label: String::new(),
            kind: ColumnKind::Aisle,
        }
    }

    /// Returns true for seat columns.
    #[must_use]
    pub fn is_seat(&self) -> bool {
        self.kind == ColumnKind::Seat
    }

    /// Returns true for aisle columns.
    #[must_use]
    pub fn is_aisle(&self) -> bool {
        self.kind == ColumnKind::Aisle
    }
}

/// Builds a column pattern from seat group sizes, with an aisle between groups.
///
/// Seat labels run alphabetically from `A` across the whole row, so
/// `[3, 3]` yields `A B C | D E F`.
#[must_use]
pub fn pattern_from_groups(groups: &[usize]) -> Vec<ColumnDescriptor> {
    let mut columns = Vec::new();
    let mut position = 1;
    let mut letters = ('A'..='Z').chain('a'..='z');

    for (idx, &size) in groups.iter().enumerate() {
        if idx > 0 {
            columns.push(ColumnDescriptor::aisle(position));
            position += 1;
        }
        for _ in 0..size {
            let label = letters.next().map(String::from).unwrap_or_default();
            columns.push(ColumnDescriptor::seat(position, label));
            position += 1;
        }
    }

    columns
}
