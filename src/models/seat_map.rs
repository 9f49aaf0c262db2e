//! Derived seat map: the materialized rows and cells of a configuration.

use serde::Serialize;

/// One slot within a generated row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Cell {
    /// Addressable seat, e.g. `14C`
    Seat {
        /// Seat identifier (`{row_number}{label}`)
        id: String,
        /// Column label the seat was built from
        label: String,
    },
    /// Structural spacer with no identifier
    Aisle,
}

impl Cell {
    /// Returns the seat identifier, or `None` for aisles.
    #[must_use]
    pub fn seat_id(&self) -> Option<&str> {
        match self {
            Self::Seat { id, .. } => Some(id),
            Self::Aisle => None,
        }
    }
}

/// A materialized cabin row.
///
/// `row_number` is the operator-facing physical row ordinal and is what skip
/// and emergency designations refer to. `display_index` is the 1-based
/// position of this row within the skip-filtered sequence. The two diverge
/// as soon as any row before this one is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRow {
    /// Physical cabin row ordinal
    pub row_number: u32,
    /// Position within the generated sequence
    pub display_index: u32,
    /// Flagged as an emergency-exit row
    pub is_emergency: bool,
    /// Cells in column-pattern order
    pub cells: Vec<Cell>,
}

impl GeneratedRow {
    /// Iterates over the seat identifiers of this row.
    pub fn seat_ids(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().filter_map(Cell::seat_id)
    }

    /// Number of seats in this row.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seat_ids().count()
    }
}

/// The fully materialized seats and aisle spacers of a configuration.
///
/// Never persisted; always recomputed from parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeatMap {
    /// Generated rows in ascending row-number order
    pub rows: Vec<GeneratedRow>,
}

impl SeatMap {
    /// Number of generated rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of seats across all rows.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.rows.iter().map(GeneratedRow::seat_count).sum()
    }

    /// Finds a row by its physical row number. Skipped rows return `None`.
    #[must_use]
    pub fn row_by_number(&self, row_number: u32) -> Option<&GeneratedRow> {
        self.rows.iter().find(|row| row.row_number == row_number)
    }

    /// Finds a row by its 1-based display index.
    #[must_use]
    pub fn row_by_display_index(&self, display_index: u32) -> Option<&GeneratedRow> {
        let idx = usize::try_from(display_index.checked_sub(1)?).ok()?;
        self.rows.get(idx)
    }

    /// All seat identifiers in row then column order.
    #[must_use]
    pub fn seat_ids(&self) -> Vec<&str> {
        self.rows.iter().flat_map(GeneratedRow::seat_ids).collect()
    }

    /// Seat identifiers located in emergency-exit rows.
    #[must_use]
    pub fn emergency_seat_ids(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|row| row.is_emergency)
            .flat_map(GeneratedRow::seat_ids)
            .collect()
    }

    /// Returns true if the identifier names a seat in this map.
    #[must_use]
    pub fn contains_seat(&self, seat_id: &str) -> bool {
        self.rows.iter().any(|row| row.seat_ids().any(|id| id == seat_id))
    }
}
