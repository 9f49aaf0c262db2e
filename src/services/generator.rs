//! Layout generator: derives a seat map from compact parameters.
//!
//! Generation is a pure function of its inputs. Identical parameters always
//! produce identical seat maps, and nothing is cached between calls.

use tracing::debug;

use crate::models::column::{ColumnDescriptor, ColumnKind};
use crate::models::configuration::ConfigurationParameters;
use crate::models::seat_map::{Cell, GeneratedRow, SeatMap};

/// Generates the seat map for `row_count` rows, leaving out `skip_rows`.
///
/// Rows are emitted in ascending row-number order. Each row mirrors
/// `column_pattern` in stored order; seat columns become `"{row}{label}"`
/// identifiers and aisles become spacer cells. Display indices are assigned
/// by position in the output, so they only match row numbers until the first
/// skipped row.
#[must_use]
pub fn generate(row_count: u32, column_pattern: &[ColumnDescriptor], skip_rows: &[u32]) -> SeatMap {
    let mut rows = Vec::new();
    let mut display_index = 0;

    for row_number in 1..=row_count {
        if skip_rows.contains(&row_number) {
            continue;
        }
        display_index += 1;

        let cells = column_pattern
            .iter()
            .map(|column| match column.kind {
                ColumnKind::Seat => Cell::Seat {
                    id: format!("{row_number}{}", column.label),
                    label: column.label.clone(),
                },
                ColumnKind::Aisle => Cell::Aisle,
            })
            .collect();

        rows.push(GeneratedRow {
            row_number,
            display_index,
            is_emergency: false,
            cells,
        });
    }

    SeatMap { rows }
}

/// Generates the seat map for a parameter set, flagging emergency rows.
///
/// Emergency rows that are also skipped simply never appear.
#[must_use]
pub fn generate_seat_map(parameters: &ConfigurationParameters) -> SeatMap {
    let mut seat_map = generate(
        parameters.row_count,
        &parameters.column_pattern,
        &parameters.skip_rows,
    );

    for row in &mut seat_map.rows {
        row.is_emergency = parameters.is_emergency(row.row_number);
    }

    debug!(
        rows = seat_map.row_count(),
        seats = seat_map.seat_count(),
        "generated seat map"
    );

    seat_map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::column::pattern_from_groups;
    use std::collections::HashSet;

    #[test]
    fn test_generate_row_count_excludes_skipped() {
        let pattern = pattern_from_groups(&[2, 2]);
        let map = generate(20, &pattern, &[4, 13, 20]);
        assert_eq!(map.row_count(), 17);
        assert!(map.rows.iter().all(|r| ![4, 13, 20].contains(&r.row_number)));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let pattern = pattern_from_groups(&[3, 3]);
        let first = generate(30, &pattern, &[13]);
        let second = generate(30, &pattern, &[13]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_seat_ids_follow_row_and_label() {
        let pattern = pattern_from_groups(&[1, 1]);
        let map = generate(3, &pattern, &[]);
        let row = map.row_by_number(3).unwrap();
        let ids: Vec<&str> = row.seat_ids().collect();
        assert_eq!(ids, vec!["3A", "3B"]);
        assert_eq!(row.cells[1], Cell::Aisle);
    }

    #[test]
    fn test_seat_ids_unique_within_row() {
        let pattern = pattern_from_groups(&[3, 4, 3]);
        let map = generate(5, &pattern, &[]);
        for row in &map.rows {
            let ids: HashSet<&str> = row.seat_ids().collect();
            assert_eq!(ids.len(), row.seat_count());
        }
    }

    #[test]
    fn test_display_index_diverges_after_skip() {
        let pattern = pattern_from_groups(&[2, 2]);
        let map = generate(15, &pattern, &[13]);
        assert_eq!(map.row_by_number(12).unwrap().display_index, 12);
        assert_eq!(map.row_by_number(14).unwrap().display_index, 13);
        assert_eq!(map.row_by_display_index(13).unwrap().row_number, 14);
        assert!(map.row_by_number(13).is_none());
    }

    #[test]
    fn test_skip_rows_beyond_row_count_are_ignored() {
        let pattern = pattern_from_groups(&[1]);
        let map = generate(3, &pattern, &[7]);
        assert_eq!(map.row_count(), 3);
    }

    #[test]
    fn test_generate_zero_rows_is_empty() {
        let pattern = pattern_from_groups(&[3, 3]);
        assert!(generate(0, &pattern, &[]).rows.is_empty());
    }

    #[test]
    fn test_emergency_flag_and_skip_precedence() {
        let params = ConfigurationParameters::new(10, pattern_from_groups(&[2, 2]))
            .with_skip_rows([5])
            .with_emergency_rows([5, 6]);
        let map = generate_seat_map(&params);
        assert!(map.row_by_number(5).is_none());
        assert!(map.row_by_number(6).unwrap().is_emergency);
        assert!(!map.row_by_number(7).unwrap().is_emergency);
        assert_eq!(map.emergency_seat_ids(), vec!["6A", "6B", "6C", "6D"]);
    }
}
