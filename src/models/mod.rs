//! Data models for cabin layouts and derived seat maps.
//!
//! Models are independent of persistence and presentation.

pub mod column;
pub mod configuration;
pub mod preset;
pub mod seat_map;

pub use column::{pattern_from_groups, ColumnDescriptor, ColumnKind};
pub use configuration::{Configuration, ConfigurationParameters};
pub use preset::ColumnPreset;
pub use seat_map::{Cell, GeneratedRow, SeatMap};
