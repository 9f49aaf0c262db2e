//! Serialized-text parsing and rendering.

pub mod config_json;

pub use config_json::{parse_document, parse_text, render_text, ConfigDocument};
