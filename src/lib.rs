//! CabinMap Library
//!
//! Aircraft seat-map configuration engine: cabin layout models, seat map
//! generation, the template catalog, validation, and an editing session that
//! keeps a structured view and a serialized text view of one configuration
//! consistent.

pub mod cli;
pub mod config;
pub mod constants;
pub mod editor;
pub mod error;
pub mod models;
pub mod parser;
pub mod services;
pub mod validator;
