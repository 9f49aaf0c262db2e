//! CLI command handlers for CabinMap.
//!
//! This module provides headless, scriptable access to the seat-map
//! configuration engine for automation and testing.

pub mod common;
pub mod config;
pub mod generate;
pub mod store;
pub mod template;
pub mod validate;

pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use generate::GenerateArgs;
pub use store::StoreArgs;
pub use template::TemplateArgs;
pub use validate::ValidateArgs;
