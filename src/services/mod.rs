//! Service layer for business logic.
//!
//! Layout generation, the template catalog, and named-configuration storage.

pub mod generator;
pub mod store;
pub mod templates;

pub use store::{ConfigurationStore, FileStore, MemoryStore, StoreError};
pub use templates::{TemplateCatalog, TemplateSelection};
