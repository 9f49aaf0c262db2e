//! Configuration editing: the committed model and the dual-view session.

pub mod model;
pub mod session;

pub use model::ConfigurationModel;
pub use session::{EditMode, EditorSession};
