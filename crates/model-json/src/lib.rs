//! JSON model files as an introspection source for the documentation generator.

pub mod error;
pub mod format;
pub mod model;
pub mod object;
pub mod types;

pub use error::{ModelError, Result};
pub use format::ModelFile;
pub use model::{JsonModel, ROOT_ID};
pub use object::JsonObject;
pub use types::{JsonType, TypeTable};
