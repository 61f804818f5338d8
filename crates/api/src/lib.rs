pub mod context;
pub mod error;
pub mod models;
pub mod node;
pub mod output;

// Re-export commonly used types
pub use context::{GenerationContext, IconResolver, MarkupRenderer, ObjectPathResolver};
pub use error::{BoxError, DocError, DocResult};
pub use models::*;
pub use node::{DocNode, NodeContent, ID_SEPARATOR};
pub use output::{Artifact, OutputEntry, OutputFolder};
