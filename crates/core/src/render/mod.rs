pub mod builtin;
pub mod html;
pub mod markdown;
pub mod object;

pub use builtin::{BuiltinPlugin, GroupNodeFactory, MarkdownPageFactory};
pub use markdown::MarkdownRenderer;
pub use object::{ObjectContent, ObjectNodeFactory, page_name};
