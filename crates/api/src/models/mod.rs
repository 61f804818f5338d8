pub mod icon;
pub mod object;
pub mod property;
pub mod types;

pub use icon::IconRef;
pub use object::{ModelObject, ObjectId, ObjectRef, Role};
pub use property::{PropertyDescriptor, PropertyValue};
pub use types::{ModelType, TypeKey, is_blank};
