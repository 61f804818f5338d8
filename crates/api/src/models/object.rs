use super::icon::IconRef;
use super::property::PropertyDescriptor;
use super::types::ModelType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Stable identity of an object within one model.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ObjectId(pub String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The containment feature an object is held under by its container.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub name: String,
    pub documentation: Option<String>,
}

/// Introspection view of a model object: everything a renderer may ask about it.
pub trait ModelObject: Send + Sync {
    fn object_id(&self) -> ObjectId;

    fn model_type(&self) -> Arc<dyn ModelType>;

    fn label(&self) -> String;

    fn icon(&self) -> Option<IconRef> {
        None
    }

    /// Child objects in display order.
    fn children(&self) -> Vec<ObjectRef> {
        Vec::new()
    }

    fn properties(&self) -> Vec<PropertyDescriptor> {
        Vec::new()
    }

    fn role(&self) -> Option<Role> {
        None
    }
}

pub type ObjectRef = Arc<dyn ModelObject>;

impl fmt::Debug for dyn ModelObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelObject")
            .field("id", &self.object_id())
            .field("type", &self.model_type().key())
            .finish()
    }
}
