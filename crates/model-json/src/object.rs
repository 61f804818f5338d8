use crate::types::{JsonType, TypeTable};
use docgen_api::{
    IconRef, ModelObject, ModelType, ObjectId, ObjectRef, PropertyDescriptor, Role,
};
use std::sync::Arc;

/// A model object read from a JSON model file.
pub struct JsonObject {
    pub(crate) id: ObjectId,
    pub(crate) ty: Arc<JsonType>,
    pub(crate) label: String,
    pub(crate) icon: Option<IconRef>,
    pub(crate) role: Option<Role>,
    pub(crate) properties: Vec<PropertyDescriptor>,
    pub(crate) children: Vec<ObjectRef>,
    // Keeps the supertype lookups of `ty` alive.
    pub(crate) _types: Arc<TypeTable>,
}

impl ModelObject for JsonObject {
    fn object_id(&self) -> ObjectId {
        self.id.clone()
    }

    fn model_type(&self) -> Arc<dyn ModelType> {
        self.ty.clone()
    }

    fn label(&self) -> String {
        self.label.clone()
    }

    fn icon(&self) -> Option<IconRef> {
        self.icon.clone()
    }

    fn children(&self) -> Vec<ObjectRef> {
        self.children.clone()
    }

    fn properties(&self) -> Vec<PropertyDescriptor> {
        self.properties.clone()
    }

    fn role(&self) -> Option<Role> {
        self.role.clone()
    }
}
