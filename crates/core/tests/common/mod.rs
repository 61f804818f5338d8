#![allow(dead_code)]

use docgen_api::{
    IconRef, ModelObject, ModelType, ObjectId, ObjectRef, PropertyDescriptor, Role,
};
use std::sync::Arc;

pub const NS: &str = "urn:test";

pub struct TestType {
    pub name: String,
    pub supers: Vec<Arc<dyn ModelType>>,
    pub documentation: Option<String>,
}

impl ModelType for TestType {
    fn namespace(&self) -> &str {
        NS
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn super_types(&self) -> Vec<Arc<dyn ModelType>> {
        self.supers.clone()
    }

    fn documentation(&self) -> Option<String> {
        self.documentation.clone()
    }
}

pub fn ty(name: &str, supers: Vec<Arc<dyn ModelType>>) -> Arc<dyn ModelType> {
    Arc::new(TestType {
        name: name.to_string(),
        supers,
        documentation: None,
    })
}

pub struct TestObject {
    pub id: String,
    pub ty: Arc<dyn ModelType>,
    pub label: String,
    pub icon: Option<IconRef>,
    pub children: Vec<ObjectRef>,
    pub properties: Vec<PropertyDescriptor>,
    pub role: Option<Role>,
}

impl TestObject {
    pub fn new(id: &str, ty: &Arc<dyn ModelType>, label: &str) -> Self {
        Self {
            id: id.to_string(),
            ty: ty.clone(),
            label: label.to_string(),
            icon: None,
            children: Vec::new(),
            properties: Vec::new(),
            role: None,
        }
    }

    pub fn icon(mut self, icon: IconRef) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn child(mut self, child: TestObject) -> Self {
        self.children.push(child.into_ref());
        self
    }

    pub fn property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    pub fn role(mut self, name: &str, documentation: Option<&str>) -> Self {
        self.role = Some(Role {
            name: name.to_string(),
            documentation: documentation.map(str::to_string),
        });
        self
    }

    pub fn into_ref(self) -> ObjectRef {
        Arc::new(self)
    }
}

impl ModelObject for TestObject {
    fn object_id(&self) -> ObjectId {
        ObjectId::new(self.id.clone())
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

/// Writes `bytes` to `dir/<sub>/<name>` and returns its `file:` icon reference.
pub fn file_icon(dir: &std::path::Path, sub: &str, name: &str, bytes: &[u8]) -> IconRef {
    let folder = dir.join(sub);
    std::fs::create_dir_all(&folder).unwrap();
    let path = folder.join(name);
    std::fs::write(&path, bytes).unwrap();
    IconRef::Url(url::Url::from_file_path(&path).unwrap())
}
