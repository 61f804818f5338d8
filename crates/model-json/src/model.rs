use crate::error::{ModelError, Result};
use crate::format::{ModelFile, ObjectSpec, PropertySpec, REF_KEY};
use crate::object::JsonObject;
use crate::types::TypeTable;
use docgen_api::{IconRef, ModelType, ObjectId, ObjectRef, PropertyDescriptor, PropertyValue};
use docgen_plugin::FactoryDeclaration;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use url::Url;

/// Id of the root object when the file does not name it.
pub const ROOT_ID: &str = "/";

/// Property used as label when an object has no explicit one.
const NAME_PROPERTY: &str = "name";

/// A loaded and validated model.
pub struct JsonModel {
    root: ObjectRef,
    types: Arc<TypeTable>,
    renderers: Vec<FactoryDeclaration>,
    object_count: usize,
}

impl JsonModel {
    /// Reads a model file. Relative icon paths resolve against its folder.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let base_dir = path
            .parent()
            .map(|dir| {
                if dir.as_os_str().is_empty() {
                    Path::new(".")
                } else {
                    dir
                }
            })
            .and_then(|dir| std::fs::canonicalize(dir).ok());
        let model = Self::parse(&content, base_dir.as_deref())?;
        tracing::info!(
            "Loaded model {}: {} types, {} objects",
            path.display(),
            model.types.len(),
            model.object_count
        );
        Ok(model)
    }

    pub fn parse(json: &str, base_dir: Option<&Path>) -> Result<Self> {
        let file: ModelFile = serde_json::from_str(json)?;
        Self::from_file(file, base_dir)
    }

    pub fn from_file(file: ModelFile, base_dir: Option<&Path>) -> Result<Self> {
        let types = TypeTable::build(&file.types)?;
        let mut builder = ObjectBuilder {
            types: &types,
            base_dir,
            labels: HashMap::new(),
        };
        builder.index(&file.root, ROOT_ID)?;
        let root = builder.build(&file.root, ROOT_ID)?;
        let object_count = builder.labels.len();

        Ok(Self {
            root,
            types,
            renderers: file.renderers,
            object_count,
        })
    }

    pub fn root(&self) -> &ObjectRef {
        &self.root
    }

    pub fn types(&self) -> &TypeTable {
        &self.types
    }

    /// Renderer bindings declared by the model file.
    pub fn renderers(&self) -> &[FactoryDeclaration] {
        &self.renderers
    }

    pub fn object_count(&self) -> usize {
        self.object_count
    }
}

struct ObjectBuilder<'a> {
    types: &'a Arc<TypeTable>,
    base_dir: Option<&'a Path>,
    labels: HashMap<String, String>,
}

impl ObjectBuilder<'_> {
    /// First pass: assigns ids, checks types and records every label so
    /// references can point anywhere in the tree.
    fn index(&mut self, spec: &ObjectSpec, path: &str) -> Result<()> {
        let id = object_id(spec, path);
        let ty = self
            .types
            .lookup(&spec.type_ref)?
            .ok_or_else(|| ModelError::UnknownType {
                object: id.clone(),
                ty: spec.type_ref.clone(),
            })?;
        let label = label_of(spec, ty.name());
        if self.labels.insert(id.clone(), label).is_some() {
            return Err(ModelError::DuplicateId(id));
        }
        for (index, child) in spec.children.iter().enumerate() {
            self.index(child, &child_path(path, index))?;
        }
        Ok(())
    }

    fn build(&self, spec: &ObjectSpec, path: &str) -> Result<ObjectRef> {
        let id = object_id(spec, path);
        let ty = self
            .types
            .lookup(&spec.type_ref)?
            .ok_or_else(|| ModelError::UnknownType {
                object: id.clone(),
                ty: spec.type_ref.clone(),
            })?;

        let properties = spec
            .properties
            .iter()
            .map(|p| self.property(&id, p))
            .collect::<Result<Vec<_>>>()?;
        let children = spec
            .children
            .iter()
            .enumerate()
            .map(|(index, child)| self.build(child, &child_path(path, index)))
            .collect::<Result<Vec<_>>>()?;

        let object: ObjectRef = Arc::new(JsonObject {
            label: self.labels.get(&id).cloned().unwrap_or_default(),
            id: ObjectId::new(id),
            ty,
            icon: spec.icon.as_deref().map(|raw| self.icon(raw)),
            role: spec.role.clone(),
            properties,
            children,
            _types: self.types.clone(),
        });
        Ok(object)
    }

    fn property(&self, object: &str, spec: &PropertySpec) -> Result<PropertyDescriptor> {
        let value = self.value(object, &spec.name, &spec.value)?;
        let mut property = PropertyDescriptor::new(spec.name.clone(), value);
        if let Some(display_name) = &spec.display_name {
            property = property.with_display_name(display_name.clone());
        }
        if let Some(description) = &spec.description {
            property = property.with_description(description.clone());
        }
        if let Some(category) = &spec.category {
            property = property.with_category(category.clone());
        }
        Ok(property)
    }

    fn value(&self, object: &str, property: &str, value: &Value) -> Result<PropertyValue> {
        Ok(match value {
            Value::Null => PropertyValue::Empty,
            Value::String(text) => PropertyValue::Text(text.clone()),
            Value::Bool(_) | Value::Number(_) => PropertyValue::Text(value.to_string()),
            Value::Array(items) => PropertyValue::Many(
                items
                    .iter()
                    .map(|item| self.value(object, property, item))
                    .collect::<Result<Vec<_>>>()?,
            ),
            Value::Object(map) => match map.get(REF_KEY).and_then(Value::as_str) {
                Some(target) => {
                    let label = self.labels.get(target).cloned().ok_or_else(|| {
                        ModelError::DanglingReference {
                            object: object.to_string(),
                            property: property.to_string(),
                            target: target.to_string(),
                        }
                    })?;
                    PropertyValue::Reference {
                        target: ObjectId::new(target),
                        label,
                    }
                }
                None => PropertyValue::Text(value.to_string()),
            },
        })
    }

    /// Absolute URLs are kept, path-like strings resolve against the model
    /// folder and anything else is a symbolic icon name.
    fn icon(&self, raw: &str) -> IconRef {
        if let Ok(url) = Url::parse(raw) {
            return IconRef::Url(url);
        }
        let path_like = raw.contains('/') || raw.contains('.');
        match self.base_dir {
            Some(base) if path_like => Url::from_file_path(resolve(base, raw))
                .map(IconRef::Url)
                .unwrap_or_else(|_| IconRef::Symbolic(raw.to_string())),
            _ => IconRef::Symbolic(raw.to_string()),
        }
    }
}

fn resolve(base: &Path, raw: &str) -> PathBuf {
    let path = Path::new(raw);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn object_id(spec: &ObjectSpec, path: &str) -> String {
    match spec.id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => path.to_string(),
    }
}

fn child_path(parent: &str, index: usize) -> String {
    if parent.ends_with('/') {
        format!("{}{}", parent, index)
    } else {
        format!("{}/{}", parent, index)
    }
}

fn label_of(spec: &ObjectSpec, type_name: &str) -> String {
    spec.label
        .clone()
        .or_else(|| {
            spec.properties
                .iter()
                .find(|p| p.name == NAME_PROPERTY)
                .and_then(|p| p.value.as_str().map(str::to_string))
        })
        .unwrap_or_else(|| type_name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use docgen_api::ModelObject;

    const LIBRARY: &str = r##"{
        "types": [
            {"namespace": "urn:lib", "name": "Library"},
            {"namespace": "urn:lib", "name": "Item", "documentation": "Anything on a shelf."},
            {"namespace": "urn:lib", "name": "Book", "supertypes": ["urn:lib#Item"]}
        ],
        "renderers": [{"namespace": "urn:lib", "type": "Library", "factory": "group"}],
        "root": {
            "type": "urn:lib#Library",
            "label": "City Library",
            "children": [
                {
                    "id": "dune",
                    "type": "urn:lib#Book",
                    "icon": "fa-book",
                    "role": {"name": "books"},
                    "properties": [
                        {"name": "name", "value": "Dune"},
                        {"name": "pages", "value": 412, "category": "Physical"},
                        {"name": "sequel", "value": {"$ref": "messiah"}},
                        {"name": "subtitle", "value": null},
                        {"name": "tags", "value": ["classic", true]}
                    ]
                },
                {"id": "messiah", "type": "urn:lib#Book", "label": "Dune Messiah"},
                {"type": "urn:lib#Item"}
            ]
        }
    }"##;

    #[test]
    fn test_parse_object_tree() {
        let model = JsonModel::parse(LIBRARY, None).unwrap();
        let root = model.root();
        assert_eq!(root.object_id().as_str(), ROOT_ID);
        assert_eq!(root.label(), "City Library");
        assert_eq!(model.object_count(), 4);
        assert_eq!(model.renderers().len(), 1);

        let children = root.children();
        assert_eq!(children.len(), 3);
        assert_eq!(children[0].label(), "Dune");
        assert_eq!(children[0].icon(), Some(IconRef::Symbolic("fa-book".to_string())));
        assert_eq!(children[0].role().map(|r| r.name), Some("books".to_string()));
        assert_eq!(children[2].object_id().as_str(), "/2");
        assert_eq!(children[2].label(), "Item");
        assert_eq!(children[0].model_type().super_types()[0].name(), "Item");
    }

    #[test]
    fn test_property_values() {
        let model = JsonModel::parse(LIBRARY, None).unwrap();
        let dune = model.root().children()[0].clone();
        let properties = dune.properties();

        assert_eq!(properties[1].value, PropertyValue::Text("412".to_string()));
        assert_eq!(properties[1].category.as_deref(), Some("Physical"));
        assert_eq!(
            properties[2].value,
            PropertyValue::Reference {
                target: ObjectId::new("messiah"),
                label: "Dune Messiah".to_string(),
            }
        );
        assert!(!properties[3].is_set);
        assert!(properties[4].is_many);
        assert_eq!(
            properties[4].value,
            PropertyValue::Many(vec![
                PropertyValue::Text("classic".to_string()),
                PropertyValue::Text("true".to_string()),
            ])
        );
    }

    #[test]
    fn test_validation_errors() {
        let unknown_type = r#"{"root": {"type": "urn:x#Missing"}}"#;
        assert!(matches!(
            JsonModel::parse(unknown_type, None),
            Err(ModelError::UnknownType { .. })
        ));

        let dangling = r##"{
            "types": [{"namespace": "urn:x", "name": "T"}],
            "root": {"type": "urn:x#T", "properties": [{"name": "to", "value": {"$ref": "nope"}}]}
        }"##;
        assert!(matches!(
            JsonModel::parse(dangling, None),
            Err(ModelError::DanglingReference { target, .. }) if target == "nope"
        ));

        let duplicate = r#"{
            "types": [{"namespace": "urn:x", "name": "T"}],
            "root": {"type": "urn:x#T", "children": [
                {"id": "a", "type": "urn:x#T"}, {"id": "a", "type": "urn:x#T"}
            ]}
        }"#;
        assert!(matches!(
            JsonModel::parse(duplicate, None),
            Err(ModelError::DuplicateId(id)) if id == "a"
        ));

        assert!(matches!(
            JsonModel::parse("{", None),
            Err(ModelError::Json(_))
        ));
    }

    #[test]
    fn test_relative_icons_resolve_against_model_folder() {
        let dir = tempfile::tempdir().unwrap();
        let json = r#"{
            "types": [{"namespace": "urn:x", "name": "T"}],
            "root": {"type": "urn:x#T", "icon": "icons/t.png"}
        }"#;
        let path = dir.path().join("model.json");
        std::fs::write(&path, json).unwrap();

        let model = JsonModel::load(&path).unwrap();
        let Some(IconRef::Url(url)) = model.root().icon() else {
            panic!("expected a file icon");
        };
        assert_eq!(url.scheme(), "file");
        assert!(url.path().ends_with("/icons/t.png"));
    }
}
