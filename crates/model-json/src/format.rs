//! On-disk shape of a JSON model file.
//!
//! ```json
//! {
//!   "types": [{ "namespace": "urn:library", "name": "Book", "supertypes": ["urn:library#Item"] }],
//!   "renderers": [{ "namespace": "urn:library", "type": "Shelf", "factory": "group" }],
//!   "root": {
//!     "type": "urn:library#Library",
//!     "label": "City Library",
//!     "children": [{ "id": "b1", "type": "urn:library#Book", "label": "Dune" }]
//!   }
//! }
//! ```
//!
//! Property values are strings, numbers or booleans (text), `null` (unset),
//! `{"$ref": "<object id>"}` (a reference) or arrays of those (many-valued).

use docgen_api::Role;
use docgen_plugin::FactoryDeclaration;
use serde::{Deserialize, Serialize};

/// Key marking a property value as a reference to another object.
pub const REF_KEY: &str = "$ref";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelFile {
    #[serde(default)]
    pub types: Vec<TypeSpec>,
    /// Built-in renderer bindings shipped with the model.
    #[serde(default)]
    pub renderers: Vec<FactoryDeclaration>,
    pub root: ObjectSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSpec {
    pub namespace: String,
    pub name: String,
    /// Direct supertypes as `namespace#name`, in declaration order.
    #[serde(default)]
    pub supertypes: Vec<String>,
    #[serde(default)]
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectSpec {
    /// Needed only when the object is the target of a reference.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub type_ref: String,
    #[serde(default)]
    pub label: Option<String>,
    /// Absolute URL, or a path relative to the model file.
    #[serde(default)]
    pub icon: Option<String>,
    /// Containment feature holding this object in its parent.
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub properties: Vec<PropertySpec>,
    #[serde(default)]
    pub children: Vec<ObjectSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySpec {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub value: serde_json::Value,
}
