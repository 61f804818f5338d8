use super::object::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum PropertyValue {
    Empty,
    Text(String),
    /// Link to another object of the same model.
    Reference { target: ObjectId, label: String },
    Many(Vec<PropertyValue>),
}

impl PropertyValue {
    pub fn is_empty(&self) -> bool {
        match self {
            PropertyValue::Empty => true,
            PropertyValue::Many(values) => values.is_empty(),
            _ => false,
        }
    }
}

/// A structural feature of an object together with its current value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    pub name: String,
    pub display_name: String,
    /// Markup documentation of the feature.
    pub description: Option<String>,
    pub category: Option<String>,
    pub value: PropertyValue,
    pub is_many: bool,
    /// `false` when the value is the feature default.
    pub is_set: bool,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, value: PropertyValue) -> Self {
        let name = name.into();
        let is_many = matches!(value, PropertyValue::Many(_));
        let is_set = !value.is_empty();
        Self {
            display_name: name.clone(),
            name,
            description: None,
            category: None,
            value,
            is_many,
            is_set,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn text(&self) -> Option<&str> {
        match &self.value {
            PropertyValue::Text(text) => Some(text),
            _ => None,
        }
    }
}
