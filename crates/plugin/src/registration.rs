use serde::{Deserialize, Serialize};

/// Declares that the factory named `factory` renders objects of
/// `namespace#type_name`, or of any type in `namespace` when `type_name` is blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactoryDeclaration {
    pub namespace: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    pub factory: String,
}

impl FactoryDeclaration {
    pub fn new(
        namespace: impl Into<String>,
        type_name: Option<&str>,
        factory: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            type_name: type_name.map(str::to_string),
            factory: factory.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_json_shape() {
        let decl: FactoryDeclaration =
            serde_json::from_str(r#"{"namespace":"urn:x","type":"Widget","factory":"group"}"#)
                .unwrap();
        assert_eq!(decl, FactoryDeclaration::new("urn:x", Some("Widget"), "group"));

        let catch_all: FactoryDeclaration =
            serde_json::from_str(r#"{"namespace":"urn:x","factory":"object"}"#).unwrap();
        assert_eq!(catch_all.type_name, None);
        assert_eq!(
            serde_json::to_string(&catch_all).unwrap(),
            r#"{"namespace":"urn:x","factory":"object"}"#
        );
    }
}
