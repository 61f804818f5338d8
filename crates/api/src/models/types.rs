use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Identity of a model type: its namespace plus its name within that namespace.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKey {
    pub namespace: String,
    pub name: String,
}

impl TypeKey {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Parses the `namespace#name` form produced by `Display`.
    pub fn parse(s: &str) -> Option<Self> {
        let (namespace, name) = s.rsplit_once('#')?;
        if namespace.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self::new(namespace, name))
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.namespace, self.name)
    }
}

/// Run-time type of a model object, as described by the introspection layer.
///
/// The supertype graph may be any DAG (and implementations are not prevented
/// from producing cycles), so consumers walking it must guard on [`TypeKey`].
pub trait ModelType: Send + Sync {
    fn namespace(&self) -> &str;

    fn name(&self) -> &str;

    /// Direct supertypes in declaration order.
    fn super_types(&self) -> Vec<Arc<dyn ModelType>>;

    /// Markup documentation attached to the type, if any.
    fn documentation(&self) -> Option<String> {
        None
    }

    fn key(&self) -> TypeKey {
        TypeKey::new(self.namespace(), self.name())
    }
}

impl fmt::Debug for dyn ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModelType({}#{})", self.namespace(), self.name())
    }
}

/// `None`, empty and whitespace-only names are all blank.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_key_round_trip() {
        let key = TypeKey::new("urn:x", "Widget");
        assert_eq!(key.to_string(), "urn:x#Widget");
        assert_eq!(TypeKey::parse("urn:x#Widget"), Some(key));
    }

    #[test]
    fn test_type_key_parse_uses_last_hash() {
        let key = TypeKey::parse("http://example.org/model#v1#Widget").unwrap();
        assert_eq!(key.namespace, "http://example.org/model#v1");
        assert_eq!(key.name, "Widget");
        assert!(TypeKey::parse("Widget").is_none());
        assert!(TypeKey::parse("urn:x#").is_none());
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("  \t")));
        assert!(!is_blank(Some("Widget")));
    }
}
