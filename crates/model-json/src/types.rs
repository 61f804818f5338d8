use crate::error::{ModelError, Result};
use crate::format::TypeSpec;
use docgen_api::{ModelType, TypeKey};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::sync::{Arc, Weak};

/// Declared types of one model. Supertypes are looked up by key through the
/// table, so the declarations may refer to each other in any order.
pub struct TypeTable {
    types: IndexMap<TypeKey, Arc<JsonType>>,
}

pub struct JsonType {
    key: TypeKey,
    supertypes: Vec<TypeKey>,
    documentation: Option<String>,
    table: Weak<TypeTable>,
}

impl TypeTable {
    pub fn build(specs: &[TypeSpec]) -> Result<Arc<Self>> {
        let mut declared = HashSet::new();
        for spec in specs {
            let key = TypeKey::new(spec.namespace.clone(), spec.name.clone());
            if !declared.insert(key.clone()) {
                return Err(ModelError::DuplicateType(key.to_string()));
            }
        }

        let mut resolved = Vec::with_capacity(specs.len());
        for spec in specs {
            let key = TypeKey::new(spec.namespace.clone(), spec.name.clone());
            let mut supertypes = Vec::with_capacity(spec.supertypes.len());
            for raw in &spec.supertypes {
                let supertype = parse_key(raw)?;
                if !declared.contains(&supertype) {
                    return Err(ModelError::UnknownSupertype {
                        ty: key.to_string(),
                        supertype: supertype.to_string(),
                    });
                }
                supertypes.push(supertype);
            }
            resolved.push((key, supertypes, spec.documentation.clone()));
        }

        Ok(Arc::new_cyclic(|table| TypeTable {
            types: resolved
                .into_iter()
                .map(|(key, supertypes, documentation)| {
                    let ty = Arc::new(JsonType {
                        key: key.clone(),
                        supertypes,
                        documentation,
                        table: table.clone(),
                    });
                    (key, ty)
                })
                .collect(),
        }))
    }

    pub fn get(&self, key: &TypeKey) -> Option<Arc<JsonType>> {
        self.types.get(key).cloned()
    }

    /// Looks up a `namespace#name` reference.
    pub fn lookup(&self, raw: &str) -> Result<Option<Arc<JsonType>>> {
        Ok(self.get(&parse_key(raw)?))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<JsonType>> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl ModelType for JsonType {
    fn namespace(&self) -> &str {
        &self.key.namespace
    }

    fn name(&self) -> &str {
        &self.key.name
    }

    fn super_types(&self) -> Vec<Arc<dyn ModelType>> {
        let Some(table) = self.table.upgrade() else {
            return Vec::new();
        };
        self.supertypes
            .iter()
            .filter_map(|key| table.get(key))
            .map(|ty| ty as Arc<dyn ModelType>)
            .collect()
    }

    fn documentation(&self) -> Option<String> {
        self.documentation.clone()
    }
}

fn parse_key(raw: &str) -> Result<TypeKey> {
    TypeKey::parse(raw.trim()).ok_or_else(|| ModelError::InvalidTypeRef(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str, supertypes: &[&str]) -> TypeSpec {
        TypeSpec {
            namespace: "urn:t".to_string(),
            name: name.to_string(),
            supertypes: supertypes.iter().map(|s| s.to_string()).collect(),
            documentation: None,
        }
    }

    #[test]
    fn test_supertypes_in_declaration_order() {
        let table = TypeTable::build(&[
            spec("Book", &["urn:t#Item", "urn:t#Named"]),
            spec("Item", &[]),
            spec("Named", &[]),
        ])
        .unwrap();

        let book = table.lookup("urn:t#Book").unwrap().unwrap();
        let names: Vec<String> = book
            .super_types()
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(names, vec!["Item", "Named"]);
    }

    #[test]
    fn test_cyclic_supertypes_are_accepted() {
        let table = TypeTable::build(&[spec("A", &["urn:t#B"]), spec("B", &["urn:t#A"])]).unwrap();
        let a = table.lookup("urn:t#A").unwrap().unwrap();
        assert_eq!(a.super_types()[0].super_types()[0].name(), "A");
    }

    #[test]
    fn test_validation_errors() {
        assert!(matches!(
            TypeTable::build(&[spec("A", &[]), spec("A", &[])]),
            Err(ModelError::DuplicateType(_))
        ));
        assert!(matches!(
            TypeTable::build(&[spec("A", &["urn:t#Missing"])]),
            Err(ModelError::UnknownSupertype { .. })
        ));
        assert!(matches!(
            TypeTable::build(&[spec("A", &["Missing"])]),
            Err(ModelError::InvalidTypeRef(_))
        ));
    }
}
