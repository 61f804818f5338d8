use docgen_api::{ModelType, is_blank};
use docgen_plugin::NodeFactory;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Handle returned by registration, used to unregister the entry again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub(crate) u64);

/// Binds a factory to a type (`namespace#type_name`) or, with a blank
/// `type_name`, to every type of a namespace.
#[derive(Clone)]
pub struct FactoryEntry {
    pub namespace: String,
    pub type_name: Option<String>,
    pub factory: Arc<dyn NodeFactory>,
    /// Plugin that contributed the entry.
    pub contributor: Option<String>,
}

impl FactoryEntry {
    pub fn new(
        namespace: impl Into<String>,
        type_name: Option<&str>,
        factory: Arc<dyn NodeFactory>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            type_name: type_name.map(str::to_string),
            factory,
            contributor: None,
        }
    }

    pub fn with_contributor(mut self, contributor: impl Into<String>) -> Self {
        self.contributor = Some(contributor.into());
        self
    }

    pub fn is_catch_all(&self) -> bool {
        is_blank(self.type_name.as_deref())
    }

    pub fn matches(&self, ty: &dyn ModelType) -> bool {
        if ty.namespace() != self.namespace {
            return false;
        }
        match self.type_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name == ty.name(),
            _ => true,
        }
    }

    /// Specific entries come before catch-alls; specific entries are ordered
    /// by `namespace#type_name`, catch-alls by namespace.
    pub fn priority_cmp(&self, other: &Self) -> Ordering {
        match (self.is_catch_all(), other.is_catch_all()) {
            (true, true) => self.namespace.cmp(&other.namespace),
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.qualified_name().cmp(&other.qualified_name()),
        }
    }

    fn qualified_name(&self) -> String {
        format!(
            "{}#{}",
            self.namespace,
            self.type_name.as_deref().unwrap_or_default()
        )
    }
}

impl fmt::Debug for FactoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryEntry")
            .field("namespace", &self.namespace)
            .field("type_name", &self.type_name)
            .field("contributor", &self.contributor)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub(crate) struct RegisteredEntry {
    pub id: EntryId,
    pub entry: FactoryEntry,
}
