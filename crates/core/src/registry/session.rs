use super::FactoryRegistry;
use docgen_api::{DocError, DocNode, DocResult, ObjectId, ObjectRef};
use docgen_plugin::NodeResolver;
use std::sync::Arc;
use tracing::warn;

/// One tree population pass. Tracks the objects on the active resolution path
/// so that a cyclic containment structure cannot recurse forever.
pub struct ResolveSession<'r> {
    registry: &'r FactoryRegistry,
    active: Vec<ObjectId>,
    created: usize,
}

impl<'r> ResolveSession<'r> {
    pub fn new(registry: &'r FactoryRegistry) -> Self {
        Self {
            registry,
            active: Vec::new(),
            created: 0,
        }
    }

    /// Number of nodes created so far.
    pub fn created(&self) -> usize {
        self.created
    }

    pub fn resolve(&mut self, object: &ObjectRef) -> DocResult<Arc<DocNode>> {
        let id = object.object_id();
        self.active.push(id.clone());
        let result = self.create(object, &id);
        self.active.pop();
        result
    }

    fn create(&mut self, object: &ObjectRef, id: &ObjectId) -> DocResult<Arc<DocNode>> {
        let ty = object.model_type();
        let factory = self
            .registry
            .select(ty.as_ref())
            .unwrap_or_else(|| self.registry.fallback());

        let node = factory.create_node(object, self).map_err(|e| match e {
            DocError::Factory { .. } => e,
            other => DocError::Factory {
                object: format!("{} ({})", id, ty.key()),
                source: Box::new(other),
            },
        })?;
        self.created += 1;
        Ok(node)
    }
}

impl NodeResolver for ResolveSession<'_> {
    fn resolve_child(&mut self, object: &ObjectRef) -> DocResult<Option<Arc<DocNode>>> {
        let id = object.object_id();
        if self.active.contains(&id) {
            warn!("Skipping {}: already being rendered on the current path", id);
            return Ok(None);
        }
        self.resolve(object).map(Some)
    }
}
