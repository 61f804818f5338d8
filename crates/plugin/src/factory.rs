use docgen_api::{DocNode, DocResult, ObjectRef};
use std::sync::Arc;

/// Resolves child objects to documentation nodes through the registry that
/// is currently building the tree.
pub trait NodeResolver {
    /// `Ok(None)` when the object must not be rendered here (e.g. it is
    /// already being rendered further up the current path).
    fn resolve_child(&mut self, object: &ObjectRef) -> DocResult<Option<Arc<DocNode>>>;

    /// Resolves every child of `parent`'s object and attaches the results in order.
    fn populate(&mut self, parent: &Arc<DocNode>, children: &[ObjectRef]) -> DocResult<()> {
        for child in children {
            if let Some(node) = self.resolve_child(child)? {
                parent.add_child(node)?;
            }
        }
        Ok(())
    }
}

/// Creates the documentation node responsible for one model object and,
/// through `resolver`, the nodes of its children.
pub trait NodeFactory: Send + Sync {
    fn create_node(
        &self,
        object: &ObjectRef,
        resolver: &mut dyn NodeResolver,
    ) -> DocResult<Arc<DocNode>>;
}

impl<F> NodeFactory for F
where
    F: Fn(&ObjectRef, &mut dyn NodeResolver) -> DocResult<Arc<DocNode>> + Send + Sync,
{
    fn create_node(
        &self,
        object: &ObjectRef,
        resolver: &mut dyn NodeResolver,
    ) -> DocResult<Arc<DocNode>> {
        self(object, resolver)
    }
}
