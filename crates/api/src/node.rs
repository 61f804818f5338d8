//! Documentation tree node.
//!
//! A [`DocNode`] carries what every node shares (label, icon, children and a
//! weak back-reference to its parent). What a node renders is supplied by its
//! [`NodeContent`] strategy, chosen by whichever factory created the node.
//!
//! Node ids are positional: `parentId + "-" + indexInParent`, computed from the
//! live tree at query time. Reordering or removing children therefore changes
//! the ids of every node below the affected position.

use crate::context::GenerationContext;
use crate::error::{DocError, DocResult};
use crate::models::{IconRef, ObjectId};
use std::fmt;
use std::ptr;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

pub const ID_SEPARATOR: &str = "-";

/// Renderer-specific behavior of a node.
pub trait NodeContent: Send + Sync {
    /// Short-circuits path resolution when this node renders `object` itself.
    fn object_path(&self, _node: &DocNode, _object: &ObjectId) -> Option<String> {
        None
    }

    /// Registers the node's page in `ctx.output` and returns its relative path,
    /// or `None` for pure grouping nodes.
    fn build_content(
        &self,
        _node: &DocNode,
        _ctx: &mut GenerationContext<'_>,
    ) -> DocResult<Option<String>> {
        Ok(None)
    }
}

struct NoContent;

impl NodeContent for NoContent {}

pub struct DocNode {
    label: String,
    icon: Option<IconRef>,
    parent: RwLock<Weak<DocNode>>,
    children: RwLock<Vec<Arc<DocNode>>>,
    content: Box<dyn NodeContent>,
}

impl DocNode {
    pub fn new(
        label: impl Into<String>,
        icon: Option<IconRef>,
        content: impl NodeContent + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            label: label.into(),
            icon,
            parent: RwLock::new(Weak::new()),
            children: RwLock::new(Vec::new()),
            content: Box::new(content),
        })
    }

    /// Node without content of its own, e.g. the root holder of a site.
    pub fn group(label: impl Into<String>, icon: Option<IconRef>) -> Arc<Self> {
        Self::new(label, icon, NoContent)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn icon(&self) -> Option<&IconRef> {
        self.icon.as_ref()
    }

    /// Appends `child`, detaching it from its previous parent first.
    pub fn add_child(self: &Arc<Self>, child: Arc<DocNode>) -> DocResult<()> {
        let len = self.child_count();
        self.insert_child(len, child)
    }

    pub fn insert_child(self: &Arc<Self>, index: usize, child: Arc<DocNode>) -> DocResult<()> {
        if self.is_self_or_ancestor(&child) {
            return Err(DocError::Internal(format!(
                "attaching '{}' under '{}' would create a cycle",
                child.label, self.label
            )));
        }
        let len = self.child_count();
        if index > len {
            return Err(DocError::Internal(format!(
                "child index {} out of bounds for '{}' ({} children)",
                index, self.label, len
            )));
        }
        child.detach();

        let mut children = write(&self.children);
        let index = index.min(children.len());
        *write(&child.parent) = Arc::downgrade(self);
        children.insert(index, child);
        Ok(())
    }

    /// Removes and returns the child at `index`; the removed node becomes a root.
    pub fn remove_child(&self, index: usize) -> Option<Arc<DocNode>> {
        let removed = {
            let mut children = write(&self.children);
            if index >= children.len() {
                return None;
            }
            children.remove(index)
        };
        *write(&removed.parent) = Weak::new();
        Some(removed)
    }

    /// Moves the child at `from` to position `to`.
    pub fn move_child(&self, from: usize, to: usize) -> bool {
        let mut children = write(&self.children);
        if from >= children.len() || to >= children.len() {
            return false;
        }
        let child = children.remove(from);
        children.insert(to, child);
        true
    }

    /// Snapshot of the children in display order.
    pub fn children(&self) -> Vec<Arc<DocNode>> {
        read(&self.children).clone()
    }

    pub fn child_count(&self) -> usize {
        read(&self.children).len()
    }

    pub fn parent(&self) -> Option<Arc<DocNode>> {
        read(&self.parent).upgrade()
    }

    pub fn index_in_parent(&self) -> Option<usize> {
        let parent = self.parent()?;
        let siblings = read(&parent.children);
        siblings.iter().position(|c| ptr::eq(c.as_ref(), self))
    }

    /// Positional id; `None` only for a node without a parent.
    pub fn id(&self) -> Option<String> {
        let parent = self.parent()?;
        let index = self.index_in_parent()?;
        Some(match parent.id() {
            Some(parent_id) => format!("{}{}{}", parent_id, ID_SEPARATOR, index),
            None => index.to_string(),
        })
    }

    /// Path of the page rendering `object` within this subtree.
    pub fn object_path(&self, object: &ObjectId) -> Option<String> {
        if let Some(path) = self.content.object_path(self, object) {
            return Some(path);
        }
        self.children()
            .iter()
            .find_map(|child| child.object_path(object))
    }

    pub fn build_content(&self, ctx: &mut GenerationContext<'_>) -> DocResult<Option<String>> {
        self.content.build_content(self, ctx)
    }

    /// Depth-first pre-order walk over this node and its descendants.
    pub fn accept(&self, visitor: &mut dyn FnMut(&DocNode)) {
        visitor(self);
        for child in self.children() {
            child.accept(visitor);
        }
    }

    fn detach(&self) {
        let Some(parent) = self.parent() else {
            return;
        };
        write(&parent.children).retain(|c| !ptr::eq(c.as_ref(), self));
        *write(&self.parent) = Weak::new();
    }

    fn is_self_or_ancestor(&self, candidate: &DocNode) -> bool {
        if ptr::eq(self, candidate) {
            return true;
        }
        let mut current = self.parent();
        while let Some(node) = current {
            if ptr::eq(node.as_ref(), candidate) {
                return true;
            }
            current = node.parent();
        }
        false
    }
}

impl fmt::Debug for DocNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocNode")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("id", &self.id())
            .field("children", &self.child_count())
            .finish()
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
