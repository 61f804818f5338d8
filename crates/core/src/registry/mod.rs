//! Dispatch registry selecting the renderer factory for a model object.
//!
//! Entries are kept as an immutable, fully sorted snapshot behind a single
//! lock. Registration builds a new sorted vector and swaps it in, so a
//! resolution always works on a consistent ordering and never holds the lock
//! while factories run (factories re-enter the registry for child objects).

mod entry;
mod matcher;
mod session;

pub use entry::{EntryId, FactoryEntry};
pub use matcher::{BASE_INCREMENT, CATCH_ALL_OFFSET, FactoryMatch};
pub use session::ResolveSession;

use crate::render::ObjectNodeFactory;
use docgen_api::{DocNode, DocResult, ModelType, ObjectRef};
use docgen_plugin::{DocgenPlugin, NodeFactory};
use entry::RegisteredEntry;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};

pub struct FactoryRegistry {
    entries: RwLock<Arc<Vec<RegisteredEntry>>>,
    next_id: AtomicU64,
    fallback: Arc<dyn NodeFactory>,
}

impl FactoryRegistry {
    /// Registry falling back to the generic object renderer.
    pub fn new() -> Self {
        Self::with_fallback(Arc::new(ObjectNodeFactory::default()))
    }

    pub fn with_fallback(fallback: Arc<dyn NodeFactory>) -> Self {
        Self {
            entries: RwLock::new(Arc::new(Vec::new())),
            next_id: AtomicU64::new(1),
            fallback,
        }
    }

    pub fn fallback(&self) -> Arc<dyn NodeFactory> {
        self.fallback.clone()
    }

    pub fn register(&self, entry: FactoryEntry) -> EntryId {
        let id = EntryId(self.next_id.fetch_add(1, Ordering::Relaxed));
        debug!(
            "Registering factory for {}#{}",
            entry.namespace,
            entry.type_name.as_deref().unwrap_or("*")
        );
        self.update(|entries| entries.push(RegisteredEntry { id, entry }));
        id
    }

    /// Removes the entry registered under `id`. Returns `false` if it is unknown.
    pub fn unregister(&self, id: EntryId) -> bool {
        let mut removed = false;
        self.update(|entries| {
            let before = entries.len();
            entries.retain(|e| e.id != id);
            removed = entries.len() != before;
        });
        removed
    }

    /// Registers every factory `plugin` declares. Declarations whose factory
    /// cannot be loaded are skipped with a warning.
    pub fn register_plugin(&self, plugin: &dyn DocgenPlugin) -> Vec<EntryId> {
        let info = plugin.info();
        let mut ids = Vec::new();
        for decl in plugin.declarations() {
            match plugin.load_factory(decl.factory.trim()) {
                Ok(factory) => {
                    let entry = FactoryEntry::new(
                        decl.namespace.clone(),
                        decl.type_name.as_deref(),
                        factory,
                    )
                    .with_contributor(info.id.clone());
                    ids.push(self.register(entry));
                }
                Err(e) => warn!(
                    "Plugin '{}': unable to load factory '{}' for {}#{}: {}",
                    info.id,
                    decl.factory,
                    decl.namespace,
                    decl.type_name.as_deref().unwrap_or("*"),
                    e
                ),
            }
        }
        info!("Plugin '{}' registered {} factories", info.id, ids.len());
        ids
    }

    /// Removes every entry contributed by `plugin_id`. Returns how many were removed.
    pub fn unregister_plugin(&self, plugin_id: &str) -> usize {
        let mut removed = 0;
        self.update(|entries| {
            let before = entries.len();
            entries.retain(|e| e.entry.contributor.as_deref() != Some(plugin_id));
            removed = before - entries.len();
        });
        removed
    }

    /// Current entries in priority order.
    pub fn entries(&self) -> Vec<(EntryId, FactoryEntry)> {
        self.snapshot()
            .iter()
            .map(|e| (e.id, e.entry.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Every factory matching `ty` or one of its supertypes, closest first.
    pub fn match_type(&self, ty: &dyn ModelType) -> Vec<FactoryMatch> {
        let mut matches = matcher::collect_matches(&self.snapshot(), ty);
        matches.sort_by_key(|m| m.distance);
        matches
    }

    /// The factory responsible for `ty`, or `None` when only the fallback applies.
    pub fn select(&self, ty: &dyn ModelType) -> Option<Arc<dyn NodeFactory>> {
        let matches = matcher::collect_matches(&self.snapshot(), ty);
        let best = matcher::best_match(&matches)?;
        debug!(
            "Selected entry {:?} for {} (matched {} at distance {})",
            best.entry,
            ty.key(),
            best.matched_type,
            best.distance
        );
        Some(best.factory.clone())
    }

    /// Builds the documentation node (and its subtree) for `object`.
    pub fn resolve(&self, object: &ObjectRef) -> DocResult<Arc<DocNode>> {
        let mut session = ResolveSession::new(self);
        let node = session.resolve(object)?;
        debug!(
            "Resolved {} into {} nodes",
            object.object_id(),
            session.created()
        );
        Ok(node)
    }

    fn snapshot(&self) -> Arc<Vec<RegisteredEntry>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn update(&self, mutate: impl FnOnce(&mut Vec<RegisteredEntry>)) {
        let mut guard = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let mut entries = guard.as_ref().clone();
        mutate(&mut entries);
        entries.sort_by(|a, b| a.entry.priority_cmp(&b.entry));
        *guard = Arc::new(entries);
    }
}

impl Default for FactoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
