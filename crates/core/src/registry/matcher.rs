//! Supertype-distance matching of registry entries.
//!
//! The queried type sits at distance 0. Each direct supertype is one
//! [`BASE_INCREMENT`] further away, plus its position among its siblings so
//! that parallel supertypes get distinct distances in declaration order.
//! Catch-all entries are pushed back by [`CATCH_ALL_OFFSET`], which exceeds any
//! distance reachable through a realistic hierarchy.

use super::entry::{EntryId, RegisteredEntry};
use docgen_api::{ModelType, TypeKey};
use docgen_plugin::NodeFactory;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::ops::ControlFlow;
use std::sync::Arc;

pub const BASE_INCREMENT: u64 = 1_000;
pub const CATCH_ALL_OFFSET: u64 = 1_000_000;

/// A factory that matched somewhere in the supertype closure of a type.
#[derive(Clone)]
pub struct FactoryMatch {
    pub entry: EntryId,
    pub factory: Arc<dyn NodeFactory>,
    pub distance: u64,
    /// Type in the closure the entry matched.
    pub matched_type: TypeKey,
    pub catch_all: bool,
}

impl std::fmt::Debug for FactoryMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactoryMatch")
            .field("entry", &self.entry)
            .field("distance", &self.distance)
            .field("matched_type", &self.matched_type)
            .field("catch_all", &self.catch_all)
            .finish()
    }
}

/// Factory identity: the address of the shared factory instance.
type FactoryKey = *const ();

fn factory_key(factory: &Arc<dyn NodeFactory>) -> FactoryKey {
    Arc::as_ptr(factory) as *const ()
}

/// Collects one match per factory, in the order factories were first recorded.
///
/// A factory recorded again later in the walk keeps its position but takes the
/// newer distance. An exact match on `ty` itself ends the walk immediately.
pub(crate) fn collect_matches(entries: &[RegisteredEntry], ty: &dyn ModelType) -> Vec<FactoryMatch> {
    let mut accumulator = IndexMap::new();
    let mut traversed = HashSet::new();
    let _ = walk(entries, ty, 0, &mut traversed, &mut accumulator);
    accumulator.into_values().collect()
}

/// The closest match; ties go to the match recorded first.
pub(crate) fn best_match(matches: &[FactoryMatch]) -> Option<&FactoryMatch> {
    matches.iter().min_by_key(|m| m.distance)
}

fn walk(
    entries: &[RegisteredEntry],
    ty: &dyn ModelType,
    distance: u64,
    traversed: &mut HashSet<TypeKey>,
    accumulator: &mut IndexMap<FactoryKey, FactoryMatch>,
) -> ControlFlow<()> {
    let key = ty.key();
    if !traversed.insert(key.clone()) {
        return ControlFlow::Continue(());
    }

    for registered in entries {
        let entry = &registered.entry;
        if !entry.matches(ty) {
            continue;
        }
        let catch_all = entry.is_catch_all();
        let recorded = FactoryMatch {
            entry: registered.id,
            factory: entry.factory.clone(),
            distance: if catch_all {
                distance + CATCH_ALL_OFFSET
            } else {
                distance
            },
            matched_type: key.clone(),
            catch_all,
        };
        accumulator.insert(factory_key(&entry.factory), recorded);
        if !catch_all && distance == 0 {
            return ControlFlow::Break(());
        }
    }

    for (offset, super_type) in ty.super_types().iter().enumerate() {
        walk(
            entries,
            super_type.as_ref(),
            distance + BASE_INCREMENT + offset as u64,
            traversed,
            accumulator,
        )?;
    }
    ControlFlow::Continue(())
}
