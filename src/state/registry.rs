use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Point, TouchId};

/// Last known virtual position of every active contact.
///
/// Entries are kept in a `BTreeMap`, so [`TouchRegistry::positions`] walks them by ascending
/// id. Queries that break ties by iteration order are therefore deterministic for a given
/// set of contacts, but the order carries no meaning beyond that.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchRegistry {
    touches: BTreeMap<TouchId, Point>,
}

impl TouchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites; one entry per id.
    pub fn upsert(&mut self, id: TouchId, position: Point) {
        self.touches.insert(id, position);
    }

    /// Returns whether an entry was present. Removing an unknown id is not an error.
    pub fn remove(&mut self, id: TouchId) -> bool {
        self.touches.remove(&id).is_some()
    }

    /// Drops every entry whose id is missing from `active`. Returns how many were dropped.
    ///
    /// `active` must be the host's full active set for the current event, not a partial one.
    pub fn reconcile<I>(&mut self, active: I) -> usize
    where
        I: IntoIterator<Item = TouchId>,
    {
        let active: BTreeSet<TouchId> = active.into_iter().collect();
        let before = self.touches.len();
        self.touches.retain(|id, _| active.contains(id));
        before - self.touches.len()
    }

    pub fn positions(&self) -> impl Iterator<Item = (TouchId, Point)> + '_ {
        self.touches.iter().map(|(id, p)| (*id, *p))
    }

    pub fn get(&self, id: TouchId) -> Option<Point> {
        self.touches.get(&id).copied()
    }

    pub fn ids(&self) -> impl Iterator<Item = TouchId> + '_ {
        self.touches.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.touches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.touches.is_empty()
    }

    pub fn clear(&mut self) {
        self.touches.clear();
    }
}
