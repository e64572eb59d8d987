use crate::{DisplayEntry, EntryId, Settings};
use std::sync::Arc;

/// An ordered set of display entries.
///
/// Entries keep their insertion order and are unique by target identity
/// (`K: PartialEq`). IDs are handed out in increasing order, so insertion
/// order is also ID order and lookups by ID are binary searches. A registry is owned by a [`Scheduler`]; build one
/// explicitly with [`Registry::new`] and recover it with
/// [`Scheduler::into_parts`].
///
/// [`Scheduler`]: crate::Scheduler
/// [`Scheduler::into_parts`]: crate::Scheduler::into_parts
#[derive(Debug)]
pub struct Registry<K> {
    entries: Vec<DisplayEntry<K>>,
    next_id: u64,
}

impl<K> Default for Registry<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<K: PartialEq> Registry<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DisplayEntry<K>> {
        self.entries.iter()
    }

    pub fn contains(&self, target: &K) -> bool {
        self.get(target).is_some()
    }

    pub fn get(&self, target: &K) -> Option<&DisplayEntry<K>> {
        self.entries.iter().find(|e| e.target() == target)
    }

    pub fn get_by_id(&self, id: EntryId) -> Option<&DisplayEntry<K>> {
        let index = self.position(id)?;
        self.entries.get(index)
    }

    pub(crate) fn get_mut(&mut self, id: EntryId) -> Option<&mut DisplayEntry<K>> {
        let index = self.position(id)?;
        self.entries.get_mut(index)
    }

    fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.binary_search_by_key(&id, DisplayEntry::id).ok()
    }

    /// Inserts `target`, or refreshes the settings of the existing entry
    /// for it. Either way the entry keeps a single slot in the registry.
    pub(crate) fn upsert(&mut self, target: K, settings: Arc<Settings>) -> EntryId {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.target() == &target) {
            entry.reset(settings);
            return entry.id();
        }

        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(DisplayEntry::new(id, target, settings));
        id
    }

    pub(crate) fn remove(&mut self, id: EntryId) -> Option<DisplayEntry<K>> {
        let index = self.position(id)?;
        Some(self.entries.remove(index))
    }

    /// Snapshot of the entry IDs in insertion order.
    pub(crate) fn ids(&self) -> Vec<EntryId> {
        self.entries.iter().map(DisplayEntry::id).collect()
    }
}
