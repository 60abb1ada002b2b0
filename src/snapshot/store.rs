//! Single-slot snapshot cache.
//!
//! Holds at most one snapshot: each `set` wholesale-replaces the previous
//! one and `clear` empties the slot. There is no expiry; a stored snapshot
//! stays resolvable until it is replaced or cleared, even if the underlying
//! page has mutated since. Overlapping writers race and the later write
//! wins; the lock is only held to swap the slot, never across page
//! operations.

use std::sync::Arc;

use parking_lot::RwLock;

use super::types::Snapshot;

/// The most recent generated snapshot, shared between the generation and
/// dispatch paths.
#[derive(Default)]
pub struct SnapshotStore {
    slot: RwLock<Option<Arc<Snapshot>>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slot with a new snapshot.
    pub fn set(&self, snapshot: Snapshot) {
        *self.slot.write() = Some(Arc::new(snapshot));
    }

    /// The current snapshot, if one is stored.
    pub fn current(&self) -> Option<Arc<Snapshot>> {
        self.slot.read().clone()
    }

    /// Empty the slot. Previously issued refs become unresolvable; the live
    /// page is untouched.
    pub fn clear(&self) {
        *self.slot.write() = None;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::dom::types::Viewport;

    fn snapshot(title: &str) -> Snapshot {
        Snapshot {
            url: "https://example.com".to_string(),
            title: title.to_string(),
            viewport: Viewport::default(),
            timestamp: "2026-01-01T00:00:00Z".to_string(),
            tree: Vec::new(),
            refs: HashMap::new(),
        }
    }

    #[test]
    fn test_empty_until_set() {
        let store = SnapshotStore::new();
        assert!(store.current().is_none());
    }

    #[test]
    fn test_set_replaces_wholesale() {
        let store = SnapshotStore::new();
        store.set(snapshot("first"));
        store.set(snapshot("second"));
        assert_eq!(store.current().unwrap().title, "second");
    }

    #[test]
    fn test_clear_empties_slot() {
        let store = SnapshotStore::new();
        store.set(snapshot("first"));
        store.clear();
        assert!(store.current().is_none());
    }

    #[test]
    fn test_current_is_stable_across_replacement() {
        let store = SnapshotStore::new();
        store.set(snapshot("first"));
        let held = store.current().unwrap();
        store.set(snapshot("second"));
        // A handed-out snapshot is unaffected by later writes.
        assert_eq!(held.title, "first");
        assert_eq!(store.current().unwrap().title, "second");
    }
}
