//! Window lifetime registry
//!
//! Tracks every live window's event storage through weak references, without
//! taking ownership. One compacting sweep per polling cycle resets each live
//! storage exactly once and drops entries whose owning window has been
//! destroyed; windows never unregister themselves.

use std::sync::{Mutex, Weak};

/// Per-window storage that participates in the polling cycle
pub(crate) trait CycleStorage {
    /// Clear last cycle's events and roll input state forward
    fn reset(&mut self);

    /// Pull this cycle's pending raw notifications into the storage
    fn collect(&mut self);
}

struct Slots<T> {
    refs: Vec<Weak<Mutex<T>>>,
    // first free slot; live entries occupy [0, tail)
    tail: usize,
}

/// Process-wide list of weak storage references, compacted lazily
///
/// The mutex makes concurrent registration memory-safe; polling itself is
/// expected from a single thread. Expired entries are normal lifecycle
/// completion, not errors, and are purged only by [`reset_all`].
///
/// [`reset_all`]: StorageRegistry::reset_all
pub(crate) struct StorageRegistry<T> {
    inner: Mutex<Slots<T>>,
}

impl<T: CycleStorage> StorageRegistry<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Slots {
                refs: Vec::new(),
                tail: 0,
            }),
        }
    }

    /// Track a storage; reuses a slot vacated by the compacting sweep
    pub fn register(&self, storage: Weak<Mutex<T>>) {
        let mut slots = self.inner.lock().unwrap();
        let tail = slots.tail;
        if tail < slots.refs.len() {
            slots.refs[tail] = storage;
        } else {
            slots.refs.push(storage);
        }
        slots.tail += 1;
    }

    /// Reset every live storage exactly once and purge expired entries
    ///
    /// Single linear sweep over `[0, tail)`: live entries are reset and kept
    /// at the front, expired ones are skipped permanently. This cannot fail.
    pub fn reset_all(&self) {
        let mut slots = self.inner.lock().unwrap();
        let mut new_tail = 0;

        for i in 0..slots.tail {
            if let Some(storage) = slots.refs[i].upgrade() {
                storage.lock().unwrap().reset();
                // keep live entries at the front
                if i != new_tail {
                    slots.refs.swap(new_tail, i);
                }
                new_tail += 1;
            }
        }
        slots.tail = new_tail;
    }

    /// Deliver pending raw notifications to every live storage
    ///
    /// Runs after the backend pump, over the live range established by the
    /// preceding [`reset_all`](StorageRegistry::reset_all).
    pub fn collect_all(&self) {
        let slots = self.inner.lock().unwrap();
        for slot in &slots.refs[..slots.tail] {
            if let Some(storage) = slot.upgrade() {
                storage.lock().unwrap().collect();
            }
        }
    }

    #[cfg(test)]
    fn live_count(&self) -> usize {
        self.inner.lock().unwrap().tail
    }

    #[cfg(test)]
    fn slot_capacity(&self) -> usize {
        self.inner.lock().unwrap().refs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Default)]
    struct CountingStorage {
        resets: usize,
        collects: usize,
    }

    impl CycleStorage for CountingStorage {
        fn reset(&mut self) {
            self.resets += 1;
        }

        fn collect(&mut self) {
            self.collects += 1;
        }
    }

    fn registered(registry: &StorageRegistry<CountingStorage>) -> Arc<Mutex<CountingStorage>> {
        let storage = Arc::new(Mutex::new(CountingStorage::default()));
        registry.register(Arc::downgrade(&storage));
        storage
    }

    #[test]
    fn resets_each_live_storage_once() {
        let registry = StorageRegistry::new();
        let a = registered(&registry);
        let b = registered(&registry);

        registry.reset_all();
        registry.reset_all();

        assert_eq!(a.lock().unwrap().resets, 2);
        assert_eq!(b.lock().unwrap().resets, 2);
    }

    #[test]
    fn expired_entries_are_skipped_and_compacted() {
        let registry = StorageRegistry::new();
        let a = registered(&registry);
        let b = registered(&registry);
        let c = registered(&registry);
        assert_eq!(registry.live_count(), 3);

        drop(b);
        registry.reset_all();

        assert_eq!(registry.live_count(), 2);
        assert_eq!(a.lock().unwrap().resets, 1);
        assert_eq!(c.lock().unwrap().resets, 1);
    }

    #[test]
    fn registration_reuses_freed_slots() {
        let registry = StorageRegistry::new();
        let _a = registered(&registry);
        let b = registered(&registry);
        let _c = registered(&registry);
        assert_eq!(registry.slot_capacity(), 3);

        drop(b);
        registry.reset_all();
        assert_eq!(registry.live_count(), 2);

        // the vacated slot is reused, the list does not grow
        let _d = registered(&registry);
        assert_eq!(registry.slot_capacity(), 3);
        assert_eq!(registry.live_count(), 3);
    }

    #[test]
    fn collect_reaches_only_live_storages() {
        let registry = StorageRegistry::new();
        let a = registered(&registry);
        let b = registered(&registry);

        registry.reset_all();
        drop(b);
        registry.collect_all();

        assert_eq!(a.lock().unwrap().collects, 1);
    }

    #[test]
    fn storage_destroyed_before_sweep_is_never_reset() {
        let registry = StorageRegistry::new();
        let a = registered(&registry);
        drop(registered(&registry));

        registry.reset_all();

        assert_eq!(a.lock().unwrap().resets, 1);
        assert_eq!(registry.live_count(), 1);
    }
}
