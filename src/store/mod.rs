//! Process-wide reactive cache of server entities, keyed by parent scope.
//!
//! Collections are mutated only through the reconcile operations, and only
//! after the remote call has resolved; nothing is inserted speculatively.
//! Each operation is atomic with respect to one parent-scoped collection;
//! no guarantee spans multiple scopes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::{EntityId, Group, InviteToken, Keyed, Transaction};

/// Observers are told which parent scope changed and re-read via
/// [`ScopedStore::snapshot`].
pub trait StoreObserver: Send + Sync {
    fn scope_changed(&self, parent: EntityId);
}

pub type SubscriptionId = u64;

/// Shared, observable collection of entities grouped under a parent id.
pub struct ScopedStore<T: Keyed + Clone> {
    inner: Mutex<StoreInner<T>>,
}

struct StoreInner<T> {
    collections: HashMap<EntityId, Vec<T>>,
    observers: Vec<(SubscriptionId, Arc<dyn StoreObserver>)>,
    next_subscription: SubscriptionId,
}

impl<T: Keyed + Clone> Default for ScopedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed + Clone> ScopedStore<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                collections: HashMap::new(),
                observers: Vec::new(),
                next_subscription: 0,
            }),
        }
    }

    /// Inserts the entity under `parent`, replacing in place any existing
    /// entity with the same id. Idempotent per id; ordering is preserved.
    pub fn reconcile_insert(&self, parent: EntityId, entity: T) {
        let observers = {
            let mut inner = self.lock();
            let collection = inner.collections.entry(parent).or_default();
            match collection.iter_mut().find(|item| item.id() == entity.id()) {
                Some(slot) => *slot = entity,
                None => collection.push(entity),
            }
            snapshot_observers(&inner)
        };
        notify(&observers, parent);
    }

    /// Removes the entity with `id` from the `parent` scope. Removing a
    /// missing id is a no-op, not an error.
    pub fn reconcile_remove(&self, parent: EntityId, id: EntityId) {
        let observers = {
            let mut inner = self.lock();
            let Some(collection) = inner.collections.get_mut(&parent) else {
                return;
            };
            let before = collection.len();
            collection.retain(|item| item.id() != id);
            if collection.len() == before {
                return;
            }
            snapshot_observers(&inner)
        };
        notify(&observers, parent);
    }

    /// Cloned view of the `parent` scope, empty when never populated.
    pub fn snapshot(&self, parent: EntityId) -> Vec<T> {
        self.lock()
            .collections
            .get(&parent)
            .cloned()
            .unwrap_or_default()
    }

    pub fn contains(&self, parent: EntityId, id: EntityId) -> bool {
        self.lock()
            .collections
            .get(&parent)
            .map(|collection| collection.iter().any(|item| item.id() == id))
            .unwrap_or(false)
    }

    pub fn len(&self, parent: EntityId) -> usize {
        self.lock()
            .collections
            .get(&parent)
            .map(Vec::len)
            .unwrap_or(0)
    }

    pub fn is_empty(&self, parent: EntityId) -> bool {
        self.len(parent) == 0
    }

    pub fn subscribe(&self, observer: Arc<dyn StoreObserver>) -> SubscriptionId {
        let mut inner = self.lock();
        let id = inner.next_subscription;
        inner.next_subscription += 1;
        inner.observers.push((id, observer));
        id
    }

    pub fn unsubscribe(&self, subscription: SubscriptionId) {
        self.lock().observers.retain(|(id, _)| *id != subscription);
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn snapshot_observers<T>(inner: &StoreInner<T>) -> Vec<Arc<dyn StoreObserver>> {
    inner
        .observers
        .iter()
        .map(|(_, observer)| Arc::clone(observer))
        .collect()
}

// Observers run outside the store lock so they may re-read the store.
fn notify(observers: &[Arc<dyn StoreObserver>], parent: EntityId) {
    for observer in observers {
        observer.scope_changed(parent);
    }
}

/// The process-wide stores a client application shares across screens.
#[derive(Default)]
pub struct ClientStores {
    pub groups: Arc<ScopedStore<Group>>,
    pub transactions: Arc<ScopedStore<Transaction>>,
    pub invites: Arc<ScopedStore<InviteToken>>,
}

impl ClientStores {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: EntityId,
        label: &'static str,
    }

    impl Keyed for Item {
        fn id(&self) -> EntityId {
            self.id
        }
    }

    struct Counter(AtomicUsize);

    impl StoreObserver for Counter {
        fn scope_changed(&self, _parent: EntityId) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn insert_twice_replaces_in_place() {
        let store = ScopedStore::new();
        store.reconcile_insert(1, Item { id: 5, label: "a" });
        store.reconcile_insert(1, Item { id: 6, label: "b" });
        store.reconcile_insert(1, Item { id: 5, label: "c" });
        let snapshot = store.snapshot(1);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0], Item { id: 5, label: "c" });
        assert_eq!(snapshot[1], Item { id: 6, label: "b" });
    }

    #[test]
    fn remove_missing_id_is_a_no_op() {
        let store = ScopedStore::new();
        store.reconcile_insert(1, Item { id: 5, label: "a" });
        store.reconcile_remove(1, 99);
        store.reconcile_remove(2, 5);
        assert_eq!(store.len(1), 1);
    }

    #[test]
    fn observers_fire_only_on_real_changes() {
        let store = ScopedStore::new();
        let counter = Arc::new(Counter(AtomicUsize::new(0)));
        store.subscribe(counter.clone());
        store.reconcile_insert(1, Item { id: 5, label: "a" });
        store.reconcile_remove(1, 99);
        store.reconcile_remove(1, 5);
        assert_eq!(counter.0.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store = ScopedStore::new();
        let counter = Arc::new(Counter(AtomicUsize::new(0)));
        let subscription = store.subscribe(counter.clone());
        store.unsubscribe(subscription);
        store.reconcile_insert(1, Item { id: 5, label: "a" });
        assert_eq!(counter.0.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn scopes_are_independent() {
        let store = ScopedStore::new();
        store.reconcile_insert(1, Item { id: 5, label: "a" });
        store.reconcile_insert(2, Item { id: 5, label: "b" });
        assert_eq!(store.snapshot(1).len(), 1);
        assert_eq!(store.snapshot(2).len(), 1);
        store.reconcile_remove(1, 5);
        assert!(store.is_empty(1));
        assert_eq!(store.len(2), 1);
    }
}
