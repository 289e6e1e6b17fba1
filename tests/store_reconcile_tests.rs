//! Idempotence and scoping of the shared entity store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use split_core::domain::{EntityId, InviteToken};
use split_core::store::{ScopedStore, StoreObserver};

fn token(id: EntityId, group_id: EntityId, description: &str) -> InviteToken {
    InviteToken {
        id,
        group_id,
        token: format!("tok-{id}"),
        description: description.into(),
        valid_until: None,
        single_use: false,
    }
}

#[test]
fn double_insert_keeps_one_entity_with_latest_fields() {
    let store = ScopedStore::new();
    store.reconcile_insert(1, token(42, 1, "first"));
    store.reconcile_insert(1, token(42, 1, "second"));

    let snapshot = store.snapshot(1);
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].description, "second");
}

#[test]
fn removing_a_missing_id_changes_nothing() {
    let store = ScopedStore::new();
    store.reconcile_insert(1, token(42, 1, "kept"));

    store.reconcile_remove(1, 999);
    store.reconcile_remove(2, 42);

    let snapshot = store.snapshot(1);
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id, 42);
}

#[test]
fn replacement_preserves_collection_order() {
    let store = ScopedStore::new();
    store.reconcile_insert(1, token(1, 1, "a"));
    store.reconcile_insert(1, token(2, 1, "b"));
    store.reconcile_insert(1, token(3, 1, "c"));
    store.reconcile_insert(1, token(2, 1, "b2"));

    let ids: Vec<EntityId> = store.snapshot(1).iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

struct ScopeRecorder {
    hits: AtomicUsize,
    expected: EntityId,
}

impl StoreObserver for ScopeRecorder {
    fn scope_changed(&self, parent: EntityId) {
        assert_eq!(parent, self.expected);
        self.hits.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn observers_learn_which_scope_changed() {
    let store = ScopedStore::new();
    let recorder = Arc::new(ScopeRecorder {
        hits: AtomicUsize::new(0),
        expected: 7,
    });
    store.subscribe(recorder.clone());

    store.reconcile_insert(7, token(1, 7, "a"));
    store.reconcile_remove(7, 1);
    // Misses do not notify.
    store.reconcile_remove(7, 1);

    assert_eq!(recorder.hits.load(Ordering::SeqCst), 2);
}
