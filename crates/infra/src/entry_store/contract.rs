//! Behaviour every [`EntryStore`] must share, run against each backend.
//!
//! Checks only look at entries the check itself created, so they also hold
//! against a database that already has rows in it.

use gratitude_core::{Entry, EntryId};

use super::r#trait::EntryStore;

/// Entries from `find_all` whose ids are in `ids`, in listing order.
async fn listed(store: &dyn EntryStore, ids: &[EntryId]) -> Vec<Entry> {
    store
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .filter(|e| ids.contains(&e.id))
        .collect()
}

fn texts(entries: &[Entry]) -> Vec<&str> {
    entries.iter().map(|e| e.text.as_str()).collect()
}

pub(crate) async fn insert_assigns_distinct_ids(store: &dyn EntryStore) {
    let a = store.insert("a".into()).await.unwrap();
    let b = store.insert("b".into()).await.unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(a.text, "a");
}

pub(crate) async fn find_all_lists_newest_first(store: &dyn EntryStore) {
    let coffee = store.insert("Grateful for coffee".into()).await.unwrap();
    let sun = store.insert("Grateful for sun".into()).await.unwrap();

    let all = listed(store, &[coffee.id, sun.id]).await;
    assert_eq!(texts(&all), vec!["Grateful for sun", "Grateful for coffee"]);
}

pub(crate) async fn update_keeps_id_timestamp_and_position(store: &dyn EntryStore) {
    let first = store.insert("A".into()).await.unwrap();
    let second = store.insert("second".into()).await.unwrap();

    let updated = store
        .find_by_id_and_update(first.id, "B".into())
        .await
        .unwrap()
        .expect("entry exists");

    assert_eq!(updated.id, first.id);
    assert_eq!(updated.created_at, first.created_at);
    assert_eq!(updated.text, "B");

    let all = listed(store, &[first.id, second.id]).await;
    assert_eq!(all, vec![second, updated]);
}

pub(crate) async fn unknown_ids_are_none(store: &dyn EntryStore) {
    let kept = store.insert("kept".into()).await.unwrap();

    let missing = EntryId::new();
    assert!(store.find_by_id_and_update(missing, "x".into()).await.unwrap().is_none());
    assert!(store.find_by_id_and_delete(missing).await.unwrap().is_none());
    assert_eq!(listed(store, &[kept.id]).await, vec![kept]);
}

pub(crate) async fn delete_removes_once(store: &dyn EntryStore) {
    let entry = store.insert("bye".into()).await.unwrap();

    assert_eq!(store.find_by_id_and_delete(entry.id).await.unwrap(), Some(entry.clone()));
    assert_eq!(store.find_by_id_and_delete(entry.id).await.unwrap(), None);
    assert!(listed(store, &[entry.id]).await.is_empty());
    assert!(store.find_by_id_and_update(entry.id, "back".into()).await.unwrap().is_none());
}

/// Run every check above against `store`.
pub(crate) async fn run_all(store: &dyn EntryStore) {
    insert_assigns_distinct_ids(store).await;
    find_all_lists_newest_first(store).await;
    update_keeps_id_timestamp_and_position(store).await;
    unknown_ids_are_none(store).await;
    delete_removes_once(store).await;
}
