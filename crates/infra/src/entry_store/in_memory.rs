use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use gratitude_core::{Entry, EntryId};

use super::r#trait::{EntryStore, StoreError};

#[derive(Debug, Clone)]
struct StoredEntry {
    entry: Entry,
    /// Insertion order; breaks ties between identical timestamps.
    seq: u64,
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<EntryId, StoredEntry>,
    next_seq: u64,
}

/// In-memory entry store.
///
/// Intended for tests/dev and as the fallback when no database is
/// configured. Every call takes the lock exactly once, so each operation is
/// atomic on its own.
#[derive(Debug, Default)]
pub struct InMemoryEntryStore {
    inner: RwLock<Inner>,
}

impl InMemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned<T>(_: T) -> StoreError {
        StoreError::Unavailable("in-memory entry store lock poisoned".to_string())
    }
}

#[async_trait::async_trait]
impl EntryStore for InMemoryEntryStore {
    async fn insert(&self, text: String) -> Result<Entry, StoreError> {
        let mut inner = self.inner.write().map_err(Self::poisoned)?;

        let entry = Entry::new(EntryId::new(), text, Utc::now());
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.entries.insert(
            entry.id,
            StoredEntry {
                entry: entry.clone(),
                seq,
            },
        );

        Ok(entry)
    }

    async fn find_all(&self) -> Result<Vec<Entry>, StoreError> {
        let inner = self.inner.read().map_err(Self::poisoned)?;

        let mut rows: Vec<&StoredEntry> = inner.entries.values().collect();
        rows.sort_by_key(|r| Reverse((r.entry.created_at, r.seq)));

        Ok(rows.into_iter().map(|r| r.entry.clone()).collect())
    }

    async fn find_by_id_and_update(
        &self,
        id: EntryId,
        text: String,
    ) -> Result<Option<Entry>, StoreError> {
        let mut inner = self.inner.write().map_err(Self::poisoned)?;

        Ok(inner.entries.get_mut(&id).map(|row| {
            row.entry.text = text;
            row.entry.clone()
        }))
    }

    async fn find_by_id_and_delete(&self, id: EntryId) -> Result<Option<Entry>, StoreError> {
        let mut inner = self.inner.write().map_err(Self::poisoned)?;
        Ok(inner.entries.remove(&id).map(|row| row.entry))
    }
}
