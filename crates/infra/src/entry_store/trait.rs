use std::sync::Arc;

use thiserror::Error;

use gratitude_core::{Entry, EntryId};

/// Entry store operation error.
///
/// These are **infrastructure errors** (connectivity, queries, decoding) as
/// opposed to domain errors. "Not found" is not an error here: lookups by id
/// return `Ok(None)` and the caller decides what that means.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store connection failed: {0}")]
    Connection(String),

    #[error("store query failed: {0}")]
    Query(String),

    #[error("stored entry could not be decoded: {0}")]
    Decode(String),

    #[error("store state is unavailable: {0}")]
    Unavailable(String),
}

/// Persistence contract for journal entries.
///
/// Implementations must:
/// - assign a fresh unique id and `created_at = now` on insert
/// - return `find_all` ordered by `created_at` descending (ties: newest insert first)
/// - never change `id` or `created_at` on update
/// - make each call atomic on its own; no cross-call transactions are implied
#[async_trait::async_trait]
pub trait EntryStore: Send + Sync {
    /// Persist a new entry with the given text.
    async fn insert(&self, text: String) -> Result<Entry, StoreError>;

    /// All entries, newest first.
    async fn find_all(&self) -> Result<Vec<Entry>, StoreError>;

    /// Replace the text of an entry. `Ok(None)` if no entry has this id.
    async fn find_by_id_and_update(
        &self,
        id: EntryId,
        text: String,
    ) -> Result<Option<Entry>, StoreError>;

    /// Remove an entry, returning it. `Ok(None)` if no entry has this id.
    async fn find_by_id_and_delete(&self, id: EntryId) -> Result<Option<Entry>, StoreError>;
}

#[async_trait::async_trait]
impl<S> EntryStore for Arc<S>
where
    S: EntryStore + ?Sized,
{
    async fn insert(&self, text: String) -> Result<Entry, StoreError> {
        (**self).insert(text).await
    }

    async fn find_all(&self) -> Result<Vec<Entry>, StoreError> {
        (**self).find_all().await
    }

    async fn find_by_id_and_update(
        &self,
        id: EntryId,
        text: String,
    ) -> Result<Option<Entry>, StoreError> {
        (**self).find_by_id_and_update(id, text).await
    }

    async fn find_by_id_and_delete(&self, id: EntryId) -> Result<Option<Entry>, StoreError> {
        (**self).find_by_id_and_delete(id).await
    }
}
