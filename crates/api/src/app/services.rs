//! Entry service: the stateless layer between HTTP handlers and the store.
//!
//! Every operation consults the store directly and maps its failures at the
//! operation boundary; raw store errors never leave this module.

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use gratitude_core::{DomainError, Entry, EntryId, validate_new_text};
use gratitude_infra::{EntryStore, InMemoryEntryStore, StoreError};

/// Failure of a service operation, already classified for the transport.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing or empty required input (client fault).
    #[error("{0}")]
    Validation(String),

    /// No entry has the requested id.
    #[error("Entry not found")]
    NotFound,

    /// The store failed; `context` is the generic message shown to clients.
    #[error("{context}")]
    Store {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            // An id that does not parse cannot match any entry.
            DomainError::InvalidId(_) => Self::NotFound,
        }
    }
}

/// Stateless entry operations over an injected store.
pub struct EntryService {
    store: Arc<dyn EntryStore>,
}

impl EntryService {
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self { store }
    }

    /// Service over a fresh in-memory store (dev/tests).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryEntryStore::new()))
    }

    /// All entries, newest first.
    pub async fn list(&self) -> Result<Vec<Entry>, ServiceError> {
        self.store
            .find_all()
            .await
            .map_err(|e| store_failure("Failed to fetch entries", e))
    }

    /// Create an entry. `text` must be present and not blank.
    pub async fn create(&self, text: Option<String>) -> Result<Entry, ServiceError> {
        validate_new_text(text.as_deref())?;
        let text = text.unwrap_or_default();

        let entry = self
            .store
            .insert(text)
            .await
            .map_err(|e| store_failure("Failed to save entry", e))?;

        info!(entry_id = %entry.id, "entry created");
        Ok(entry)
    }

    /// Replace an entry's text. `text` must be present but may be blank.
    pub async fn update(&self, id: &str, text: Option<String>) -> Result<Entry, ServiceError> {
        let text = text.ok_or_else(|| DomainError::validation("Text is required"))?;
        let id: EntryId = id.parse()?;

        let entry = self
            .store
            .find_by_id_and_update(id, text)
            .await
            .map_err(|e| store_failure("Failed to update entry", e))?
            .ok_or(ServiceError::NotFound)?;

        info!(entry_id = %entry.id, "entry updated");
        Ok(entry)
    }

    /// Hard-delete an entry.
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let id: EntryId = id.parse()?;

        self.store
            .find_by_id_and_delete(id)
            .await
            .map_err(|e| store_failure("Server error deleting entry", e))?
            .ok_or(ServiceError::NotFound)?;

        info!(entry_id = %id, "entry deleted");
        Ok(())
    }
}

fn store_failure(context: &'static str, source: StoreError) -> ServiceError {
    error!(error = %source, "{context}");
    ServiceError::Store { context, source }
}
