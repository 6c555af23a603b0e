//! Entry persistence boundary.
//!
//! The service layer talks to an [`EntryStore`] only; which backend sits
//! behind it is decided once at startup by [`connect`].

pub mod in_memory;
pub mod postgres;
pub mod r#trait;

#[cfg(test)]
pub(crate) mod contract;

use std::sync::Arc;

pub use in_memory::InMemoryEntryStore;
pub use postgres::PostgresEntryStore;
pub use r#trait::{EntryStore, StoreError};

use crate::config::AppConfig;

/// Build the store selected by configuration.
///
/// With a `DATABASE_URL` this connects to Postgres (and creates the table if
/// missing); without one it falls back to a process-local in-memory store.
pub async fn connect(config: &AppConfig) -> Result<Arc<dyn EntryStore>, StoreError> {
    match config.database_url.as_deref() {
        Some(url) => {
            let store = PostgresEntryStore::connect(url).await?;
            tracing::info!("using postgres entry store");
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; entries are kept in memory and lost on restart");
            Ok(Arc::new(InMemoryEntryStore::new()))
        }
    }
}
