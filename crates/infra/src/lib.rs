//! Infrastructure layer: entry persistence and process configuration.

pub mod config;
pub mod entry_store;

pub use config::{AppConfig, ConfigError};
pub use entry_store::{EntryStore, InMemoryEntryStore, PostgresEntryStore, StoreError};
