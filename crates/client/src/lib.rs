//! `gratitude-client`
//!
//! **Responsibility:** the client side of the journal.
//!
//! This crate provides:
//! - An HTTP binding to the entry API ([`HttpEntriesApi`])
//! - A local mirror of the entry list with draft and edit state ([`Journal`])
//! - The intents a view layer emits to drive it ([`Intent`])
//!
//! The server remains the authority; the journal only mirrors what the last
//! successful response said.

pub mod api;
pub mod journal;
pub mod types;

pub use api::{ClientError, EntriesApi, HttpEntriesApi};
pub use journal::Journal;
pub use types::{EditSession, Intent, Outcome};
