//! `gratitude-core` — journal domain primitives.
//!
//! This crate contains **pure domain** types (no infrastructure concerns).

pub mod entity;
pub mod entry;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use entry::{Entry, is_blank, validate_new_text};
pub use error::{DomainError, DomainResult};
pub use id::EntryId;
