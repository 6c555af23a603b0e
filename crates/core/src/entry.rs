//! The journal entry and its text rules.

use core::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::id::EntryId;

/// A single persisted journal note.
///
/// `id` and `created_at` are assigned by the store and never change;
/// only `text` is mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    pub fn new(id: EntryId, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            created_at,
        }
    }

    /// Ordering for listings: newest `created_at` first.
    pub fn newest_first(a: &Entry, b: &Entry) -> Ordering {
        b.created_at.cmp(&a.created_at)
    }
}

impl Entity for Entry {
    type Id = EntryId;

    fn id(&self) -> &EntryId {
        &self.id
    }
}

/// True if `text` is empty or whitespace only.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Validate text for a brand new entry.
///
/// Only creation rejects blank text; updates accept any present string.
pub fn validate_new_text(text: Option<&str>) -> DomainResult<&str> {
    match text {
        Some(t) if !is_blank(t) => Ok(t),
        _ => Err(DomainError::validation("Text is required")),
    }
}
