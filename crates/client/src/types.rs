//! Plain data exchanged between the journal and whatever view renders it.

use gratitude_core::EntryId;

/// The single entry currently being edited, with its unsaved text.
///
/// Holding this as one optional value (rather than a flag per entry) means at
/// most one entry can be in edit mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: EntryId,
    pub text: String,
}

/// A user action emitted by the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Fetch the entry list from the server.
    Load,
    /// The new-entry input changed.
    SetDraft(String),
    /// Submit the draft as a new entry.
    Add,
    /// Enter edit mode on an entry.
    StartEdit(EntryId),
    /// The edit input changed.
    SetEditText(String),
    /// Save the edit session.
    CommitEdit,
    /// Leave edit mode without saving.
    CancelEdit,
    /// Remove an entry.
    Delete(EntryId),
}

/// What applying an intent did to local state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed.
    Applied,
    /// Nothing to do (blank input, no edit session, unknown entry).
    Ignored,
    /// The server call failed; state is unchanged.
    Failed,
}
