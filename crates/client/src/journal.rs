//! Local mirror of the server's entry list plus draft/edit state.

use gratitude_core::{Entity, Entry, EntryId, is_blank};
use tracing::warn;

use crate::api::EntriesApi;
use crate::types::{EditSession, Intent, Outcome};

/// Journal state owned by one view.
///
/// `entries` is only as fresh as the last successful response: it is
/// replaced wholesale by [`Journal::load`] and patched by id after each
/// successful create/update/delete. Failed calls leave it untouched.
#[derive(Debug)]
pub struct Journal<A> {
    api: A,
    entries: Vec<Entry>,
    draft: String,
    editing: Option<EditSession>,
}

impl<A: EntriesApi> Journal<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            entries: Vec::new(),
            draft: String::new(),
            editing: None,
        }
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    /// Apply one intent from the view.
    pub async fn dispatch(&mut self, intent: Intent) -> Outcome {
        match intent {
            Intent::Load => self.load().await,
            Intent::SetDraft(text) => self.set_draft(text),
            Intent::Add => self.add().await,
            Intent::StartEdit(id) => self.start_edit(id),
            Intent::SetEditText(text) => self.set_edit_text(text),
            Intent::CommitEdit => self.commit_edit().await,
            Intent::CancelEdit => self.cancel_edit(),
            Intent::Delete(id) => self.delete(id).await,
        }
    }

    /// Replace the local list with the server's.
    pub async fn load(&mut self) -> Outcome {
        match self.api.list().await {
            Ok(mut entries) => {
                entries.sort_by(Entry::newest_first);
                self.entries = entries;
                Outcome::Applied
            }
            Err(e) => {
                warn!("failed to load entries: {e}");
                Outcome::Failed
            }
        }
    }

    pub fn set_draft(&mut self, text: impl Into<String>) -> Outcome {
        self.draft = text.into();
        Outcome::Applied
    }

    /// Submit the draft. Blank drafts never reach the server.
    pub async fn add(&mut self) -> Outcome {
        if is_blank(&self.draft) {
            return Outcome::Ignored;
        }

        match self.api.create(&self.draft).await {
            Ok(entry) => {
                self.entries.insert(0, entry);
                self.draft.clear();
                Outcome::Applied
            }
            Err(e) => {
                warn!("failed to add entry: {e}");
                Outcome::Failed
            }
        }
    }

    /// Enter edit mode on `id`, abandoning any other unsaved edit.
    pub fn start_edit(&mut self, id: EntryId) -> Outcome {
        let Some(entry) = self.entries.iter().find(|e| e.id() == &id) else {
            return Outcome::Ignored;
        };

        self.editing = Some(EditSession {
            id,
            text: entry.text.clone(),
        });
        Outcome::Applied
    }

    pub fn set_edit_text(&mut self, text: impl Into<String>) -> Outcome {
        match self.editing.as_mut() {
            Some(session) => {
                session.text = text.into();
                Outcome::Applied
            }
            None => Outcome::Ignored,
        }
    }

    /// Save the edit session. On failure the session stays open.
    pub async fn commit_edit(&mut self) -> Outcome {
        let Some(session) = self.editing.as_ref() else {
            return Outcome::Ignored;
        };
        if is_blank(&session.text) {
            return Outcome::Ignored;
        }

        match self.api.update(session.id, &session.text).await {
            Ok(updated) => {
                if let Some(slot) = self.entries.iter_mut().find(|e| e.same_identity(&updated)) {
                    *slot = updated;
                }
                self.editing = None;
                Outcome::Applied
            }
            Err(e) => {
                warn!(entry_id = %session.id, "failed to update entry: {e}");
                Outcome::Failed
            }
        }
    }

    pub fn cancel_edit(&mut self) -> Outcome {
        match self.editing.take() {
            Some(_) => Outcome::Applied,
            None => Outcome::Ignored,
        }
    }

    pub async fn delete(&mut self, id: EntryId) -> Outcome {
        match self.api.delete(id).await {
            Ok(()) => {
                self.entries.retain(|e| e.id() != &id);
                Outcome::Applied
            }
            Err(e) => {
                warn!(entry_id = %id, "failed to delete entry: {e}");
                Outcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ClientError;
    use chrono::{Duration, Utc};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Server stand-in: keeps entries newest first and can be told to fail.
    #[derive(Default)]
    struct FakeApi {
        entries: Mutex<Vec<Entry>>,
        failing: AtomicBool,
        calls: AtomicUsize,
    }

    impl FakeApi {
        fn with_entries(entries: Vec<Entry>) -> Arc<Self> {
            Arc::new(Self {
                entries: Mutex::new(entries),
                ..Self::default()
            })
        }

        fn fail(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn begin(&self) -> Result<(), ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.load(Ordering::SeqCst) {
                Err(ClientError::Api(500, "boom".into()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait::async_trait]
    impl EntriesApi for FakeApi {
        async fn list(&self) -> Result<Vec<Entry>, ClientError> {
            self.begin()?;
            Ok(self.entries.lock().unwrap().clone())
        }

        async fn create(&self, text: &str) -> Result<Entry, ClientError> {
            self.begin()?;
            let entry = Entry::new(EntryId::new(), text, Utc::now());
            self.entries.lock().unwrap().insert(0, entry.clone());
            Ok(entry)
        }

        async fn update(&self, id: EntryId, text: &str) -> Result<Entry, ClientError> {
            self.begin()?;
            let mut entries = self.entries.lock().unwrap();
            let entry = entries
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or_else(|| ClientError::Api(404, "Entry not found".into()))?;
            entry.text = text.to_string();
            Ok(entry.clone())
        }

        async fn delete(&self, id: EntryId) -> Result<(), ClientError> {
            self.begin()?;
            let mut entries = self.entries.lock().unwrap();
            let before = entries.len();
            entries.retain(|e| e.id != id);
            if entries.len() == before {
                return Err(ClientError::Api(404, "Entry not found".into()));
            }
            Ok(())
        }
    }

    fn texts<A: EntriesApi>(journal: &Journal<A>) -> Vec<&str> {
        journal.entries().iter().map(|e| e.text.as_str()).collect()
    }

    fn seeded() -> (Arc<FakeApi>, Vec<Entry>) {
        let now = Utc::now();
        let entries = vec![
            Entry::new(EntryId::new(), "Grateful for sun", now),
            Entry::new(EntryId::new(), "Grateful for coffee", now - Duration::minutes(5)),
        ];
        (FakeApi::with_entries(entries.clone()), entries)
    }

    #[tokio::test]
    async fn load_replaces_entries_newest_first() {
        let now = Utc::now();
        let older = Entry::new(EntryId::new(), "older", now - Duration::hours(1));
        let newer = Entry::new(EntryId::new(), "newer", now);
        // Server order deliberately reversed.
        let api = FakeApi::with_entries(vec![older, newer]);

        let mut journal = Journal::new(api);
        assert_eq!(journal.load().await, Outcome::Applied);
        assert_eq!(texts(&journal), vec!["newer", "older"]);
    }

    #[tokio::test]
    async fn failed_initial_load_leaves_list_empty() {
        let (api, _) = seeded();
        api.fail(true);

        let mut journal = Journal::new(api.clone());
        assert_eq!(journal.load().await, Outcome::Failed);
        assert!(journal.entries().is_empty());
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn add_prepends_and_clears_draft() {
        let (api, _) = seeded();
        let mut journal = Journal::new(api);
        journal.load().await;

        journal.set_draft("Grateful for rain");
        assert_eq!(journal.add().await, Outcome::Applied);

        assert_eq!(journal.draft(), "");
        assert_eq!(
            texts(&journal),
            vec!["Grateful for rain", "Grateful for sun", "Grateful for coffee"]
        );
    }

    #[tokio::test]
    async fn blank_draft_never_calls_the_server() {
        let api = FakeApi::with_entries(vec![]);
        let mut journal = Journal::new(api.clone());

        for draft in ["", "   ", "\n\t"] {
            journal.set_draft(draft);
            assert_eq!(journal.add().await, Outcome::Ignored);
        }
        assert_eq!(api.calls(), 0);
        assert!(journal.entries().is_empty());
    }

    #[tokio::test]
    async fn failed_add_keeps_draft_and_list() {
        let (api, _) = seeded();
        let mut journal = Journal::new(api.clone());
        journal.load().await;

        api.fail(true);
        journal.set_draft("Grateful for rain");
        assert_eq!(journal.add().await, Outcome::Failed);

        assert_eq!(journal.draft(), "Grateful for rain");
        assert_eq!(texts(&journal), vec!["Grateful for sun", "Grateful for coffee"]);
    }

    #[tokio::test]
    async fn edit_round_trip_replaces_entry_in_place() {
        let (api, seeded) = seeded();
        let target = seeded[1].clone();
        let mut journal = Journal::new(api);
        journal.load().await;

        assert_eq!(journal.start_edit(target.id), Outcome::Applied);
        assert_eq!(journal.editing().unwrap().text, "Grateful for coffee");

        journal.set_edit_text("Grateful for strong coffee");
        assert_eq!(journal.commit_edit().await, Outcome::Applied);

        assert!(journal.editing().is_none());
        assert_eq!(texts(&journal), vec!["Grateful for sun", "Grateful for strong coffee"]);
        assert_eq!(journal.entries()[1].id, target.id);
        assert_eq!(journal.entries()[1].created_at, target.created_at);
    }

    #[tokio::test]
    async fn starting_a_second_edit_abandons_the_first() {
        let (api, seeded) = seeded();
        let mut journal = Journal::new(api);
        journal.load().await;

        journal.start_edit(seeded[0].id);
        journal.set_edit_text("unsaved");
        journal.start_edit(seeded[1].id);

        let session = journal.editing().unwrap();
        assert_eq!(session.id, seeded[1].id);
        assert_eq!(session.text, "Grateful for coffee");
        assert_eq!(texts(&journal), vec!["Grateful for sun", "Grateful for coffee"]);
    }

    #[tokio::test]
    async fn blank_edit_is_not_committed() {
        let (api, seeded) = seeded();
        let mut journal = Journal::new(api.clone());
        journal.load().await;
        let calls_after_load = api.calls();

        journal.start_edit(seeded[0].id);
        journal.set_edit_text("   ");
        assert_eq!(journal.commit_edit().await, Outcome::Ignored);

        assert_eq!(api.calls(), calls_after_load);
        assert!(journal.editing().is_some());
    }

    #[tokio::test]
    async fn failed_commit_keeps_session_open() {
        let (api, seeded) = seeded();
        let mut journal = Journal::new(api.clone());
        journal.load().await;

        journal.start_edit(seeded[0].id);
        journal.set_edit_text("changed");
        api.fail(true);
        assert_eq!(journal.commit_edit().await, Outcome::Failed);

        assert_eq!(
            journal.editing(),
            Some(&EditSession {
                id: seeded[0].id,
                text: "changed".into()
            })
        );
        assert_eq!(texts(&journal), vec!["Grateful for sun", "Grateful for coffee"]);

        api.fail(false);
        assert_eq!(journal.commit_edit().await, Outcome::Applied);
        assert_eq!(texts(&journal), vec!["changed", "Grateful for coffee"]);
    }

    #[tokio::test]
    async fn edit_intents_without_a_session_are_ignored() {
        let (api, _) = seeded();
        let mut journal = Journal::new(api);
        journal.load().await;

        assert_eq!(journal.set_edit_text("x"), Outcome::Ignored);
        assert_eq!(journal.commit_edit().await, Outcome::Ignored);
        assert_eq!(journal.cancel_edit(), Outcome::Ignored);
        assert_eq!(journal.start_edit(EntryId::new()), Outcome::Ignored);
    }

    #[tokio::test]
    async fn cancel_drops_unsaved_text() {
        let (api, seeded) = seeded();
        let mut journal = Journal::new(api);
        journal.load().await;

        journal.start_edit(seeded[0].id);
        journal.set_edit_text("unsaved");
        assert_eq!(journal.cancel_edit(), Outcome::Applied);

        assert!(journal.editing().is_none());
        assert_eq!(journal.entries()[0].text, "Grateful for sun");
    }

    #[tokio::test]
    async fn delete_removes_only_on_success() {
        let (api, seeded) = seeded();
        let mut journal = Journal::new(api.clone());
        journal.load().await;

        api.fail(true);
        assert_eq!(journal.delete(seeded[0].id).await, Outcome::Failed);
        assert_eq!(journal.entries().len(), 2);

        api.fail(false);
        assert_eq!(journal.delete(seeded[0].id).await, Outcome::Applied);
        assert_eq!(texts(&journal), vec!["Grateful for coffee"]);

        // Already gone on the server: 404, local list untouched.
        assert_eq!(journal.delete(seeded[0].id).await, Outcome::Failed);
        assert_eq!(texts(&journal), vec!["Grateful for coffee"]);
    }

    #[tokio::test]
    async fn dispatch_routes_every_intent() {
        let api = FakeApi::with_entries(vec![]);
        let mut journal = Journal::new(api);

        assert_eq!(journal.dispatch(Intent::Load).await, Outcome::Applied);
        journal.dispatch(Intent::SetDraft("Grateful for friends".into())).await;
        assert_eq!(journal.dispatch(Intent::Add).await, Outcome::Applied);

        let id = journal.entries()[0].id;
        journal.dispatch(Intent::StartEdit(id)).await;
        journal.dispatch(Intent::SetEditText("Grateful for old friends".into())).await;
        assert_eq!(journal.dispatch(Intent::CommitEdit).await, Outcome::Applied);
        assert_eq!(texts(&journal), vec!["Grateful for old friends"]);

        journal.dispatch(Intent::StartEdit(id)).await;
        assert_eq!(journal.dispatch(Intent::CancelEdit).await, Outcome::Applied);

        assert_eq!(journal.dispatch(Intent::Delete(id)).await, Outcome::Applied);
        assert!(journal.entries().is_empty());
    }
}
