//! Note service and shared request state.

use std::sync::Arc;

use scrawl_core::{Note, NoteDraft, NotePatch};
use scrawl_surrealdb::{NoteStore, StoreResult};

/// State shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<NoteService>,
}

impl AppState {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self {
            service: Arc::new(NoteService::new(store)),
        }
    }
}

/// Thin orchestration layer between handlers and the store.
///
/// Each method is a single round-trip to the persistence adapter; validation
/// happens before the service is called, and no result is cached. The service
/// exists so handlers depend on note operations rather than on the store
/// trait directly.
pub struct NoteService {
    store: Arc<dyn NoteStore>,
}

impl NoteService {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    /// Persist a new note from already-validated fields.
    pub async fn create_note(&self, draft: &NoteDraft) -> StoreResult<Note> {
        self.store.create(draft).await
    }

    /// Fetch a note, `None` when the id is unknown or malformed.
    pub async fn fetch_note_by_id(&self, id: &str) -> StoreResult<Option<Note>> {
        self.store.find_by_id(id).await
    }

    /// Case-insensitive title substring search; no match yields an empty vec.
    pub async fn query_notes_by_title(&self, fragment: &str) -> StoreResult<Vec<Note>> {
        self.store.find_by_title(fragment).await
    }

    /// Merge the provided fields and refresh `updatedAt`; `None` when the id
    /// does not exist.
    pub async fn update_note(&self, id: &str, patch: &NotePatch) -> StoreResult<Option<Note>> {
        self.store.update(id, patch).await
    }

    /// Remove a note, returning it, or `None` when the id does not exist.
    pub async fn delete_note_by_id(&self, id: &str) -> StoreResult<Option<Note>> {
        self.store.delete(id).await
    }
}
