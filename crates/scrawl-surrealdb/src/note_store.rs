//! Trait abstraction for note persistence.
//!
//! `NoteStore` defines the five operations the service layer needs. The
//! interface is deliberately minimal: one method per endpoint, each a single
//! round-trip, with absence expressed as `Option` rather than an error so
//! handlers can turn it into a 404. Implementations own id generation and
//! both timestamps.

use async_trait::async_trait;
use scrawl_core::{Note, NoteDraft, NotePatch};
use thiserror::Error;

/// Error type for note persistence operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(#[from] surrealdb::Error),

    #[error("corrupted record: {0}")]
    Corrupted(String),

    #[error("{0} returned no record")]
    MissingResult(&'static str),
}

/// Result type for note persistence operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Minimal interface for note storage.
///
/// Malformed or unknown ids are plain misses (`Ok(None)`), never errors: the
/// store treats the id as an opaque key and does not validate its shape.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Persist a new note. The store assigns the id and sets both
    /// timestamps to the same instant.
    async fn create(&self, draft: &NoteDraft) -> StoreResult<Note>;

    /// Fetch a note by id.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Note>>;

    /// Fetch every note whose title contains `fragment`, case-insensitively,
    /// in no particular order. No match yields an empty vec.
    async fn find_by_title(&self, fragment: &str) -> StoreResult<Vec<Note>>;

    /// Atomically merge the provided fields into the note and refresh
    /// `updated_at`. Fields absent from the patch keep their stored value.
    /// Returns `None` when the id does not exist.
    async fn update(&self, id: &str, patch: &NotePatch) -> StoreResult<Option<Note>>;

    /// Atomically remove the note, returning it, or `None` when the id does
    /// not exist.
    async fn delete(&self, id: &str) -> StoreResult<Option<Note>>;
}
