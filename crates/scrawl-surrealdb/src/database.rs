//! SurrealDB implementation of the note store.
//!
//! Connects through `surrealdb::engine::any`, so the backend is chosen by the
//! connection string: `mem://` for an in-process database, `rocksdb://path`
//! for embedded persistence, `ws://host:port` for a remote server.
//!
//! Records keep their timestamps as RFC 3339 strings and are converted to
//! the domain type at this boundary; the record key doubles as the note id.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use scrawl_core::{Note, NoteDraft, NotePatch};
use serde::{Deserialize, Serialize};
use surrealdb::engine::any::{connect, Any};
use surrealdb::sql::Thing;
use surrealdb::Surreal;

use crate::note_store::{NoteStore, StoreError, StoreResult};

const NOTE_TABLE: &str = "note";

const TITLE_QUERY: &str = "SELECT * FROM type::table($table) \
     WHERE string::lowercase(title) CONTAINS string::lowercase($fragment)";

/// Connection settings for [`SurrealNoteStore`].
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: String,
    pub namespace: String,
    pub database: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: "mem://".to_string(),
            namespace: "scrawl".to_string(),
            database: "notes".to_string(),
        }
    }
}

/// Wire representation of a note inside SurrealDB.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct NoteRecord {
    id: Thing,
    title: String,
    body: String,
    created_at: String,
    updated_at: String,
}

/// Payload for record creation; SurrealDB assigns the id.
#[derive(Debug, Serialize)]
struct NoteContent {
    title: String,
    body: String,
    created_at: String,
    updated_at: String,
}

/// Merge payload for updates; omitted fields are left untouched.
#[derive(Debug, Serialize)]
struct NoteMerge {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<String>,
    updated_at: String,
}

impl TryFrom<NoteRecord> for Note {
    type Error = StoreError;

    fn try_from(record: NoteRecord) -> StoreResult<Note> {
        Ok(Note {
            id: record.id.id.to_raw(),
            title: record.title,
            body: record.body,
            created_at: parse_timestamp(&record.created_at)?,
            updated_at: parse_timestamp(&record.updated_at)?,
        })
    }
}

fn parse_timestamp(raw: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::Corrupted(format!("bad timestamp {raw:?}: {e}")))
}

/// Note store backed by SurrealDB.
#[derive(Debug, Clone)]
pub struct SurrealNoteStore {
    db: Surreal<Any>,
}

impl SurrealNoteStore {
    /// Open a connection and select the configured namespace and database.
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let db = connect(&config.url).await.map_err(|e| {
            StoreError::Connection(format!("failed to open {}: {e}", config.url))
        })?;

        db.use_ns(&config.namespace)
            .use_db(&config.database)
            .await
            .map_err(|e| {
                StoreError::Connection(format!(
                    "failed to select namespace '{}' database '{}': {e}",
                    config.namespace, config.database
                ))
            })?;

        tracing::debug!(
            "opened document store at {} ({}/{})",
            config.url,
            config.namespace,
            config.database
        );
        Ok(Self { db })
    }
}

#[async_trait]
impl NoteStore for SurrealNoteStore {
    async fn create(&self, draft: &NoteDraft) -> StoreResult<Note> {
        let now = Utc::now().to_rfc3339();
        let record: Option<NoteRecord> = self
            .db
            .create(NOTE_TABLE)
            .content(NoteContent {
                title: draft.title.clone(),
                body: draft.body.clone(),
                created_at: now.clone(),
                updated_at: now,
            })
            .await?;

        record
            .ok_or(StoreError::MissingResult("create"))
            .and_then(Note::try_from)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Note>> {
        let record: Option<NoteRecord> = self.db.select((NOTE_TABLE, id)).await?;
        record.map(Note::try_from).transpose()
    }

    async fn find_by_title(&self, fragment: &str) -> StoreResult<Vec<Note>> {
        let mut response = self
            .db
            .query(TITLE_QUERY)
            .bind(("table", NOTE_TABLE))
            .bind(("fragment", fragment.to_string()))
            .await?;

        let records: Vec<NoteRecord> = response.take(0)?;
        records.into_iter().map(Note::try_from).collect()
    }

    async fn update(&self, id: &str, patch: &NotePatch) -> StoreResult<Option<Note>> {
        let record: Option<NoteRecord> = self
            .db
            .update((NOTE_TABLE, id))
            .merge(NoteMerge {
                title: patch.title.clone(),
                body: patch.body.clone(),
                updated_at: Utc::now().to_rfc3339(),
            })
            .await?;

        record.map(Note::try_from).transpose()
    }

    async fn delete(&self, id: &str) -> StoreResult<Option<Note>> {
        let record: Option<NoteRecord> = self.db.delete((NOTE_TABLE, id)).await?;
        record.map(Note::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> SurrealNoteStore {
        SurrealNoteStore::connect(&StoreConfig::default())
            .await
            .expect("in-memory store should connect")
    }

    fn draft(title: &str, body: &str) -> NoteDraft {
        NoteDraft {
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_timestamps() {
        let store = memory_store().await;
        let note = store
            .create(&draft("Test Note", "This is a test note."))
            .await
            .expect("create should succeed");

        assert!(!note.id.is_empty());
        assert_eq!(note.title, "Test Note");
        assert_eq!(note.body, "This is a test note.");
        assert_eq!(note.created_at, note.updated_at);
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids() {
        let store = memory_store().await;
        let first = store.create(&draft("First", "hello world")).await.unwrap();
        let second = store.create(&draft("Second", "hello world")).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn find_by_id_roundtrip() {
        let store = memory_store().await;
        let created = store
            .create(&draft("Sample Note", "Sample body"))
            .await
            .unwrap();

        let found = store
            .find_by_id(&created.id)
            .await
            .expect("lookup should succeed")
            .expect("note should exist");
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn find_by_id_miss_is_none() {
        let store = memory_store().await;
        let missing = store.find_by_id("nonexistent0000000000").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn malformed_id_is_a_plain_miss() {
        let store = memory_store().await;
        for id in ["not a key", "a:b:c", "⟨weird⟩", "../../etc"] {
            let result = store.find_by_id(id).await;
            assert!(
                matches!(&result, Ok(None)),
                "id {id:?} should be a miss, got {result:?}"
            );
        }
    }

    #[tokio::test]
    async fn title_search_is_case_insensitive_substring() {
        let store = memory_store().await;
        store.create(&draft("Grocery List", "milk and eggs")).await.unwrap();
        store.create(&draft("grocery notes", "more groceries")).await.unwrap();
        store.create(&draft("Work Items", "standup agenda")).await.unwrap();

        let matches = store.find_by_title("GROCERY").await.unwrap();
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|n| n.title.to_lowercase().contains("grocery")));

        let partial = store.find_by_title("ocer").await.unwrap();
        assert_eq!(partial.len(), 2);
    }

    #[tokio::test]
    async fn title_search_without_match_is_empty() {
        let store = memory_store().await;
        store.create(&draft("Sample Note", "Sample body")).await.unwrap();
        let matches = store.find_by_title("nothing like this").await.unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn update_replaces_only_provided_fields() {
        let store = memory_store().await;
        let created = store
            .create(&draft("Original Title", "original body"))
            .await
            .unwrap();

        let patch = NotePatch {
            title: Some("Updated Title".to_string()),
            body: None,
        };
        let updated = store
            .update(&created.id, &patch)
            .await
            .expect("update should succeed")
            .expect("note should exist");

        assert_eq!(updated.title, "Updated Title");
        assert_eq!(updated.body, "original body");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn empty_patch_only_refreshes_updated_at() {
        let store = memory_store().await;
        let created = store.create(&draft("Stable Note", "stable body")).await.unwrap();

        let updated = store
            .update(&created.id, &NotePatch::default())
            .await
            .unwrap()
            .expect("note should exist");

        assert_eq!(updated.title, created.title);
        assert_eq!(updated.body, created.body);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn update_missing_id_is_none() {
        let store = memory_store().await;
        let patch = NotePatch {
            title: Some("New Title".to_string()),
            body: None,
        };
        let result = store.update("nonexistent0000000000", &patch).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_returns_the_removed_note() {
        let store = memory_store().await;
        let created = store.create(&draft("Doomed Note", "short lived")).await.unwrap();

        let removed = store
            .delete(&created.id)
            .await
            .expect("delete should succeed")
            .expect("note should exist");
        assert_eq!(removed.id, created.id);

        let gone = store.find_by_id(&created.id).await.unwrap();
        assert!(gone.is_none());
    }

    #[tokio::test]
    async fn delete_is_idempotent_at_the_store_level() {
        let store = memory_store().await;
        let created = store.create(&draft("Doomed Note", "short lived")).await.unwrap();

        assert!(store.delete(&created.id).await.unwrap().is_some());
        assert!(store.delete(&created.id).await.unwrap().is_none());
        assert!(store.delete(&created.id).await.unwrap().is_none());
    }
}
