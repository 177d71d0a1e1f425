//! The note entity and its write payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A stored note.
///
/// The `id` is an opaque key assigned by the persistence layer on creation
/// and never reused. `created_at` is fixed at creation; `updated_at` is
/// refreshed on every successful update, so `updated_at >= created_at` always
/// holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Note {
    #[schema(example = "9dqr2v4hm0x8b1z5kqwt")]
    pub id: String,
    #[schema(example = "Test Note")]
    pub title: String,
    #[schema(example = "This is a test note.")]
    pub body: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a note. Both fields are required; unknown fields in
/// the incoming JSON are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NoteDraft {
    #[validate(length(
        min = 3,
        max = 100,
        message = "title must be between 3 and 100 characters"
    ))]
    #[schema(example = "Test Note")]
    pub title: String,
    #[validate(length(min = 5, message = "body must be at least 5 characters"))]
    #[schema(example = "This is a test note.")]
    pub body: String,
}

/// Payload for updating a note. Fields left out keep their stored value; the
/// same per-field constraints apply when a field is present. An empty patch
/// is valid and only refreshes the note's `updatedAt`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct NotePatch {
    #[validate(length(
        min = 3,
        max = 100,
        message = "title must be between 3 and 100 characters"
    ))]
    #[schema(example = "Updated Title")]
    pub title: Option<String>,
    #[validate(length(min = 5, message = "body must be at least 5 characters"))]
    #[schema(example = "Updated body text.")]
    pub body: Option<String>,
}
