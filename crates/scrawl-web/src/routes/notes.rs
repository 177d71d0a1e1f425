//! Note CRUD handlers.
//!
//! Each handler follows the same pipeline: validate (writes only), call the
//! service, wrap the outcome in the shared envelope, log one line. Store
//! failures are logged with full detail here and surfaced to the client as
//! the endpoint's fixed message.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::IntoParams;
use validator::Validate;

use scrawl_core::{NoteDraft, NotePatch};

use crate::envelope;
use crate::service::AppState;
use crate::{Result, WebError};

pub fn note_routes() -> Router<AppState> {
    Router::new()
        .route("/api/notes", post(create_note).get(query_notes_by_title))
        .route(
            "/api/notes/{id}",
            get(fetch_note_by_id).put(update_note).delete(delete_note),
        )
}

/// Create a new note.
#[utoipa::path(
    post,
    path = "/api/notes",
    tag = "notes",
    request_body = NoteDraft,
    responses(
        (status = 201, description = "Note created successfully", body = envelope::SuccessEnvelope<scrawl_core::Note>),
        (status = 400, description = "Invalid data or create failure", body = envelope::ErrorEnvelope),
    )
)]
pub(crate) async fn create_note(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NoteDraft>, JsonRejection>,
) -> Result<Response> {
    let Json(draft) = payload.map_err(|rejection| WebError::MalformedBody(rejection.body_text()))?;
    draft.validate()?;

    let note = state.service.create_note(&draft).await.map_err(|err| {
        error!(error = %err, "Failed to create note");
        WebError::Store("Failed to create note")
    })?;

    info!("Note created successfully");
    Ok(envelope::success(
        StatusCode::CREATED,
        "Note created successfully",
        note,
    ))
}

/// Fetch a note by id.
#[utoipa::path(
    get,
    path = "/api/notes/{id}",
    tag = "notes",
    params(("id" = String, Path, description = "Note id")),
    responses(
        (status = 200, description = "Note fetched successfully", body = envelope::SuccessEnvelope<scrawl_core::Note>),
        (status = 404, description = "Note not found", body = envelope::ErrorEnvelope),
        (status = 400, description = "Fetch failure", body = envelope::ErrorEnvelope),
    )
)]
pub(crate) async fn fetch_note_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let note = state.service.fetch_note_by_id(&id).await.map_err(|err| {
        error!(error = %err, "Failed to fetch note");
        WebError::Store("Failed to fetch note")
    })?;

    match note {
        Some(note) => {
            info!("Note responded by id");
            Ok(envelope::success(StatusCode::OK, "Success", note))
        }
        None => Err(WebError::NotFound("Note not found".to_string())),
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct TitleQuery {
    /// Title substring to search for, matched case-insensitively.
    title: Option<String>,
}

/// Query notes by title substring.
#[utoipa::path(
    get,
    path = "/api/notes",
    tag = "notes",
    params(TitleQuery),
    responses(
        (status = 200, description = "Matching notes, possibly empty", body = envelope::SuccessEnvelope<Vec<scrawl_core::Note>>),
        (status = 400, description = "Missing title parameter or query failure", body = envelope::ErrorEnvelope),
    )
)]
pub(crate) async fn query_notes_by_title(
    State(state): State<AppState>,
    Query(query): Query<TitleQuery>,
) -> Result<Response> {
    let fragment = match query.title.as_deref() {
        Some(title) if !title.is_empty() => title,
        _ => return Err(WebError::MissingTitleParam),
    };

    let notes = state
        .service
        .query_notes_by_title(fragment)
        .await
        .map_err(|err| {
            error!(error = %err, "Failed to query notes");
            WebError::Store("Failed to query notes")
        })?;

    info!("Note responded by title");
    Ok(envelope::success(StatusCode::OK, "Success", notes))
}

/// Update an existing note.
#[utoipa::path(
    put,
    path = "/api/notes/{id}",
    tag = "notes",
    params(("id" = String, Path, description = "Note id")),
    request_body = NotePatch,
    responses(
        (status = 200, description = "Note updated successfully", body = envelope::SuccessEnvelope<scrawl_core::Note>),
        (status = 400, description = "Invalid data or update failure", body = envelope::ErrorEnvelope),
        (status = 404, description = "Note not found", body = envelope::ErrorEnvelope),
    )
)]
pub(crate) async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<NotePatch>, JsonRejection>,
) -> Result<Response> {
    let Json(patch) = payload.map_err(|rejection| WebError::MalformedBody(rejection.body_text()))?;
    patch.validate()?;

    let note = state
        .service
        .update_note(&id, &patch)
        .await
        .map_err(|err| {
            error!(error = %err, "Failed to update note");
            WebError::Store("Failed to update note")
        })?;

    match note {
        Some(note) => {
            info!("Note updated successfully");
            Ok(envelope::success(
                StatusCode::OK,
                "Note updated successfully",
                note,
            ))
        }
        None => Err(WebError::NotFound("Note not found".to_string())),
    }
}

/// Delete a note by id.
#[utoipa::path(
    delete,
    path = "/api/notes/{id}",
    tag = "notes",
    params(("id" = String, Path, description = "Note id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Note deleted", body = envelope::SuccessEnvelope<bool>),
        (status = 404, description = "Note not found", body = envelope::ErrorEnvelope),
        (status = 400, description = "Delete failure", body = envelope::ErrorEnvelope),
    )
)]
pub(crate) async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let deleted = state
        .service
        .delete_note_by_id(&id)
        .await
        .map_err(|err| {
            error!(error = %err, "Error deleting note");
            WebError::Store("Failed to delete note")
        })?;

    match deleted {
        Some(_) => {
            info!("Note with ID {id} deleted");
            Ok(envelope::success(
                StatusCode::OK,
                format!("Note with ID {id} deleted"),
                true,
            ))
        }
        None => {
            let message = format!("Note with ID {id} not found");
            warn!("{message}");
            Err(WebError::NotFound(message))
        }
    }
}
