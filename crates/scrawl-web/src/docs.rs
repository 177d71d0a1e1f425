//! OpenAPI document for the notes API.
//!
//! The `BearerAuth` scheme is declared so the docs describe the intended
//! protection of the delete endpoint, but nothing enforces it.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::envelope::{ErrorEnvelope, SuccessEnvelope};
use scrawl_core::{Note, NoteDraft, NotePatch};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notes API",
        version = "1.0.0",
        description = "API documentation for the Notes service"
    ),
    paths(
        crate::routes::notes::create_note,
        crate::routes::notes::fetch_note_by_id,
        crate::routes::notes::query_notes_by_title,
        crate::routes::notes::update_note,
        crate::routes::notes::delete_note,
    ),
    components(schemas(
        Note,
        NoteDraft,
        NotePatch,
        SuccessEnvelope<Note>,
        SuccessEnvelope<Vec<Note>>,
        SuccessEnvelope<bool>,
        ErrorEnvelope,
    )),
    modifiers(&SecurityAddon),
    tags((name = "notes", description = "Note management endpoints"))
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
