//! The uniform response envelope.
//!
//! Every response body the API emits goes through one of the two builders
//! here; handlers never shape JSON themselves. Success bodies are
//! `{success: true, message, data}`, error bodies
//! `{success: false, message, error}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Body shape for successful responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessEnvelope<T> {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Success")]
    pub message: String,
    pub data: T,
}

/// Body shape for failed responses. `error` carries either a plain message
/// or structured validation detail.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorEnvelope {
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = "Invalid data")]
    pub message: String,
    pub error: Value,
}

/// Build a success response with the given status.
pub fn success<T: Serialize>(status: StatusCode, message: impl Into<String>, data: T) -> Response {
    let body = SuccessEnvelope {
        success: true,
        message: message.into(),
        data,
    };
    (status, Json(body)).into_response()
}

/// Build an error response with the given status.
pub fn failure(status: StatusCode, message: impl Into<String>, error: Value) -> Response {
    let body = ErrorEnvelope {
        success: false,
        message: message.into(),
        error,
    };
    (status, Json(body)).into_response()
}
