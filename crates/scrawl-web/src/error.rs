//! Web-layer error type.
//!
//! Every failure a handler can produce is a `WebError` variant, and each
//! variant renders through the shared envelope, so the error taxonomy and the
//! wire format live in one place. Infrastructure detail is logged where the
//! failure is observed and never echoed to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};
use thiserror::Error;
use validator::ValidationErrors;

use crate::envelope;

const MISSING_TITLE_PARAM: &str = "Title query parameter is required";

/// Result alias for the web layer.
pub type Result<T> = std::result::Result<T, WebError>;

#[derive(Debug, Error)]
pub enum WebError {
    /// Payload violated field constraints; detail goes into the envelope.
    #[error("Invalid data")]
    Validation(#[from] ValidationErrors),

    /// Body could not be parsed as the expected JSON shape.
    #[error("Invalid data: {0}")]
    MalformedBody(String),

    /// Referenced note does not exist; the message is endpoint-specific.
    #[error("{0}")]
    NotFound(String),

    /// The `title` query parameter was absent or empty.
    #[error("{MISSING_TITLE_PARAM}")]
    MissingTitleParam,

    /// The persistence layer failed; clients only see the fixed message.
    #[error("{0}")]
    Store(&'static str),

    #[error("Invalid server configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::Validation(errors) => {
                envelope::failure(StatusCode::BAD_REQUEST, "Invalid data", json!(errors))
            }
            WebError::MalformedBody(detail) => {
                envelope::failure(StatusCode::BAD_REQUEST, "Invalid data", Value::String(detail))
            }
            WebError::NotFound(message) => {
                let detail = Value::String(message.clone());
                envelope::failure(StatusCode::NOT_FOUND, message, detail)
            }
            WebError::MissingTitleParam => envelope::failure(
                StatusCode::BAD_REQUEST,
                MISSING_TITLE_PARAM,
                Value::String(MISSING_TITLE_PARAM.to_string()),
            ),
            WebError::Store(message) => envelope::failure(
                StatusCode::BAD_REQUEST,
                message,
                Value::String(message.to_string()),
            ),
            WebError::Config(_) | WebError::Io(_) => envelope::failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                Value::String(self.to_string()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn rendered(error: WebError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn not_found_renders_404_with_message_in_both_fields() {
        let (status, body) = rendered(WebError::NotFound("Note not found".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("Note not found"));
        assert_eq!(body["error"], json!("Note not found"));
    }

    #[tokio::test]
    async fn missing_title_param_renders_400() {
        let (status, body) = rendered(WebError::MissingTitleParam).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], json!("Title query parameter is required"));
    }

    #[tokio::test]
    async fn store_failure_renders_fixed_message_only() {
        let (status, body) = rendered(WebError::Store("Failed to create note")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], json!("Failed to create note"));
        assert_eq!(body["error"], json!("Failed to create note"));
    }

    #[tokio::test]
    async fn validation_errors_render_structured_detail() {
        use validator::Validate;

        let draft = scrawl_core::NoteDraft {
            title: "ab".to_string(),
            body: "x".to_string(),
        };
        let errors = draft.validate().unwrap_err();

        let (status, body) = rendered(WebError::Validation(errors)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], json!("Invalid data"));
        assert!(body["error"]["title"].is_array());
        assert!(body["error"]["body"].is_array());
    }
}
