//! Router assembly and server startup.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use scrawl_surrealdb::NoteStore;

use crate::docs::ApiDoc;
use crate::routes::{health_routes, note_routes};
use crate::service::AppState;
use crate::{Result, WebError};

pub use scrawl_config::ServerConfig;

const MAX_BODY_SIZE_1MB: usize = 1024 * 1024;

/// Assemble the full application router: note routes, health check, Swagger
/// docs, and the shared middleware stack.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .merge(note_routes())
        .with_state(state)
        .merge(health_routes())
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE_1MB))
        .layer(cors)
}

/// Bind the configured address and serve until the process exits.
pub async fn start_server(config: &ServerConfig, store: Arc<dyn NoteStore>) -> Result<()> {
    let state = AppState::new(store);
    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| WebError::Config(format!("Invalid address: {e}")))?;

    tracing::info!("Listening on http://{}", addr);
    tracing::info!("Swagger doc: http://{}/api-docs", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(WebError::Io)?;

    axum::serve(listener, app).await.map_err(WebError::Io)?;

    Ok(())
}
