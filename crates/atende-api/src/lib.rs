//! Atende API - REST server
//!
//! Exposes the knowledge-base question-answering endpoint plus health,
//! readiness, metrics, and OpenAPI documentation.
//!
//! Author: hephaex@gmail.com

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

use axum::Router;
use state::AppState;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Atende API",
        description = "Retrieval-grounded question answering over a fixed knowledge base"
    ),
    paths(handlers::query::query_handler, handlers::health::health_check),
    components(schemas(
        handlers::query::QueryRequest,
        handlers::query::QueryResponse,
        handlers::health::HealthResponse,
        handlers::health::BuildInfo,
        error::ApiError,
    )),
    tags(
        (name = "query", description = "Knowledge-base question answering"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
