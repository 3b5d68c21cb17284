//! API route definitions
//!
//! Author: hephaex@gmail.com

use crate::handlers::{health, query};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Create API v1 routes
///
/// The query route keeps its trailing slash; that is the published path.
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/v1/query/", post(query::query_handler))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics))
}
