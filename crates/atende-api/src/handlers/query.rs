//! Query handler
//!
//! Retrieval then generation, sequentially per request: embed the query,
//! pick the best document by cosine similarity, hand document and query to
//! the chat-completion API.
//!
//! Author: hephaex@gmail.com

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// Query request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct QueryRequest {
    /// User's question
    #[schema(example = "Como as redes sociais afetam a saúde mental?")]
    pub query: String,
}

/// Query response body
#[derive(Debug, Serialize, ToSchema)]
pub struct QueryResponse {
    /// Generated answer
    #[schema(example = "As redes sociais podem afetar o bem-estar psicológico...")]
    pub response: String,
}

/// Handle knowledge-base query requests
#[utoipa::path(
    post,
    path = "/v1/query/",
    tag = "query",
    request_body = QueryRequest,
    responses(
        (status = 200, description = "Query answered", body = QueryResponse),
        (status = 400, description = "Query failed", body = crate::error::ApiError)
    )
)]
pub async fn query_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QueryRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.increment_requests();

    let document = state.index.find_best(&req.query).await?;
    tracing::info!(document_id = document.id, "Document retrieved for query");

    let answer = state.generator.generate(&req.query, &document.text).await?;

    Ok((StatusCode::OK, Json(QueryResponse { response: answer })))
}
