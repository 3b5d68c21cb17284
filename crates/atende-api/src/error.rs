//! API error handling
//!
//! Every failure inside request handling, whatever its kind, is reported as
//! HTTP 400 with the stringified error as `detail`. Retrieval failures,
//! upstream chat failures, and malformed upstream responses all share this
//! single surface.
//!
//! Author: hephaex@gmail.com

use atende_core::AtendeError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// API error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// Stringified error
    #[schema(example = "Upstream chat API returned status 500: internal error")]
    pub detail: String,
}

/// Application error wrapper for the handler boundary
#[derive(Debug)]
pub struct AppError(pub AtendeError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self.0, "Request failed");

        (
            StatusCode::BAD_REQUEST,
            Json(ApiError {
                detail: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<AtendeError> for AppError {
    fn from(err: AtendeError) -> Self {
        Self(err)
    }
}
