//! Error types for the gateway
//!
//! Unified error handling using thiserror. Store operations never produce
//! errors (absence and denial are ordinary return values); everything here
//! belongs to the HTTP surface, serialized as the standard error envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::clock::iso_now;

// == API Error Enum ==
/// Unified error type for the HTTP layer.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body failed schema validation
    #[error("{0}")]
    Validation(String),

    /// Rate limit window exhausted for this client
    #[error("Too many requests. Please try again later.")]
    RateLimited,

    /// No route matched
    #[error("Not found")]
    NotFound,

    /// Upstream AI provider failure
    #[error("AI service error: {0}")]
    Upstream(String),

    /// Internal server error
    #[error("Internal server error")]
    Internal(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Upstream(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
            "timestamp": iso_now(),
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the gateway.
pub type Result<T> = std::result::Result<T, ApiError>;
