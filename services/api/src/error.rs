//! services/api/src/error.rs
//!
//! Defines the primary error type for the entire API service, and how each
//! error is rendered as an HTTP response.

use crate::config::ConfigError;
use crate::web::protocol::ErrorBody;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use emotion_core::AnalysisError;
use tracing::error;

/// The primary error type for the `api` service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents a failure of the analysis pipeline for one request.
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// Represents a standard Input/Output error (e.g., binding to a network socket).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Analysis(err) if err.is_client_error() => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody::new(err.to_string()))).into_response()
            }
            ApiError::Analysis(err) => {
                error!("Analysis failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody::with_details("Analysis failed", err.to_string())),
                )
                    .into_response()
            }
            other => {
                error!("Request failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody::new("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}
