//! crates/emotion_core/src/error.rs
//!
//! The failure taxonomy of the analysis pipeline.

use crate::ports::PortError;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The request was malformed or its content was blank.
    #[error("{0}")]
    Validation(String),

    /// The external model could not be reached or refused the call.
    #[error("Model invocation failed: {0}")]
    ModelInvocation(#[from] PortError),

    /// The model replied, but not with a complete score map.
    #[error("Model response was malformed: {0}")]
    ResponseFormat(String),
}

impl AnalysisError {
    /// `true` when the caller sent a bad request, `false` for downstream failures.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AnalysisError::Validation(_))
    }
}
