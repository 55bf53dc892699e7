//! crates/emotion_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the analysis pipeline.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of any specific model vendor or SDK.

use async_trait::async_trait;
use std::time::Duration;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., network, SDK).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Sends `prompt` as a single user turn and returns the model's full text reply.
    async fn complete(&self, prompt: &str, temperature: f32) -> PortResult<String>;
}

#[async_trait]
pub trait TopicExtractionService: Send + Sync {
    /// Extracts the topics discussed in a message.
    async fn extract_topics(&self, content: &str) -> PortResult<Vec<String>>;
}

/// The default topic extractor. Topic extraction is not offered yet, so this
/// always yields an empty list.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTopicExtraction;

#[async_trait]
impl TopicExtractionService for NoTopicExtraction {
    async fn extract_topics(&self, _content: &str) -> PortResult<Vec<String>> {
        Ok(Vec::new())
    }
}
