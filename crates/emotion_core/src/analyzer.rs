//! crates/emotion_core/src/analyzer.rs
//!
//! The emotion-analysis pipeline: validate, prompt, invoke the model,
//! parse the reply, and assemble the result.

use crate::domain::{AnalysisRequest, AnalysisResult};
use crate::error::AnalysisError;
use crate::extract::parse_reply;
use crate::ports::{CompletionService, NoTopicExtraction, PortError, TopicExtractionService};
use crate::prompt::build_prompt;
use crate::validation::validate;
use chrono::Utc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Sampling temperature for every analysis call. The reply must parse as
/// JSON, so the setting stays low.
pub const ANALYSIS_TEMPERATURE: f32 = 0.3;

/// Runs one stateless analysis per call. Cloning is cheap and clones share
/// the same model client.
#[derive(Clone)]
pub struct EmotionAnalyzer {
    completion: Arc<dyn CompletionService>,
    topics: Arc<dyn TopicExtractionService>,
    timeout: Option<Duration>,
}

impl EmotionAnalyzer {
    /// Creates an analyzer backed by `completion`, with no topic extraction and no deadline.
    pub fn new(completion: Arc<dyn CompletionService>) -> Self {
        Self {
            completion,
            topics: Arc::new(NoTopicExtraction),
            timeout: None,
        }
    }

    pub fn with_topic_extractor(mut self, topics: Arc<dyn TopicExtractionService>) -> Self {
        self.topics = topics;
        self
    }

    /// Bounds the model call. Expiry is reported as a model invocation failure.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Analyzes a single message.
    ///
    /// Dropping the returned future abandons the in-flight model call; nothing
    /// external has been mutated at that point.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        let content = validate(request)?;
        info!(
            couple_id = %request.couple_id,
            sender_id = %request.sender_id,
            content_chars = content.chars().count(),
            "Analyzing message emotion"
        );

        let prompt = build_prompt(content);
        let reply = self.invoke_model(&prompt).await?;

        let scores = parse_reply(&reply).map_err(|e| {
            warn!("Model reply could not be normalized: {}", e);
            e
        })?;

        let topics = self.topics.extract_topics(content).await?;

        Ok(AnalysisResult::new(scores, topics, Utc::now()))
    }

    async fn invoke_model(&self, prompt: &str) -> Result<String, AnalysisError> {
        let started = Instant::now();
        let call = self.completion.complete(prompt, ANALYSIS_TEMPERATURE);

        let reply = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| PortError::Timeout(limit))?,
            None => call.await,
        }?;

        debug!(elapsed_ms = started.elapsed().as_millis() as u64, "Model replied");
        Ok(reply)
    }
}
