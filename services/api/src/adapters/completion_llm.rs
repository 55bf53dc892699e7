//! services/api/src/adapters/completion_llm.rs
//!
//! This module contains the adapter for the emotion-scoring LLM.
//! It implements the `CompletionService` port from the `core` crate against any
//! OpenAI-compatible chat-completions endpoint (OpenAI itself, or Gemini's
//! compatibility endpoint).

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use emotion_core::ports::{CompletionService, PortError, PortResult};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `CompletionService` using an OpenAI-compatible LLM.
#[derive(Clone)]
pub struct OpenAiCompletionAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiCompletionAdapter {
    /// Creates a new `OpenAiCompletionAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }

    /// Builds the SDK client from an API key and an optional base URL.
    pub fn client_for(api_key: &str, api_base: Option<&str>) -> Client<OpenAIConfig> {
        let mut config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(base) = api_base {
            config = config.with_api_base(base.trim_end_matches('/'));
        }
        Client::with_config(config)
    }
}

//=========================================================================================
// `CompletionService` Trait Implementation
//=========================================================================================

#[async_trait]
impl CompletionService for OpenAiCompletionAdapter {
    /// Sends the prompt as a single user message and returns the first choice's text.
    async fn complete(&self, prompt: &str, temperature: f32) -> PortResult<String> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?
            .into()];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(temperature)
            .n(1)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        // Call the API and manually map the error if it occurs, which respects the orphan rule.
        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e: OpenAIError| PortError::Unexpected(e.to_string()))?;

        let choice = response.choices.into_iter().next().ok_or_else(|| {
            PortError::Unexpected("Emotion LLM returned no choices in its response.".to_string())
        })?;

        choice.message.content.ok_or_else(|| {
            PortError::Unexpected("Emotion LLM response contained no text content.".to_string())
        })
    }
}
