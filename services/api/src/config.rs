//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use tracing::Level;

/// Google's OpenAI-compatible endpoint for Gemini models.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Anthropic's OpenAI SDK compatibility endpoint for Claude models.
pub const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com/v1";

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// The vendor serving the completion model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LlmProvider {
    OpenAi,
    Gemini,
    Anthropic,
}

impl LlmProvider {
    pub fn default_model(self) -> &'static str {
        match self {
            LlmProvider::OpenAi => "gpt-4o-mini",
            LlmProvider::Gemini => "gemini-1.5-flash",
            LlmProvider::Anthropic => "claude-3-5-haiku-20241022",
        }
    }

    /// `None` means the SDK's own default (api.openai.com).
    pub fn default_api_base(self) -> Option<&'static str> {
        match self {
            LlmProvider::OpenAi => None,
            LlmProvider::Gemini => Some(GEMINI_API_BASE),
            LlmProvider::Anthropic => Some(ANTHROPIC_API_BASE),
        }
    }

    fn api_key_var(self) -> &'static str {
        match self {
            LlmProvider::OpenAi => "OPENAI_API_KEY",
            LlmProvider::Gemini => "GEMINI_API_KEY",
            LlmProvider::Anthropic => "ANTHROPIC_API_KEY",
        }
    }
}

impl FromStr for LlmProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(LlmProvider::OpenAi),
            "gemini" => Ok(LlmProvider::Gemini),
            "anthropic" => Ok(LlmProvider::Anthropic),
            other => Err(format!(
                "'{}' is not a supported provider (openai, gemini, anthropic)",
                other
            )),
        }
    }
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    pub provider: LlmProvider,
    pub api_key: String,
    pub model: String,
    pub api_base: Option<String>,
    pub model_timeout: Option<Duration>,
    pub allowed_origins: Vec<String>,
}

// Hand-written so the API key never reaches a log line.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bind_address", &self.bind_address)
            .field("log_level", &self.log_level)
            .field("provider", &self.provider)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("model_timeout", &self.model_timeout)
            .field("allowed_origins", &self.allowed_origins)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // --- Server Settings ---
        let bind_address_str = lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str.parse::<SocketAddr>().map_err(|e| {
            ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string())
        })?;

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        // --- Model Settings ---
        let provider = match lookup("LLM_PROVIDER") {
            Some(raw) => raw
                .parse::<LlmProvider>()
                .map_err(|e| ConfigError::InvalidValue("LLM_PROVIDER".to_string(), e))?,
            None => LlmProvider::Gemini,
        };

        let api_key = lookup(provider.api_key_var())
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingVar(provider.api_key_var().to_string()))?;

        let model = lookup("EMOTION_MODEL").unwrap_or_else(|| provider.default_model().to_string());
        let api_base = lookup("LLM_API_BASE")
            .or_else(|| provider.default_api_base().map(String::from));

        let model_timeout = match lookup("MODEL_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| {
                    ConfigError::InvalidValue("MODEL_TIMEOUT_SECS".to_string(), e.to_string())
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            bind_address,
            log_level,
            provider,
            api_key,
            model,
            api_base,
            model_timeout,
            allowed_origins,
        })
    }
}
