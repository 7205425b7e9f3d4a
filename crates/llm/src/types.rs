//! LLM Types
//!
//! Provider identifiers, configuration, messages, responses and errors shared
//! by every provider implementation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported LLM providers.
///
/// Both speak the OpenAI Chat Completions protocol; they differ in endpoint,
/// default model and API key format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    Groq,
    #[serde(rename = "openai")]
    OpenAI,
}

impl ProviderType {
    /// All providers, in the order they are offered to the operator.
    pub fn all() -> &'static [ProviderType] {
        &[ProviderType::Groq, ProviderType::OpenAI]
    }

    /// Stable identifier used in config files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::Groq => "groq",
            ProviderType::OpenAI => "openai",
        }
    }

    /// Human-friendly name including the default model family.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderType::Groq => "Groq (Llama-3.1-8B)",
            ProviderType::OpenAI => "OpenAI (GPT-3.5-Turbo)",
        }
    }

    /// Environment variable that holds this provider's API key.
    pub fn api_key_env_var(&self) -> &'static str {
        match self {
            ProviderType::Groq => "GROQ_API_KEY",
            ProviderType::OpenAI => "OPENAI_API_KEY",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderType::Groq => "llama-3.1-8b-instant",
            ProviderType::OpenAI => "gpt-3.5-turbo",
        }
    }

    /// Chat Completions endpoint.
    pub fn default_base_url(&self) -> &'static str {
        match self {
            ProviderType::Groq => "https://api.groq.com/openai/v1/chat/completions",
            ProviderType::OpenAI => "https://api.openai.com/v1/chat/completions",
        }
    }

    /// Cheap shape check of an API key. Does not contact the provider.
    pub fn validate_api_key(&self, api_key: &str) -> bool {
        if api_key.is_empty() {
            return false;
        }
        match self {
            ProviderType::Groq => api_key.starts_with("gsk_"),
            ProviderType::OpenAI => api_key.starts_with("sk-"),
        }
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderType {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "groq" => Ok(ProviderType::Groq),
            "openai" => Ok(ProviderType::OpenAI),
            other => Err(LlmError::InvalidRequest {
                message: format!("Unknown provider '{}' (expected groq or openai)", other),
            }),
        }
    }
}

/// Configuration for a single provider instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub provider: ProviderType,
    /// Never serialized; supplied from the environment at runtime.
    #[serde(skip)]
    pub api_key: Option<String>,
    /// Overrides `ProviderType::default_base_url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl ProviderConfig {
    /// Config with the provider's default model and the generation defaults.
    pub fn for_provider(provider: ProviderType) -> Self {
        Self {
            provider,
            model: provider.default_model().to_string(),
            ..Default::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Chat Completions endpoint after applying any override.
    pub fn endpoint(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.provider.default_base_url())
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider: ProviderType::Groq,
            api_key: None,
            base_url: None,
            model: ProviderType::Groq.default_model().to_string(),
            temperature: 0.9,
            max_tokens: 2048,
            timeout_secs: 60,
        }
    }
}

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
        }
    }
}

/// One chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Per-request overrides of the provider configuration.
#[derive(Debug, Clone, Default)]
pub struct LlmRequestOptions {
    pub temperature_override: Option<f32>,
    pub max_tokens_override: Option<u32>,
}

/// Why the model stopped generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    EndTurn,
    MaxTokens,
    ContentFilter,
    Other(String),
}

impl From<&str> for StopReason {
    fn from(reason: &str) -> Self {
        match reason {
            "stop" | "end_turn" => StopReason::EndTurn,
            "length" | "max_tokens" => StopReason::MaxTokens,
            "content_filter" => StopReason::ContentFilter,
            other => StopReason::Other(other.to_string()),
        }
    }
}

/// Token counters reported by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// A complete, non-streamed model response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmResponse {
    pub content: Option<String>,
    pub stop_reason: StopReason,
    pub usage: UsageStats,
    pub model: String,
}

impl LlmResponse {
    /// Text content, or `EmptyResponse` if the model returned none.
    pub fn into_text(self) -> LlmResult<String> {
        match self.content {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(LlmError::EmptyResponse),
        }
    }
}

/// Errors returned by LLM providers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LlmError {
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Model not found: {model}")]
    ModelNotFound { model: String },

    #[error("Rate limited: {message}")]
    RateLimited {
        message: String,
        retry_after: Option<u32>,
    },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Server error: {message}")]
    ServerError { message: String, status: Option<u16> },

    #[error("Network error: {message}")]
    NetworkError { message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Model returned an empty response")]
    EmptyResponse,

    #[error("{message}")]
    Other { message: String },
}

/// Result type alias for LLM operations
pub type LlmResult<T> = Result<T, LlmError>;
