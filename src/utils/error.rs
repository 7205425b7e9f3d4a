//! Error Handling
//!
//! Unified error type for the application layer. Errors from the workspace
//! crates convert automatically so services can use `?` across crate lines.

use thiserror::Error;

use jumla_core::CoreError;
use jumla_llm::LlmError;
use jumla_news::NewsError;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Transcript and style errors
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Language model errors
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// Feed fetching and parsing errors
    #[error(transparent)]
    News(#[from] NewsError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

impl From<AppError> for String {
    fn from(err: AppError) -> String {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::not_found("topic 'Budget'");
        assert_eq!(err.to_string(), "Not found: topic 'Budget'");
    }

    #[test]
    fn test_error_conversion() {
        let err = AppError::config("invalid setting");
        let msg: String = err.into();
        assert!(msg.contains("Configuration error"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_crate_error_conversions() {
        let err: AppError = LlmError::EmptyResponse.into();
        assert!(matches!(err, AppError::Llm(LlmError::EmptyResponse)));

        let err: AppError = NewsError::parse("bad xml").into();
        assert_eq!(err.to_string(), "Feed parse error: bad xml");

        let err: AppError = CoreError::validation("bad slot").into();
        assert!(matches!(err, AppError::Core(_)));
    }
}
