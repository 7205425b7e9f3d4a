//! News Error Types

use thiserror::Error;

/// Errors raised while fetching or parsing a news feed.
#[derive(Error, Debug)]
pub enum NewsError {
    /// Transport-level failure (DNS, TLS, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The feed server answered with a non-success status
    #[error("Feed returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The body was not well-formed XML
    #[error("Feed parse error: {0}")]
    Parse(String),

    /// Feed definition errors (bad URL, unknown feed name)
    #[error("Invalid feed: {0}")]
    InvalidFeed(String),
}

/// Result type alias for news operations
pub type NewsResult<T> = Result<T, NewsError>;

impl NewsError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an invalid feed error
    pub fn invalid_feed(msg: impl Into<String>) -> Self {
        Self::InvalidFeed(msg.into())
    }
}
