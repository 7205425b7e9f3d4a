//! Feed Catalog
//!
//! Named news sources the operator can pick from.

use serde::{Deserialize, Serialize};

use crate::error::{NewsError, NewsResult};

/// A named RSS or Atom feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSource {
    pub name: String,
    pub url: String,
}

impl FeedSource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Check that the name is non-empty and the URL is absolute http(s).
    pub fn validate(&self) -> NewsResult<url::Url> {
        if self.name.trim().is_empty() {
            return Err(NewsError::invalid_feed("feed name is empty"));
        }
        let url = url::Url::parse(&self.url)
            .map_err(|e| NewsError::invalid_feed(format!("{}: {}", self.name, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(NewsError::invalid_feed(format!(
                "{}: unsupported scheme '{}'",
                self.name, other
            ))),
        }
    }
}

/// The built-in feeds, in display order.
pub fn default_feeds() -> Vec<FeedSource> {
    vec![
        FeedSource::new(
            "Mainstream Mix (Google)",
            "https://news.google.com/rss?hl=en-IN&gl=IN&ceid=IN:en",
        ),
        FeedSource::new(
            "The Hindu (National)",
            "https://www.thehindu.com/news/national/?service=rss",
        ),
        FeedSource::new(
            "Indian Express (Explained)",
            "https://indianexpress.com/section/explained/feed/",
        ),
        FeedSource::new("NDTV (India)", "http://feeds.feedburner.com/NDTV-IndiaNews"),
    ]
}

/// Find a feed by exact name, falling back to a case-insensitive match.
pub fn find_feed<'a>(feeds: &'a [FeedSource], name: &str) -> NewsResult<&'a FeedSource> {
    feeds
        .iter()
        .find(|f| f.name == name)
        .or_else(|| feeds.iter().find(|f| f.name.eq_ignore_ascii_case(name)))
        .ok_or_else(|| NewsError::invalid_feed(format!("unknown feed '{}'", name)))
}
