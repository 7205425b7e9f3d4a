//! News Client
//!
//! Fetches a feed over HTTP and turns it into topics.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::{NewsError, NewsResult};
use crate::feeds::FeedSource;
use crate::parser::parse_feed;
use crate::topics::{TopicMap, DEFAULT_MAX_ENTRIES, DEFAULT_MIN_SUMMARY_CHARS};

const USER_AGENT: &str = concat!("jumla/", env!("CARGO_PKG_VERSION"));

/// Result of a feed fetch that reached the server and parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Topics(TopicMap),
    /// The feed had no entry with a long enough summary.
    Empty,
}

impl FetchOutcome {
    pub fn into_topics(self) -> TopicMap {
        match self {
            FetchOutcome::Topics(topics) => topics,
            FetchOutcome::Empty => TopicMap::new(),
        }
    }
}

impl From<TopicMap> for FetchOutcome {
    fn from(topics: TopicMap) -> Self {
        if topics.is_empty() {
            FetchOutcome::Empty
        } else {
            FetchOutcome::Topics(topics)
        }
    }
}

/// HTTP feed fetcher.
#[derive(Debug, Clone)]
pub struct NewsClient {
    client: reqwest::Client,
    max_entries: usize,
    min_summary_chars: usize,
}

impl NewsClient {
    pub fn new(timeout: Duration) -> NewsResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            max_entries: DEFAULT_MAX_ENTRIES,
            min_summary_chars: DEFAULT_MIN_SUMMARY_CHARS,
        })
    }

    /// Override how many entries are read and the summary length cutoff.
    pub fn with_limits(mut self, max_entries: usize, min_summary_chars: usize) -> Self {
        self.max_entries = max_entries;
        self.min_summary_chars = min_summary_chars;
        self
    }

    /// Download `feed` and extract its topics.
    pub async fn fetch_topics(&self, feed: &FeedSource) -> NewsResult<FetchOutcome> {
        let url = feed.validate()?;
        debug!(feed = %feed.name, %url, "Fetching feed");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NewsError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let outcome = self.topics_from_xml(&body)?;
        match &outcome {
            FetchOutcome::Topics(topics) => {
                info!(feed = %feed.name, count = topics.len(), "Fetched topics")
            }
            FetchOutcome::Empty => warn!(feed = %feed.name, "Feed yielded no usable topics"),
        }
        Ok(outcome)
    }

    /// Parse an already-downloaded feed body with this client's limits.
    pub fn topics_from_xml(&self, xml: &str) -> NewsResult<FetchOutcome> {
        let entries = parse_feed(xml)?;
        Ok(TopicMap::from_entries(&entries, self.max_entries, self.min_summary_chars).into())
    }
}
