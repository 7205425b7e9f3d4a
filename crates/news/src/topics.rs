//! Topics
//!
//! A feed boiled down to `title -> summary` pairs, in feed order.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::html::html_to_text;
use crate::parser::FeedEntry;

/// Default number of feed entries considered.
pub const DEFAULT_MAX_ENTRIES: usize = 30;

/// Summaries with this many characters or fewer are dropped.
pub const DEFAULT_MIN_SUMMARY_CHARS: usize = 50;

/// A news topic with a plain-text summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub title: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<DateTime<FixedOffset>>,
}

impl Topic {
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            link: None,
            published: None,
        }
    }
}

/// Title-keyed topics that keep first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicMap {
    topics: Vec<Topic>,
}

impl TopicMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a topic. A repeated title replaces the earlier entry in place.
    pub fn insert(&mut self, topic: Topic) {
        match self.topics.iter_mut().find(|t| t.title == topic.title) {
            Some(existing) => *existing = topic,
            None => self.topics.push(topic),
        }
    }

    pub fn get(&self, title: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.title == title)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(|t| t.title.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Topic> {
        self.topics.iter()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Build topics from the first `max_entries` feed entries.
    ///
    /// Summaries are reduced to plain text; entries whose summary is missing
    /// or has `min_len` characters or fewer are skipped.
    pub fn from_entries(entries: &[FeedEntry], max_entries: usize, min_len: usize) -> Self {
        let mut map = Self::new();
        for entry in entries.iter().take(max_entries) {
            let Some(raw) = entry.summary.as_deref() else {
                continue;
            };
            // Length is measured before trimming; only the stored text is trimmed
            let text = html_to_text(raw);
            if text.chars().count() <= min_len {
                debug!(title = %entry.title, "Skipping topic with short summary");
                continue;
            }
            let summary = text.trim().to_string();
            map.insert(Topic {
                title: entry.title.clone(),
                summary,
                link: entry.link.clone(),
                published: entry.published,
            });
        }
        map
    }
}

impl<'a> IntoIterator for &'a TopicMap {
    type Item = &'a Topic;
    type IntoIter = std::slice::Iter<'a, Topic>;

    fn into_iter(self) -> Self::IntoIter {
        self.topics.iter()
    }
}

impl FromIterator<Topic> for TopicMap {
    fn from_iter<I: IntoIterator<Item = Topic>>(iter: I) -> Self {
        let mut map = Self::new();
        for topic in iter {
            map.insert(topic);
        }
        map
    }
}
