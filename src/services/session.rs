//! Chat Session
//!
//! Caller-owned state for one operator session: the satire-worthy topics last
//! found for a feed, the selected topic and the last generated chat.

use serde::{Deserialize, Serialize};
use tracing::debug;

use jumla_core::{parse, style_transcript, StyleTable, StyledUtterance, Utterance};
use jumla_news::{Topic, TopicMap};

use crate::models::satire::SatireParams;
use crate::utils::error::{AppError, AppResult};

/// A generated chat together with the news it reacts to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedChat {
    pub title: String,
    pub summary: String,
    /// Model output, exactly as returned
    pub raw_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<SatireParams>,
}

impl GeneratedChat {
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        raw_text: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            raw_text: raw_text.into(),
            params: None,
        }
    }

    pub fn with_params(mut self, params: SatireParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Cleaned utterances of the raw text.
    pub fn utterances(&self) -> Vec<Utterance> {
        parse(&self.raw_text)
    }

    /// Utterances styled with a fresh style table.
    pub fn styled(&self) -> Vec<StyledUtterance> {
        let mut table = StyleTable::new();
        style_transcript(&self.utterances(), &mut table)
    }
}

/// Session state, owned by whoever drives the pipeline.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    source_feed: Option<String>,
    topics: TopicMap,
    selected: Option<String>,
    last_chat: Option<GeneratedChat>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the filtered topics for `feed`, replacing any earlier set.
    pub fn store_topics(&mut self, feed: impl Into<String>, topics: TopicMap) {
        let feed = feed.into();
        debug!(feed = %feed, count = topics.len(), "Storing session topics");
        self.source_feed = Some(feed);
        self.topics = topics;
        self.selected = None;
    }

    /// Stored topics, only if they were found for `feed`.
    pub fn topics_for(&self, feed: &str) -> Option<&TopicMap> {
        match &self.source_feed {
            Some(source) if source == feed => Some(&self.topics),
            _ => None,
        }
    }

    pub fn source_feed(&self) -> Option<&str> {
        self.source_feed.as_deref()
    }

    /// Select a stored topic by exact title, then case-insensitive title,
    /// then 1-based position.
    pub fn select_topic(&mut self, title: &str) -> AppResult<&Topic> {
        let found = self
            .topics
            .get(title)
            .or_else(|| {
                self.topics
                    .iter()
                    .find(|t| t.title.to_lowercase() == title.to_lowercase())
            })
            .or_else(|| {
                title
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| self.topics.iter().nth(i))
            })
            .map(|t| t.title.clone())
            .ok_or_else(|| AppError::not_found(format!("topic '{}'", title)))?;
        self.selected = Some(found);
        self.selected_topic()
            .ok_or_else(|| AppError::not_found(format!("topic '{}'", title)))
    }

    pub fn selected_topic(&self) -> Option<&Topic> {
        self.selected.as_deref().and_then(|t| self.topics.get(t))
    }

    pub fn record_chat(&mut self, chat: GeneratedChat) {
        self.last_chat = Some(chat);
    }

    pub fn last_chat(&self) -> Option<&GeneratedChat> {
        self.last_chat.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jumla_core::Alignment;

    fn topics() -> TopicMap {
        vec![
            Topic::new("Budget 2025", "Government announces new budget."),
            Topic::new("Onion Prices", "Onion prices double overnight."),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_topics_only_for_matching_feed() {
        let mut session = ChatSession::new();
        assert!(session.topics_for("NDTV (India)").is_none());

        session.store_topics("NDTV (India)", topics());
        assert_eq!(session.topics_for("NDTV (India)").unwrap().len(), 2);
        assert!(session.topics_for("The Hindu (National)").is_none());
        assert_eq!(session.source_feed(), Some("NDTV (India)"));
    }

    #[test]
    fn test_select_topic() {
        let mut session = ChatSession::new();
        session.store_topics("NDTV (India)", topics());

        let topic = session.select_topic("onion prices").unwrap();
        assert_eq!(topic.title, "Onion Prices");
        assert_eq!(session.selected_topic().unwrap().title, "Onion Prices");

        assert_eq!(session.select_topic("1").unwrap().title, "Budget 2025");
        assert!(session.select_topic("0").is_err());
        assert!(session.select_topic("3").is_err());

        assert!(matches!(
            session.select_topic("Cricket"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_storing_topics_clears_selection() {
        let mut session = ChatSession::new();
        session.store_topics("NDTV (India)", topics());
        session.select_topic("Budget 2025").unwrap();
        session.store_topics("The Hindu (National)", TopicMap::new());
        assert!(session.selected_topic().is_none());
    }

    #[test]
    fn test_record_chat() {
        let mut session = ChatSession::new();
        assert!(session.last_chat().is_none());
        session.record_chat(GeneratedChat::new("t", "s", "A: hi"));
        assert_eq!(session.last_chat().unwrap().raw_text, "A: hi");
    }

    #[test]
    fn test_generated_chat_styled() {
        let chat = GeneratedChat::new(
            "Budget",
            "summary",
            "Samit Shah: **Samit Shah**: Arre, yeh news dekhi?\nJogi Raditya: Haan sir!\nSamit Shah: Chalo.",
        );
        let styled = chat.styled();
        assert_eq!(styled.len(), 3);
        assert_eq!(styled[0].message, "Arre, yeh news dekhi?");
        assert_eq!(styled[0].style.alignment, Alignment::Left);
        assert_eq!(styled[1].style.alignment, Alignment::Right);
        assert_eq!(styled[2].style, styled[0].style);
    }
}
