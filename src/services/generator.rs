//! Content Generator
//!
//! Two single-call LLM operations: deciding whether a news summary is worth
//! satirizing, and writing the leaked chat about it.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use jumla_llm::{LlmProvider, LlmRequestOptions, LlmResult, Message};
use jumla_news::TopicMap;

use crate::models::satire::SatireParams;
use crate::services::prompts::{leaked_chat_template, news_filter_template, NEWS_SUMMARY_VAR};

/// Marker the filter prompt asks the model to answer with.
pub const WORTHY_MARKER: &str = "YES";

/// Token cap for a filter verdict. The prompt asks for a single word.
pub const FILTER_MAX_TOKENS: u32 = 10;

/// Request options for a filter verdict: deterministic and short.
pub fn filter_request_options() -> LlmRequestOptions {
    LlmRequestOptions {
        temperature_override: Some(0.0),
        max_tokens_override: Some(FILTER_MAX_TOKENS),
    }
}

/// LLM-backed topic filter and chat writer.
pub struct ContentGenerator {
    provider: Arc<dyn LlmProvider>,
}

impl ContentGenerator {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Ask the model whether `summary` is satire material.
    ///
    /// The reply counts as a yes if it contains `YES` anywhere. An empty reply
    /// counts as a no.
    pub async fn is_satire_worthy(&self, summary: &str) -> LlmResult<bool> {
        let values = HashMap::from([(NEWS_SUMMARY_VAR, summary.to_string())]);
        let prompt = news_filter_template().render(&values)?;

        let response = self
            .provider
            .send_message(vec![Message::user(prompt)], None, filter_request_options())
            .await?;

        let reply = response.content.unwrap_or_default();
        let worthy = reply.contains(WORTHY_MARKER);
        debug!(reply = %reply.trim(), worthy, "Filter verdict");
        Ok(worthy)
    }

    /// Keep only the satire-worthy topics, in their original order.
    ///
    /// Topics are checked one at a time. The first provider error aborts the
    /// whole filter.
    pub async fn filter_topics(&self, topics: &TopicMap) -> LlmResult<TopicMap> {
        let mut worthy = TopicMap::new();
        for topic in topics {
            if self.is_satire_worthy(&topic.summary).await? {
                worthy.insert(topic.clone());
            }
        }
        info!(
            checked = topics.len(),
            kept = worthy.len(),
            provider = self.provider.name(),
            "Filtered topics"
        );
        Ok(worthy)
    }

    /// Write a leaked chat about `summary`.
    ///
    /// Returns the raw model text; an empty reply is `LlmError::EmptyResponse`.
    pub async fn generate_chat(&self, summary: &str, params: &SatireParams) -> LlmResult<String> {
        let mut values = params.template_values();
        values.insert(NEWS_SUMMARY_VAR, summary.to_string());
        let prompt = leaked_chat_template().render(&values)?;

        info!(
            provider = self.provider.name(),
            model = self.provider.model(),
            blame = %params.blame,
            "Generating chat"
        );
        self.provider.complete(prompt).await
    }
}
