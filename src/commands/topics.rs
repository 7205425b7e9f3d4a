//! Topic Commands
//!
//! `jumla topics`: fetch a feed, optionally filter it through the model and
//! list what is left.

use std::io::Write;
use std::sync::Arc;

use tracing::{info, warn};

use jumla_llm::LlmProvider;
use jumla_news::{FeedSource, FetchOutcome, TopicMap};

use crate::services::generator::ContentGenerator;
use crate::state::AppState;
use crate::utils::error::AppResult;

/// Fetch `feed`, filter it when a provider is given, and store the result
/// in the session.
pub async fn load_topics(
    state: &mut AppState,
    feed: &FeedSource,
    filter_with: Option<Arc<dyn LlmProvider>>,
) -> AppResult<TopicMap> {
    let fetched = match state.news_client()?.fetch_topics(feed).await? {
        FetchOutcome::Topics(topics) => topics,
        FetchOutcome::Empty => {
            warn!(feed = %feed.name, "No topics with a usable summary");
            TopicMap::new()
        }
    };

    let topics = match filter_with {
        Some(provider) if !fetched.is_empty() => {
            info!(feed = %feed.name, count = fetched.len(), "Scanning topics for satire");
            ContentGenerator::new(provider).filter_topics(&fetched).await?
        }
        _ => fetched,
    };

    state.session_mut().store_topics(feed.name.clone(), topics.clone());
    Ok(topics)
}

/// Numbered topic list. Numbers can be passed to `generate --topic`.
pub fn print_topics(topics: &TopicMap, summaries: bool, out: &mut dyn Write) -> AppResult<()> {
    for (i, topic) in topics.iter().enumerate() {
        writeln!(out, "{:>2}. {}", i + 1, topic.title)?;
        if summaries {
            writeln!(out, "    {}", topic.summary)?;
        }
    }
    Ok(())
}

pub async fn run_topics(
    state: &mut AppState,
    provider: Option<Arc<dyn LlmProvider>>,
    feed_name: &str,
    summaries: bool,
    out: &mut dyn Write,
) -> AppResult<()> {
    let feed = state.feed(feed_name)?.clone();
    let filtered = provider.is_some();
    let topics = load_topics(state, &feed, provider).await?;

    if topics.is_empty() {
        if filtered {
            writeln!(out, "No satire-worthy news found. Try another source.")?;
        } else {
            writeln!(out, "No topics found in {}.", feed.name)?;
        }
        return Ok(());
    }
    print_topics(&topics, summaries, out)
}
