//! Generate Command
//!
//! `jumla generate`: fetch, filter, pick a topic, write the chat, render it.

use std::fs;
use std::io::Write;
use std::sync::Arc;

use tracing::info;

use jumla_llm::LlmProvider;

use crate::cli::GenerateArgs;
use crate::commands::render::emit_chat;
use crate::commands::topics::load_topics;
use crate::models::satire::SatireParams;
use crate::services::generator::ContentGenerator;
use crate::services::session::GeneratedChat;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

impl GenerateArgs {
    /// Validated satire parameters from the flags
    pub fn params(&self) -> AppResult<SatireParams> {
        SatireParams::new(
            self.blame,
            self.promise_tone,
            self.nationalism,
            self.development,
        )
    }
}

pub async fn run_generate(
    state: &mut AppState,
    provider: Arc<dyn LlmProvider>,
    args: &GenerateArgs,
    out: &mut dyn Write,
) -> AppResult<()> {
    let params = args.params()?;
    let feed = state.feed(&args.feed)?.clone();

    let filter = (!args.no_filter).then(|| provider.clone());
    let topics = load_topics(state, &feed, filter).await?;
    if topics.is_empty() {
        return Err(AppError::not_found(format!(
            "no satire-worthy topics in {}",
            feed.name
        )));
    }

    let topic = state.session_mut().select_topic(&args.topic)?.clone();
    info!(topic = %topic.title, "Selected topic");

    let raw = ContentGenerator::new(provider)
        .generate_chat(&topic.summary, &params)
        .await?;
    let chat = GeneratedChat::new(topic.title, topic.summary, raw).with_params(params);

    if let Some(path) = &args.raw {
        fs::write(path, &chat.raw_text)?;
        info!(path = %path.display(), "Saved raw chat");
    }

    emit_chat(&chat, &args.output, out)?;
    state.session_mut().record_chat(chat);
    Ok(())
}
