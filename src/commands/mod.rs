//! CLI Commands
//!
//! Handlers behind each `jumla` subcommand. Handlers write their output to
//! the given writer so they can run against a buffer in tests.

pub mod feeds;
pub mod generate;
pub mod render;
pub mod settings;
pub mod topics;

use std::io::Write;

use crate::cli::{Cli, Commands};
use crate::state::AppState;
use crate::utils::error::AppResult;

pub use feeds::{list_feeds, list_providers};
pub use generate::run_generate;
pub use render::{emit_chat, load_chat, run_render};
pub use settings::{parse_assignment, run_config};
pub use topics::{load_topics, print_topics, run_topics};

/// Run the parsed command line against `state`.
pub async fn dispatch(cli: Cli, state: &mut AppState, out: &mut dyn Write) -> AppResult<()> {
    let api_key = cli.api_key.as_deref();
    match &cli.command {
        Commands::Feeds => list_feeds(state, out),
        Commands::Providers { check } => list_providers(state, api_key, *check, out).await,
        Commands::Topics {
            feed,
            all,
            summaries,
        } => {
            let provider = if *all {
                None
            } else {
                Some(state.llm_provider(cli.provider, api_key)?)
            };
            run_topics(state, provider, feed, *summaries, out).await
        }
        Commands::Generate(args) => {
            let provider = state.llm_provider(cli.provider, api_key)?;
            run_generate(state, provider, args, out).await
        }
        Commands::Render(args) => run_render(args, out),
        Commands::Config { action } => run_config(state, action, out),
    }
}
