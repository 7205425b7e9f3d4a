//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap.
//! Keeps argument parsing separate from execution logic.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use jumla_llm::ProviderType;

use crate::models::satire::{BlameTarget, KNOB_RANGE};

/// Jumla: the satirical news engine
#[derive(Parser, Debug)]
#[command(name = "jumla")]
#[command(about = "Turn news headlines into leaked political group chats", long_about = None)]
#[command(version)]
pub struct Cli {
    /// LLM provider (groq or openai); defaults to the configured provider
    #[arg(long, global = true)]
    pub provider: Option<ProviderType>,

    /// API key; defaults to GROQ_API_KEY / OPENAI_API_KEY
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the configured news feeds
    Feeds,

    /// List LLM providers and API key status
    Providers {
        /// Contact each provider that has a key and report reachability
        #[arg(long)]
        check: bool,
    },

    /// Fetch a feed and list its satire-worthy topics
    Topics {
        /// Feed name (see `jumla feeds`)
        #[arg(long)]
        feed: String,

        /// List every topic without asking the model
        #[arg(long)]
        all: bool,

        /// Print each topic's summary under its title
        #[arg(long)]
        summaries: bool,
    },

    /// Generate a leaked chat about one topic
    Generate(GenerateArgs),

    /// Render a saved chat transcript
    Render(RenderArgs),

    /// Show or change settings in ~/.jumla/config.json
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Arguments of `jumla generate`
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Feed name (see `jumla feeds`)
    #[arg(long)]
    pub feed: String,

    /// Topic title, or its number in the topic list
    #[arg(long)]
    pub topic: String,

    /// Skip the satire-worthiness filter
    #[arg(long)]
    pub no_filter: bool,

    /// Who gets blamed: opposition, previous-government, media, foreign-forces
    #[arg(long, default_value = "opposition")]
    pub blame: BlameTarget,

    /// How wild the final promise is (1-10)
    #[arg(long, default_value_t = 8, value_parser = knob)]
    pub promise_tone: u8,

    /// How much nationalistic jargon is used (1-10)
    #[arg(long, default_value_t = 7, value_parser = knob)]
    pub nationalism: u8,

    /// How much grand, unrelated projects come up (1-10)
    #[arg(long, default_value_t = 5, value_parser = knob)]
    pub development: u8,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Also save the raw model output to this file
    #[arg(long)]
    pub raw: Option<PathBuf>,
}

/// Arguments of `jumla render`
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// File containing `Name: message` lines
    pub file: PathBuf,

    /// Headline shown above the chat; defaults to the file name
    #[arg(long)]
    pub title: Option<String>,

    /// News summary shown above the chat
    #[arg(long, default_value = "")]
    pub summary: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Output options shared by `generate` and `render`
#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Write an HTML page to this path
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// Print the styled transcript as JSON instead of chat bubbles
    #[arg(long)]
    pub json: bool,

    /// Disable terminal colors (also honored via NO_COLOR)
    #[arg(long)]
    pub plain: bool,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the current config
    Show,
    /// Restore the default config
    Reset,
    /// Change one setting, e.g. `temperature=0.7`
    Set {
        /// KEY=VALUE
        assignment: String,
    },
}

fn knob(value: &str) -> Result<u8, String> {
    let n: u8 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if KNOB_RANGE.contains(&n) {
        Ok(n)
    } else {
        Err(format!(
            "must be between {} and {}",
            KNOB_RANGE.start(),
            KNOB_RANGE.end()
        ))
    }
}
