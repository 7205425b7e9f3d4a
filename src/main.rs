//! Jumla CLI entry point

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jumla::cli::Cli;
use jumla::commands::dispatch;
use jumla::state::AppState;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; keys may come from the real environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut state = AppState::load().context("failed to load ~/.jumla/config.json")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dispatch(cli, &mut state, &mut out).await?;
    out.flush()?;
    Ok(())
}
