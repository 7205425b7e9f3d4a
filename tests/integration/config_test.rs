//! Config Integration Tests
//!
//! The config service on disk and the `jumla config` commands on top of it.

use clap::Parser;

use jumla::cli::Cli;
use jumla::commands::dispatch;
use jumla::{AppConfig, AppError, AppState, ConfigService};
use jumla_llm::ProviderType;

fn state_in(dir: &tempfile::TempDir) -> AppState {
    AppState::new(ConfigService::with_path(dir.path().join("config.json")).unwrap())
}

async fn run(state: &mut AppState, args: &[&str]) -> Result<String, AppError> {
    let cli = Cli::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    dispatch(cli, state, &mut out).await?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_default_file_contents() {
    let dir = tempfile::tempdir().unwrap();
    let _service = ConfigService::with_path(dir.path().join("config.json")).unwrap();

    let raw = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    let config: AppConfig = serde_json::from_str(&raw).unwrap();
    assert_eq!(config.default_provider, ProviderType::Groq);
    assert_eq!(config.feeds[0].name, "Mainstream Mix (Google)");
    assert!(!raw.contains("api_key"));
}

#[tokio::test]
async fn test_config_set_persists() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = state_in(&dir);

    let out = run(&mut state, &["jumla", "config", "set", "model=llama-3.3-70b-versatile"])
        .await
        .unwrap();
    assert!(out.contains("Updated model=llama-3.3-70b-versatile"));

    let reopened = state_in(&dir);
    assert_eq!(
        reopened.config().model.as_deref(),
        Some("llama-3.3-70b-versatile")
    );
}

#[tokio::test]
async fn test_config_set_rejects_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = state_in(&dir);
    let err = run(&mut state, &["jumla", "config", "set", "theme=dark"])
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_feeds_command_lists_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = state_in(&dir);
    let out = run(&mut state, &["jumla", "feeds"]).await.unwrap();
    assert!(out.contains("The Hindu (National)\n    https://www.thehindu.com/news/national/?service=rss"));
    assert_eq!(out.lines().count(), 8);
}

#[tokio::test]
async fn test_generate_without_key_fails_before_network() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = state_in(&dir);
    let err = run(
        &mut state,
        &[
            "jumla",
            "--api-key",
            "not-a-key",
            "generate",
            "--feed",
            "NDTV (India)",
            "--topic",
            "1",
        ],
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}
