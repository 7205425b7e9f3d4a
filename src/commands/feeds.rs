//! Catalog Commands
//!
//! `jumla feeds` and `jumla providers`.

use std::io::Write;

use tracing::warn;

use jumla_llm::{create_provider, LlmProvider, ProviderType};

use crate::state::{resolve_api_key, AppState};
use crate::utils::error::AppResult;

/// Print the configured feeds, one per line
pub fn list_feeds(state: &AppState, out: &mut dyn Write) -> AppResult<()> {
    for feed in &state.config().feeds {
        writeln!(out, "{}\n    {}", feed.name, feed.url)?;
    }
    Ok(())
}

/// Print each provider with its default model and API key status.
///
/// With `check`, providers whose key looks valid are contacted.
pub async fn list_providers(
    state: &AppState,
    api_key: Option<&str>,
    check: bool,
    out: &mut dyn Write,
) -> AppResult<()> {
    let default = state.config().default_provider;
    for &provider in ProviderType::all() {
        let marker = if provider == default { "*" } else { " " };
        let model = state.config().provider_config(provider).model;
        // The --api-key flag only applies to the provider it was meant for
        let flag = api_key.filter(|k| provider.validate_api_key(k));
        let key = resolve_api_key(provider, flag, |var| std::env::var(var).ok());
        let status = match &key {
            Ok(_) => "key ok".to_string(),
            Err(_) => format!("no valid {}", provider.api_key_env_var()),
        };
        writeln!(
            out,
            "{} {:<8} {:<24} {:<24} {}",
            marker,
            provider.as_str(),
            provider.display_name(),
            model,
            status
        )?;

        if let (true, Ok(key)) = (check, key) {
            let config = state.config().provider_config(provider).with_api_key(key);
            let result = match create_provider(config) {
                Ok(p) => p.health_check().await,
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => writeln!(out, "    reachable")?,
                Err(e) => {
                    warn!(provider = provider.as_str(), error = %e, "Health check failed");
                    writeln!(out, "    unreachable: {}", e)?
                }
            }
        }
    }
    Ok(())
}
