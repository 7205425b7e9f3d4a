//! Application State
//!
//! Everything one CLI invocation needs: the loaded config, the chat session
//! and factories for the news client and the LLM provider.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use jumla_llm::{create_provider, LlmProvider, ProviderType};
use jumla_news::{find_feed, FeedSource, NewsClient};

use crate::models::settings::AppConfig;
use crate::services::session::ChatSession;
use crate::storage::ConfigService;
use crate::utils::error::{AppError, AppResult};

/// Pick the API key for `provider`: the explicit flag wins over the
/// environment. The key must pass the provider's shape check.
pub fn resolve_api_key(
    provider: ProviderType,
    flag: Option<&str>,
    env_lookup: impl Fn(&str) -> Option<String>,
) -> AppResult<String> {
    let key = flag
        .map(str::to_string)
        .or_else(|| env_lookup(provider.api_key_env_var()))
        .map(|k| k.trim().to_string())
        .unwrap_or_default();

    if provider.validate_api_key(&key) {
        Ok(key)
    } else if key.is_empty() {
        Err(AppError::config(format!(
            "No API key for {}. Set {} or pass --api-key",
            provider.display_name(),
            provider.api_key_env_var()
        )))
    } else {
        Err(AppError::validation(format!(
            "The API key does not look like a {} key",
            provider.display_name()
        )))
    }
}

/// Application state for one invocation
pub struct AppState {
    config: ConfigService,
    session: ChatSession,
}

impl AppState {
    pub fn new(config: ConfigService) -> Self {
        Self {
            config,
            session: ChatSession::new(),
        }
    }

    /// Load the config from `~/.jumla/config.json`
    pub fn load() -> AppResult<Self> {
        Ok(Self::new(ConfigService::new()?))
    }

    pub fn config(&self) -> &AppConfig {
        self.config.get_config()
    }

    pub fn config_service(&self) -> &ConfigService {
        &self.config
    }

    pub fn config_service_mut(&mut self) -> &mut ConfigService {
        &mut self.config
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut ChatSession {
        &mut self.session
    }

    /// The `--provider` override, or the configured default
    pub fn provider_type(&self, provider_override: Option<ProviderType>) -> ProviderType {
        provider_override.unwrap_or(self.config().default_provider)
    }

    /// Build the LLM provider, reading the API key from `api_key` or the
    /// provider's environment variable.
    pub fn llm_provider(
        &self,
        provider_override: Option<ProviderType>,
        api_key: Option<&str>,
    ) -> AppResult<Arc<dyn LlmProvider>> {
        let provider = self.provider_type(provider_override);
        let key = resolve_api_key(provider, api_key, |var| std::env::var(var).ok())?;
        let config = self.config().provider_config(provider).with_api_key(key);
        debug!(provider = %provider, model = %config.model, "Creating LLM provider");
        Ok(create_provider(config)?)
    }

    /// News client using the configured timeout and entry limits
    pub fn news_client(&self) -> AppResult<NewsClient> {
        let config = self.config();
        Ok(NewsClient::new(Duration::from_secs(config.timeout_secs))?
            .with_limits(config.max_feed_entries, config.min_summary_chars))
    }

    /// Look up a configured feed by name
    pub fn feed(&self, name: &str) -> AppResult<&FeedSource> {
        Ok(find_feed(&self.config().feeds, name)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with(var: &'static str, value: &'static str) -> impl Fn(&str) -> Option<String> {
        move |name: &str| (name == var).then(|| value.to_string())
    }

    #[test]
    fn test_resolve_api_key_prefers_flag() {
        let key = resolve_api_key(
            ProviderType::Groq,
            Some("gsk_flag"),
            env_with("GROQ_API_KEY", "gsk_env"),
        )
        .unwrap();
        assert_eq!(key, "gsk_flag");
    }

    #[test]
    fn test_resolve_api_key_from_env() {
        let key = resolve_api_key(
            ProviderType::OpenAI,
            None,
            env_with("OPENAI_API_KEY", " sk-env "),
        )
        .unwrap();
        assert_eq!(key, "sk-env");
    }

    #[test]
    fn test_resolve_api_key_errors() {
        let missing = resolve_api_key(ProviderType::Groq, None, |_| None).unwrap_err();
        assert!(matches!(missing, AppError::Config(_)));
        assert!(missing.to_string().contains("GROQ_API_KEY"));

        let wrong = resolve_api_key(ProviderType::Groq, Some("sk-openai"), |_| None).unwrap_err();
        assert!(matches!(wrong, AppError::Validation(_)));
    }

    #[test]
    fn test_feed_lookup_and_provider_choice() {
        let temp = tempfile::tempdir().unwrap();
        let state = AppState::new(ConfigService::with_path(temp.path().join("config.json")).unwrap());

        assert_eq!(state.feed("the hindu (national)").unwrap().name, "The Hindu (National)");
        assert!(matches!(state.feed("Nope"), Err(AppError::News(_))));
        assert_eq!(state.provider_type(None), ProviderType::Groq);
        assert_eq!(state.provider_type(Some(ProviderType::OpenAI)), ProviderType::OpenAI);
    }

    #[test]
    fn test_llm_provider_with_flag_key() {
        let temp = tempfile::tempdir().unwrap();
        let state = AppState::new(ConfigService::with_path(temp.path().join("config.json")).unwrap());
        let provider = state
            .llm_provider(Some(ProviderType::OpenAI), Some("sk-test"))
            .unwrap();
        assert_eq!(provider.name(), "openai");
        assert_eq!(provider.model(), "gpt-3.5-turbo");
    }
}
