//! Settings Models
//!
//! Application configuration and settings data structures.

use serde::{Deserialize, Serialize};

use jumla_llm::{ProviderConfig, ProviderType};
use jumla_news::{default_feeds, FeedSource, DEFAULT_MAX_ENTRIES, DEFAULT_MIN_SUMMARY_CHARS};

use crate::utils::error::{AppError, AppResult};

/// Application configuration stored in config.json
///
/// API keys are not stored here; they come from the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Provider used when `--provider` is not given
    pub default_provider: ProviderType,
    /// Model override; the provider default is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Chat Completions endpoint override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Sampling temperature for chat generation
    pub temperature: f32,
    /// Maximum tokens per completion
    pub max_tokens: u32,
    /// HTTP timeout for feeds and LLM calls, in seconds
    pub timeout_secs: u64,
    /// Number of feed entries considered per fetch
    #[serde(default = "default_max_feed_entries")]
    pub max_feed_entries: usize,
    /// Summaries of this many characters or fewer are dropped
    #[serde(default = "default_min_summary_chars")]
    pub min_summary_chars: usize,
    /// News sources offered to the operator
    #[serde(default = "default_feeds")]
    pub feeds: Vec<FeedSource>,
}

fn default_max_feed_entries() -> usize {
    DEFAULT_MAX_ENTRIES
}

fn default_min_summary_chars() -> usize {
    DEFAULT_MIN_SUMMARY_CHARS
}

impl Default for AppConfig {
    fn default() -> Self {
        let provider = ProviderConfig::default();
        Self {
            default_provider: provider.provider,
            model: None,
            base_url: None,
            temperature: provider.temperature,
            max_tokens: provider.max_tokens,
            timeout_secs: provider.timeout_secs,
            max_feed_entries: DEFAULT_MAX_ENTRIES,
            min_summary_chars: DEFAULT_MIN_SUMMARY_CHARS,
            feeds: default_feeds(),
        }
    }
}

/// Settings update request (partial update)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SettingsUpdate {
    pub default_provider: Option<ProviderType>,
    /// An empty string clears the override
    pub model: Option<String>,
    /// An empty string clears the override
    pub base_url: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub timeout_secs: Option<u64>,
    pub max_feed_entries: Option<usize>,
    pub min_summary_chars: Option<usize>,
}

/// Keys accepted by `SettingsUpdate::from_key_value`.
pub const SETTINGS_KEYS: &[&str] = &[
    "default_provider",
    "model",
    "base_url",
    "temperature",
    "max_tokens",
    "timeout_secs",
    "max_feed_entries",
    "min_summary_chars",
];

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> AppResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid value for {}: '{}'", key, value)))
}

impl SettingsUpdate {
    /// Build a single-field update from a `key=value` pair.
    pub fn from_key_value(key: &str, value: &str) -> AppResult<Self> {
        let mut update = Self::default();
        match key.trim() {
            "default_provider" => {
                update.default_provider = Some(value.parse().map_err(|e: jumla_llm::LlmError| {
                    AppError::validation(e.to_string())
                })?)
            }
            "model" => update.model = Some(value.trim().to_string()),
            "base_url" => update.base_url = Some(value.trim().to_string()),
            "temperature" => update.temperature = Some(parse_value(key, value)?),
            "max_tokens" => update.max_tokens = Some(parse_value(key, value)?),
            "timeout_secs" => update.timeout_secs = Some(parse_value(key, value)?),
            "max_feed_entries" => update.max_feed_entries = Some(parse_value(key, value)?),
            "min_summary_chars" => update.min_summary_chars = Some(parse_value(key, value)?),
            other => {
                return Err(AppError::validation(format!(
                    "Unknown setting '{}'. Known settings: {}",
                    other,
                    SETTINGS_KEYS.join(", ")
                )))
            }
        }
        Ok(update)
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl AppConfig {
    /// Apply a partial update to the configuration
    pub fn apply_update(&mut self, update: SettingsUpdate) {
        if let Some(provider) = update.default_provider {
            self.default_provider = provider;
        }
        if let Some(model) = update.model {
            self.model = non_empty(model);
        }
        if let Some(base_url) = update.base_url {
            self.base_url = non_empty(base_url);
        }
        if let Some(temperature) = update.temperature {
            self.temperature = temperature;
        }
        if let Some(max_tokens) = update.max_tokens {
            self.max_tokens = max_tokens;
        }
        if let Some(timeout) = update.timeout_secs {
            self.timeout_secs = timeout;
        }
        if let Some(max) = update.max_feed_entries {
            self.max_feed_entries = max;
        }
        if let Some(min) = update.min_summary_chars {
            self.min_summary_chars = min;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "Invalid temperature: {}. Must be between 0.0 and 2.0",
                self.temperature
            ));
        }

        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.max_feed_entries == 0 {
            return Err("max_feed_entries must be greater than 0".to_string());
        }

        if self.feeds.is_empty() {
            return Err("At least one feed must be configured".to_string());
        }

        for (i, feed) in self.feeds.iter().enumerate() {
            feed.validate().map_err(|e| e.to_string())?;
            if self.feeds[..i].iter().any(|f| f.name == feed.name) {
                return Err(format!("Duplicate feed name: {}", feed.name));
            }
        }

        Ok(())
    }

    /// Provider settings for `provider`, with this config's generation knobs.
    ///
    /// The model and endpoint overrides only apply to the default provider.
    pub fn provider_config(&self, provider: ProviderType) -> ProviderConfig {
        let mut config = ProviderConfig::for_provider(provider);
        if provider == self.default_provider {
            if let Some(model) = &self.model {
                config = config.with_model(model.clone());
            }
            config.base_url = self.base_url.clone();
        }
        config.temperature = self.temperature;
        config.max_tokens = self.max_tokens;
        config.timeout_secs = self.timeout_secs;
        config
    }
}
