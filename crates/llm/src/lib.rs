//! Jumla LLM
//!
//! Provides a unified interface for the language models used by Jumla:
//! - Groq (Llama 3.1)
//! - OpenAI (GPT-3.5 Turbo)
//!
//! Both are reached through the OpenAI-compatible Chat Completions API.
//! Also includes the prompt template engine and the HTTP client factory.

pub mod http_client;
pub mod openai;
pub mod provider;
pub mod template;
pub mod types;

// Re-export main types
pub use http_client::build_http_client;
pub use openai::OpenAIProvider;
pub use provider::{create_provider, LlmProvider};
pub use template::PromptTemplate;
pub use types::*;
