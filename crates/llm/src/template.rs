//! Prompt Templates
//!
//! Templates use `{name}` placeholders. `{{` and `}}` render as literal
//! braces. Rendering fails if any placeholder has no value.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::types::{LlmError, LlmResult};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap_or_else(|_| unreachable!())
});

/// A prompt with named placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    text: String,
    variables: Vec<String>,
}

impl PromptTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut variables: Vec<String> = Vec::new();
        for caps in PLACEHOLDER.captures_iter(&text) {
            if let Some(name) = caps.get(1) {
                if !variables.iter().any(|v| v == name.as_str()) {
                    variables.push(name.as_str().to_string());
                }
            }
        }
        Self { text, variables }
    }

    /// Placeholder names in order of first appearance.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Substitute every placeholder from `values`.
    ///
    /// Extra values are ignored.
    pub fn render(&self, values: &HashMap<&str, String>) -> LlmResult<String> {
        if let Some(missing) = self
            .variables
            .iter()
            .find(|v| !values.contains_key(v.as_str()))
        {
            return Err(LlmError::InvalidRequest {
                message: format!("Missing template variable '{}'", missing),
            });
        }

        let rendered = PLACEHOLDER.replace_all(&self.text, |caps: &Captures| {
            match caps.get(1) {
                Some(name) => values.get(name.as_str()).cloned().unwrap_or_default(),
                None if &caps[0] == "{{" => "{".to_string(),
                None => "}".to_string(),
            }
        });
        Ok(rendered.into_owned())
    }
}
