//! Satire Parameters
//!
//! The knobs an operator turns before generating a chat.

use std::collections::HashMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::error::{AppError, AppResult};

/// Allowed range for every 1-10 knob.
pub const KNOB_RANGE: RangeInclusive<u8> = 1..=10;

/// Who the party blames for the news.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlameTarget {
    #[default]
    Opposition,
    PreviousGovernment,
    Media,
    ForeignForces,
}

impl BlameTarget {
    pub fn all() -> &'static [BlameTarget] {
        &[
            BlameTarget::Opposition,
            BlameTarget::PreviousGovernment,
            BlameTarget::Media,
            BlameTarget::ForeignForces,
        ]
    }

    /// Label used in prompts and listings.
    pub fn label(&self) -> &'static str {
        match self {
            BlameTarget::Opposition => "Opposition",
            BlameTarget::PreviousGovernment => "Previous Government",
            BlameTarget::Media => "Media",
            BlameTarget::ForeignForces => "Foreign Forces",
        }
    }
}

impl fmt::Display for BlameTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BlameTarget {
    type Err = AppError;

    /// Accepts labels and their kebab/snake forms, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "opposition" => Ok(BlameTarget::Opposition),
            "previousgovernment" => Ok(BlameTarget::PreviousGovernment),
            "media" => Ok(BlameTarget::Media),
            "foreignforces" => Ok(BlameTarget::ForeignForces),
            _ => Err(AppError::validation(format!(
                "Unknown blame target '{}'. Expected one of: {}",
                s,
                BlameTarget::all()
                    .iter()
                    .map(|b| b.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}

/// Tone parameters woven into the chat prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SatireParams {
    pub blame: BlameTarget,
    /// How wild the final promise is
    pub promise_tone: u8,
    /// How much nationalistic jargon is used
    pub nationalism_level: u8,
    /// How much grand, unrelated projects come up
    pub development_focus: u8,
}

impl Default for SatireParams {
    fn default() -> Self {
        Self {
            blame: BlameTarget::Opposition,
            promise_tone: 8,
            nationalism_level: 7,
            development_focus: 5,
        }
    }
}

fn check_knob(name: &str, value: u8) -> AppResult<()> {
    if KNOB_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "{} must be between {} and {}, got {}",
            name,
            KNOB_RANGE.start(),
            KNOB_RANGE.end(),
            value
        )))
    }
}

impl SatireParams {
    pub fn new(
        blame: BlameTarget,
        promise_tone: u8,
        nationalism_level: u8,
        development_focus: u8,
    ) -> AppResult<Self> {
        let params = Self {
            blame,
            promise_tone,
            nationalism_level,
            development_focus,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> AppResult<()> {
        check_knob("promise_tone", self.promise_tone)?;
        check_knob("nationalism_level", self.nationalism_level)?;
        check_knob("development_focus", self.development_focus)
    }

    /// Prompt variables for these parameters (everything but the summary).
    pub fn template_values(&self) -> HashMap<&'static str, String> {
        HashMap::from([
            ("blame", self.blame.label().to_string()),
            ("promise_tone", self.promise_tone.to_string()),
            ("nationalism_level", self.nationalism_level.to_string()),
            ("development_focus", self.development_focus.to_string()),
        ])
    }
}
