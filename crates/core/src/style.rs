//! Speaker Styles
//!
//! Assigns each distinct speaker a color slot and a bubble alignment, keyed by
//! the order in which speakers first appear in one render pass.
//!
//! The [`StyleTable`] is owned by the caller and lives for exactly one pass:
//! create a fresh table per chat. Lookups use exact, case-sensitive names.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::transcript::Utterance;

/// Number of distinct color slots before colors repeat.
pub const COLOR_SLOTS: usize = 4;

/// One of the fixed color slots, numbered `1..=COLOR_SLOTS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ColorClass(u8);

impl ColorClass {
    /// Create a color class from a 1-based slot number.
    pub fn new(slot: u8) -> CoreResult<Self> {
        if (1..=COLOR_SLOTS as u8).contains(&slot) {
            Ok(Self(slot))
        } else {
            Err(CoreError::validation(format!(
                "color slot {} is out of range 1..={}",
                slot, COLOR_SLOTS
            )))
        }
    }

    /// Slot assigned to the speaker with the given first-appearance ordinal.
    pub fn for_ordinal(ordinal: usize) -> Self {
        Self((ordinal % COLOR_SLOTS) as u8 + 1)
    }

    /// The 1-based slot number.
    pub fn slot(self) -> u8 {
        self.0
    }

    /// CSS class used by the HTML renderer (`speaker-1` .. `speaker-4`).
    pub fn css_class(self) -> String {
        format!("speaker-{}", self.0)
    }
}

impl TryFrom<u8> for ColorClass {
    type Error = CoreError;

    fn try_from(slot: u8) -> CoreResult<Self> {
        Self::new(slot)
    }
}

impl From<ColorClass> for u8 {
    fn from(class: ColorClass) -> u8 {
        class.0
    }
}

/// Which side of the chat a speaker's bubbles sit on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Right,
}

impl Alignment {
    /// Even ordinals go left, odd ordinals go right.
    pub fn for_ordinal(ordinal: usize) -> Self {
        if ordinal % 2 == 0 {
            Alignment::Left
        } else {
            Alignment::Right
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Right => "right",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alignment {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "left" => Ok(Alignment::Left),
            "right" => Ok(Alignment::Right),
            other => Err(CoreError::parse(format!("unknown alignment '{}'", other))),
        }
    }
}

/// Display style of one speaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerStyle {
    pub color_class: ColorClass,
    pub alignment: Alignment,
}

impl SpeakerStyle {
    pub fn for_ordinal(ordinal: usize) -> Self {
        Self {
            color_class: ColorClass::for_ordinal(ordinal),
            alignment: Alignment::for_ordinal(ordinal),
        }
    }
}

/// Speaker → style mapping built up during a single render pass.
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    styles: HashMap<String, SpeakerStyle>,
    order: Vec<String>,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the style for `speaker`, assigning the next one on first sight.
    pub fn style_for(&mut self, speaker: &str) -> SpeakerStyle {
        if let Some(style) = self.styles.get(speaker) {
            return *style;
        }
        let style = SpeakerStyle::for_ordinal(self.order.len());
        self.styles.insert(speaker.to_string(), style);
        self.order.push(speaker.to_string());
        style
    }

    /// Style already assigned to `speaker`, if any.
    pub fn get(&self, speaker: &str) -> Option<SpeakerStyle> {
        self.styles.get(speaker).copied()
    }

    /// Speakers in first-appearance order.
    pub fn speakers(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// An utterance paired with the style of its speaker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledUtterance {
    pub speaker: String,
    pub message: String,
    #[serde(flatten)]
    pub style: SpeakerStyle,
}

/// Run one render pass over `utterances`, growing `table` as new speakers appear.
pub fn style_transcript(utterances: &[Utterance], table: &mut StyleTable) -> Vec<StyledUtterance> {
    utterances
        .iter()
        .map(|u| StyledUtterance {
            speaker: u.speaker.clone(),
            message: u.message.clone(),
            style: table.style_for(&u.speaker),
        })
        .collect()
}

/// Serialize a styled transcript as pretty JSON.
pub fn styled_to_json(styled: &[StyledUtterance]) -> CoreResult<String> {
    Ok(serde_json::to_string_pretty(styled)?)
}
