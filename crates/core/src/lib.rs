//! Jumla Core
//!
//! Foundational types for the Jumla workspace: the transcript parser that turns
//! generated chat text into utterances, and the per-render speaker style table.
//! This crate performs no I/O and has no dependency on the LLM or news crates.
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `transcript` - Line matcher, message cleaning and `parse`
//! - `style` - Speaker style assignment (`StyleTable`, `style_transcript`)

pub mod error;
pub mod style;
pub mod transcript;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Transcript Parsing ─────────────────────────────────────────────────
pub use transcript::{clean_message, match_line, parse, LineMatch, Utterance, EMPHASIS_MARKER};

// ── Speaker Styles ─────────────────────────────────────────────────────
pub use style::{
    style_transcript, styled_to_json, Alignment, ColorClass, SpeakerStyle, StyleTable,
    StyledUtterance, COLOR_SLOTS,
};
