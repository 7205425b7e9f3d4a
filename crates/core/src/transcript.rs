//! Transcript Parsing
//!
//! Turns generated "leaked chat" text into an ordered list of [`Utterance`]s.
//!
//! Every physical line is run through a small state machine:
//!
//! ```text
//! Start ──ws──▶ Start
//! Start ──'['──▶ Tag ──']'──▶ AfterTag ──ws──▶ AfterTag
//! Start ──other──▶ Speaker          AfterTag ──other──▶ Speaker
//!                                   AfterTag ──':'──▶ Tag
//! Speaker ──':'──▶ Message (rest of line)
//! ```
//!
//! A tag runs to the first `]` that is followed by a usable speaker, so
//! `[12]: [note] Bob: hi` has the tag `[12]: [note]`. If no `]` works, the
//! tag is abandoned and the line is re-read with the speaker starting at the
//! `[`. Lines that never reach
//! `Message` produce nothing. Each matched message is then cleaned of echoes
//! of the speaker's own name and of stray `**` emphasis markers.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Two-character bold marker removed from every message.
pub const EMPHASIS_MARKER: &str = "**";

/// One parsed `speaker: message` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    pub speaker: String,
    pub message: String,
}

impl Utterance {
    pub fn new(speaker: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            message: message.into(),
        }
    }
}

/// Raw result of matching a single line, before message cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMatch<'a> {
    /// Bracketed prefix such as `[10:42 PM]`, including the brackets.
    pub tag: Option<&'a str>,
    /// Speaker name, trimmed. Never empty.
    pub speaker: &'a str,
    /// Text after the first colon, trimmed. May be empty.
    pub message: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    Start,
    Tag { open: usize },
    AfterTag { open: usize, close: usize },
    Speaker { start: usize, tag: Option<(usize, usize)> },
}

/// Match one line against the `[tag] speaker: message` grammar.
///
/// Returns `None` for blank lines, lines without a colon and lines whose
/// speaker segment is empty.
pub fn match_line(line: &str) -> Option<LineMatch<'_>> {
    let mut state = LineState::Start;

    for (idx, ch) in line.char_indices() {
        state = match state {
            LineState::Start if ch.is_whitespace() => LineState::Start,
            LineState::Start if ch == '[' => LineState::Tag { open: idx },
            LineState::Start if ch == ':' => return None,
            LineState::Start => LineState::Speaker {
                start: idx,
                tag: None,
            },
            LineState::Tag { open } if ch == ']' => LineState::AfterTag { open, close: idx },
            LineState::Tag { .. } => state,
            LineState::AfterTag { .. } if ch.is_whitespace() => state,
            // Empty speaker: keep looking for a later `]`
            LineState::AfterTag { open, .. } if ch == ':' => LineState::Tag { open },
            LineState::AfterTag { open, close } => LineState::Speaker {
                start: idx,
                tag: Some((open, close)),
            },
            LineState::Speaker { start, tag } if ch == ':' => {
                let speaker = line[start..idx].trim();
                let message = line[idx + 1..].trim();
                return match tag {
                    _ if !speaker.is_empty() => Some(LineMatch {
                        tag: tag.map(|(open, close)| &line[open..=close]),
                        speaker,
                        message,
                    }),
                    Some((open, _)) => untagged(line, open),
                    None => None,
                };
            }
            LineState::Speaker { .. } => state,
        };
    }

    // Ran out of input before a colon. Only a pending tag can still be
    // re-read as part of the speaker.
    match state {
        LineState::Tag { open }
        | LineState::AfterTag { open, .. }
        | LineState::Speaker {
            tag: Some((open, _)),
            ..
        } => untagged(line, open),
        _ => None,
    }
}

/// Re-read a line from `start` with no tag: speaker up to the first colon.
fn untagged(line: &str, start: usize) -> Option<LineMatch<'_>> {
    let (speaker, message) = line[start..].split_once(':')?;
    let speaker = speaker.trim();
    if speaker.is_empty() {
        return None;
    }
    Some(LineMatch {
        tag: None,
        speaker,
        message: message.trim(),
    })
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Byte length of `name` at the start of `text`, compared case-insensitively.
fn name_prefix_len(text: &str, name: &str) -> Option<usize> {
    let mut rest = text.char_indices();
    for n in name.chars() {
        match rest.next() {
            Some((_, t)) if chars_eq_ignore_case(t, n) => {}
            _ => return None,
        }
    }
    Some(rest.next().map_or(text.len(), |(idx, _)| idx))
}

/// Byte offset where `name` starts if `text` ends with it, case-insensitively.
fn name_suffix_start(text: &str, name: &str) -> Option<usize> {
    let mut start = text.len();
    let mut rest = text.char_indices().rev();
    for n in name.chars().rev() {
        match rest.next() {
            Some((idx, t)) if chars_eq_ignore_case(t, n) => start = idx,
            _ => return None,
        }
    }
    Some(start)
}

fn skip_stars(text: &str) -> &str {
    text.trim_start_matches('*')
}

/// Length of a leading `\s*\**NAME\**\s*:?\s*` echo.
///
/// Stars before the name are given back one at a time when the name itself
/// starts with `*`.
fn leading_echo_len(message: &str, name: &str) -> Option<usize> {
    let after_ws = message.trim_start();
    let stars = after_ws.len() - skip_stars(after_ws).len();
    let head = message.len() - after_ws.len();

    (0..=stars).rev().find_map(|taken| {
        let at = head + taken;
        let name_len = name_prefix_len(&message[at..], name)?;
        let tail = skip_stars(&message[at + name_len..]).trim_start();
        let tail = tail.strip_prefix(':').unwrap_or(tail).trim_start();
        Some(message.len() - tail.len())
    })
}

/// Start of the leftmost trailing `\s*\**NAME\**\s*` echo.
fn trailing_echo_start(message: &str, name: &str) -> Option<usize> {
    let body = message.trim_end();
    let stars = body.len() - body.trim_end_matches('*').len();

    (0..=stars)
        .filter_map(|left| {
            let start = name_suffix_start(&body[..body.len() - left], name)?;
            let before = message[..start].trim_end_matches('*').trim_end();
            Some(before.len())
        })
        .min()
}

/// Normalize a message body for display.
///
/// Removes one leading and one trailing echo of the speaker's name (matched
/// case-insensitively and literally, optionally wrapped in `*`, the leading
/// one optionally followed by a colon), trims, then deletes every `**`.
pub fn clean_message(speaker: &str, message: &str) -> String {
    if speaker.trim().is_empty() {
        return message.trim().replace(EMPHASIS_MARKER, "");
    }

    let rest = match leading_echo_len(message, speaker) {
        Some(len) => &message[len..],
        None => message,
    };
    let rest = match trailing_echo_start(rest, speaker) {
        Some(start) => &rest[..start],
        None => rest,
    };
    rest.trim().replace(EMPHASIS_MARKER, "")
}

/// Parse generated chat text into cleaned utterances, in source order.
///
/// Never fails: malformed lines are skipped.
pub fn parse(text: &str) -> Vec<Utterance> {
    let mut utterances = Vec::new();
    let mut dropped = 0usize;

    for line in text.lines() {
        match match_line(line) {
            Some(m) => utterances.push(Utterance::new(
                m.speaker,
                clean_message(m.speaker, m.message),
            )),
            None if line.trim().is_empty() => {}
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(dropped, kept = utterances.len(), "Dropped transcript lines without a speaker");
    }
    utterances
}
