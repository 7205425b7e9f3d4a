//! Terminal Rendering
//!
//! Chat bubbles for the terminal: left speakers flush, right speakers
//! indented, names in their slot color.

use owo_colors::OwoColorize;

use jumla_core::{Alignment, ColorClass, StyledUtterance};

/// Column at which right-aligned bubbles start.
pub const RIGHT_INDENT: usize = 24;

/// Maximum width of a bubble's message text.
pub const BUBBLE_WIDTH: usize = 56;

/// Name color for a slot, matching the HTML stylesheet.
fn slot_rgb(color: ColorClass) -> (u8, u8, u8) {
    match color.slot() {
        1 => (0xFF, 0xB3, 0xBA),
        2 => (0xBA, 0xFF, 0xC9),
        3 => (0xBA, 0xE1, 0xFF),
        _ => (0xFF, 0xFF, 0xBA),
    }
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn render(styled: &[StyledUtterance], color: bool) -> String {
    let mut out = String::new();
    for utterance in styled {
        let indent = match utterance.style.alignment {
            Alignment::Left => String::new(),
            Alignment::Right => " ".repeat(RIGHT_INDENT),
        };

        let name = if color {
            let (r, g, b) = slot_rgb(utterance.style.color_class);
            utterance.speaker.truecolor(r, g, b).bold().to_string()
        } else {
            utterance.speaker.clone()
        };
        out.push_str(&indent);
        out.push_str(&name);
        out.push('\n');

        for line in wrap(&utterance.message, BUBBLE_WIDTH) {
            out.push_str(&indent);
            out.push_str("  ");
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// Colored bubbles for an ANSI terminal.
pub fn render_terminal(styled: &[StyledUtterance]) -> String {
    render(styled, true)
}

/// Same layout without escape codes, for pipes and `NO_COLOR`.
pub fn render_terminal_plain(styled: &[StyledUtterance]) -> String {
    render(styled, false)
}
