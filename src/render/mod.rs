//! Rendering
//!
//! Presentation of styled transcripts as HTML or terminal text.

pub mod html;
pub mod terminal;

pub use html::{render_bubble, render_bubbles, render_html, CHAT_STYLE};
pub use terminal::{render_terminal, render_terminal_plain};
