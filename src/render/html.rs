//! HTML Rendering
//!
//! Renders a generated chat as a standalone page of chat bubbles. Speaker
//! names and messages are escaped.

use quick_xml::escape::escape;

use jumla_core::StyledUtterance;

use crate::services::session::GeneratedChat;

/// Bubble stylesheet. Class names match what `render_bubble` emits.
pub const CHAT_STYLE: &str = r#"
body { background-color: #0E1117; color: #FAFAFA; font-family: sans-serif; margin: 2em auto; max-width: 60em; }
.summary { color: #C0C0C0; line-height: 1.5; }
.chat-bubble { padding: 10px 15px; border-radius: 20px; max-width: 70%; margin-bottom: 10px; display: inline-block; clear: both; }
.chat-bubble.left { background-color: #333333; float: left; border-bottom-left-radius: 5px; }
.chat-bubble.right { background-color: #005C4B; float: right; border-bottom-right-radius: 5px; }
.speaker-name { font-weight: bold; margin-bottom: 5px; font-size: 0.9em; }
.message-text { font-size: 1em; line-height: 1.4; white-space: pre-wrap; color: #E0E0E0; }
.speaker-1 { color: #FFB3BA; } .speaker-2 { color: #BAFFC9; } .speaker-3 { color: #BAE1FF; } .speaker-4 { color: #FFFFBA; }
.chat-container { width: 100%; overflow: auto; }
"#;

/// One `chat-bubble` div.
pub fn render_bubble(utterance: &StyledUtterance) -> String {
    format!(
        r#"<div class="chat-bubble {align}"><div class="speaker-name {color}">{speaker}</div><div class="message-text">{message}</div></div>"#,
        align = utterance.style.alignment,
        color = utterance.style.color_class.css_class(),
        speaker = escape(utterance.speaker.as_str()),
        message = escape(utterance.message.as_str()),
    )
}

/// The chat container with every bubble, one per line.
pub fn render_bubbles(styled: &[StyledUtterance]) -> String {
    let mut out = String::from("<div class=\"chat-container\">\n");
    for utterance in styled {
        out.push_str(&render_bubble(utterance));
        out.push('\n');
    }
    out.push_str("</div>");
    out
}

/// A complete HTML document for `chat`, styled with a fresh style table.
pub fn render_html(chat: &GeneratedChat) -> String {
    let title = escape(chat.title.as_str());
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Jumla: {title}</title>\n<style>{style}</style>\n</head>\n<body>\n\
         <h2>On: {title}</h2>\n<p class=\"summary\">{summary}</p>\n\
         <h3>'Leaked' WhatsApp Chat</h3>\n{bubbles}\n</body>\n</html>\n",
        title = title,
        style = CHAT_STYLE,
        summary = escape(chat.summary.as_str()),
        bubbles = render_bubbles(&chat.styled()),
    )
}
