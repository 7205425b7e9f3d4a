//! HTML Stripping
//!
//! Feed summaries often carry markup (links, `<font>` tags, entities). Only
//! the text nodes are kept.

use scraper::Html;

/// Concatenate the text nodes of an HTML fragment, decoding entities.
///
/// Whitespace is kept as-is; plain text passes through unchanged.
pub fn html_to_text(fragment: &str) -> String {
    if !fragment.contains('<') && !fragment.contains('&') {
        return fragment.to_string();
    }
    Html::parse_fragment(fragment)
        .root_element()
        .text()
        .collect()
}
