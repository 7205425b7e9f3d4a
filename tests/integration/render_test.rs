//! Rendering Integration Tests

use jumla::{render_html, render_terminal_plain, GeneratedChat};

fn chat() -> GeneratedChat {
    GeneratedChat::new(
        "Fuel prices & the \"70 years\"",
        "Prices rose <again>.",
        "Samit Shah: Sab 70 saal ka kasoor hai.\n\
         Nirmal Siyaraman: What about <2004>?!\n\
         Mahendra Godi: **Mitron**, jai hind",
    )
}

#[test]
fn test_html_page_structure() {
    let html = render_html(&chat());
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<style>"));
    assert!(html.contains(".chat-bubble.right { background-color: #005C4B;"));

    let bubbles = html.matches("class=\"chat-bubble ").count();
    assert_eq!(bubbles, 3);
    assert!(html.contains(r#"<div class="chat-bubble left"><div class="speaker-name speaker-3">Mahendra Godi</div><div class="message-text">Mitron, jai hind</div></div>"#));
}

#[test]
fn test_html_escapes_everything_from_the_model() {
    let html = render_html(&chat());
    assert!(html.contains("What about &lt;2004&gt;?!"));
    assert!(html.contains("Fuel prices &amp; the &quot;70 years&quot;"));
    assert!(html.contains("Prices rose &lt;again&gt;."));
    assert!(!html.contains("<2004>"));
}

#[test]
fn test_terminal_alternates_sides() {
    let out = render_terminal_plain(&chat().styled());
    let name_lines: Vec<&str> = out
        .lines()
        .filter(|l| l.trim_start().starts_with(|c: char| c.is_uppercase()) && !l.starts_with("  "))
        .collect();
    assert_eq!(name_lines, vec!["Samit Shah", "Mahendra Godi"]);
    assert!(out.contains(&format!("{}Nirmal Siyaraman\n", " ".repeat(24))));
}
