//! Render Commands
//!
//! `jumla render` and the output step shared with `jumla generate`.

use std::fs;
use std::io::Write;

use tracing::info;

use jumla_core::styled_to_json;

use crate::cli::{OutputArgs, RenderArgs};
use crate::render::{render_html, render_terminal, render_terminal_plain};
use crate::services::session::GeneratedChat;
use crate::utils::error::AppResult;

fn colors_enabled(output: &OutputArgs) -> bool {
    !output.plain && std::env::var_os("NO_COLOR").is_none()
}

/// Print `chat` as bubbles or JSON and write the HTML page if requested.
pub fn emit_chat(chat: &GeneratedChat, output: &OutputArgs, out: &mut dyn Write) -> AppResult<()> {
    let styled = chat.styled();

    if output.json {
        writeln!(out, "{}", styled_to_json(&styled)?)?;
    } else {
        writeln!(out, "On: {}", chat.title)?;
        if !chat.summary.is_empty() {
            writeln!(out, "{}", chat.summary)?;
        }
        writeln!(out)?;
        let rendered = if colors_enabled(output) {
            render_terminal(&styled)
        } else {
            render_terminal_plain(&styled)
        };
        out.write_all(rendered.as_bytes())?;
    }

    if let Some(path) = &output.html {
        fs::write(path, render_html(chat))?;
        info!(path = %path.display(), messages = styled.len(), "Wrote HTML chat");
        if !output.json {
            writeln!(out, "Wrote {}", path.display())?;
        }
    }
    Ok(())
}

/// Load a transcript file into a chat, titled after the file by default.
pub fn load_chat(args: &RenderArgs) -> AppResult<GeneratedChat> {
    let raw = fs::read_to_string(&args.file)?;
    let title = args.title.clone().unwrap_or_else(|| {
        args.file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    });
    Ok(GeneratedChat::new(title, args.summary.clone(), raw))
}

pub fn run_render(args: &RenderArgs, out: &mut dyn Write) -> AppResult<()> {
    let chat = load_chat(args)?;
    emit_chat(&chat, &args.output, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(file: PathBuf, output: OutputArgs) -> RenderArgs {
        RenderArgs {
            file,
            title: None,
            summary: String::new(),
            output,
        }
    }

    #[test]
    fn test_render_file_plain_and_html() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("budget_chat.txt");
        fs::write(&file, "Samit Shah: Arre!\nnarration\nJogi Raditya: Bulldozer!\n").unwrap();
        let html = dir.path().join("chat.html");

        let output = OutputArgs {
            html: Some(html.clone()),
            plain: true,
            ..Default::default()
        };
        let mut out = Vec::new();
        run_render(&args(file, output), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("On: budget_chat\n"));
        assert!(text.contains("Samit Shah\n  Arre!\n"));
        assert!(!text.contains("narration"));
        assert!(text.contains("Wrote "));

        let page = fs::read_to_string(html).unwrap();
        assert!(page.contains("<title>Jumla: budget_chat</title>"));
        assert!(page.contains("speaker-2\">Jogi Raditya"));
    }

    #[test]
    fn test_render_json() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("c.txt");
        fs::write(&file, "A: one\nB: two\n").unwrap();

        let output = OutputArgs {
            json: true,
            ..Default::default()
        };
        let mut out = Vec::new();
        run_render(&args(file, output), &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["speaker"], "A");
        assert_eq!(value[1]["alignment"], "right");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut out = Vec::new();
        let err = run_render(
            &args(PathBuf::from("/nonexistent/chat.txt"), OutputArgs::default()),
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, crate::utils::error::AppError::Io(_)));
    }
}
