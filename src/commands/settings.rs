//! Settings Commands
//!
//! `jumla config show|reset|set`.

use std::io::Write;

use crate::cli::ConfigCommands;
use crate::models::settings::SettingsUpdate;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

/// Split `KEY=VALUE` into a settings update
pub fn parse_assignment(assignment: &str) -> AppResult<SettingsUpdate> {
    let (key, value) = assignment
        .split_once('=')
        .ok_or_else(|| AppError::validation(format!("Expected KEY=VALUE, got '{}'", assignment)))?;
    SettingsUpdate::from_key_value(key, value)
}

pub fn run_config(state: &mut AppState, action: &ConfigCommands, out: &mut dyn Write) -> AppResult<()> {
    match action {
        ConfigCommands::Show => {
            writeln!(out, "# {}", state.config_service().path().display())?;
            writeln!(out, "{}", serde_json::to_string_pretty(state.config())?)?;
        }
        ConfigCommands::Reset => {
            state.config_service_mut().reset()?;
            writeln!(out, "Config reset to defaults")?;
        }
        ConfigCommands::Set { assignment } => {
            let update = parse_assignment(assignment)?;
            state.config_service_mut().update_config(update)?;
            writeln!(out, "Updated {}", assignment.trim())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ConfigService;
    use jumla_llm::ProviderType;

    fn state() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let service = ConfigService::with_path(dir.path().join("config.json")).unwrap();
        (dir, AppState::new(service))
    }

    #[test]
    fn test_parse_assignment() {
        let update = parse_assignment("max_feed_entries=10").unwrap();
        assert_eq!(update.max_feed_entries, Some(10));
        assert!(parse_assignment("max_feed_entries").is_err());
    }

    #[test]
    fn test_set_show_reset() {
        let (_dir, mut state) = state();
        let mut out = Vec::new();

        let set = ConfigCommands::Set {
            assignment: "default_provider=openai".to_string(),
        };
        run_config(&mut state, &set, &mut out).unwrap();
        assert_eq!(state.config().default_provider, ProviderType::OpenAI);

        run_config(&mut state, &ConfigCommands::Show, &mut out).unwrap();
        let text = String::from_utf8(out.clone()).unwrap();
        assert!(text.contains("\"default_provider\": \"openai\""));

        run_config(&mut state, &ConfigCommands::Reset, &mut out).unwrap();
        assert_eq!(state.config().default_provider, ProviderType::Groq);
    }

    #[test]
    fn test_invalid_set_leaves_config() {
        let (_dir, mut state) = state();
        let mut out = Vec::new();
        let set = ConfigCommands::Set {
            assignment: "temperature=9".to_string(),
        };
        assert!(run_config(&mut state, &set, &mut out).is_err());
        assert!((state.config().temperature - 0.9).abs() < f32::EPSILON);
    }
}
