//! Jumla - Satirical News Engine
//!
//! Application layer of the Jumla workspace. It ties the workspace crates
//! together:
//! - Settings model and the JSON config service
//! - Satire parameters, prompt templates and the LLM-backed generator
//! - A caller-owned chat session
//! - HTML and terminal renderers
//! - The `jumla` command line

pub mod cli;
pub mod commands;
pub mod models;
pub mod render;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

// ── Models ─────────────────────────────────────────────────────────────
pub use models::satire::{BlameTarget, SatireParams};
pub use models::settings::{AppConfig, SettingsUpdate};

// ── Services ───────────────────────────────────────────────────────────
pub use services::{ChatSession, ContentGenerator, GeneratedChat};

// ── Rendering ──────────────────────────────────────────────────────────
pub use render::{render_html, render_terminal, render_terminal_plain};

// ── State & Errors ─────────────────────────────────────────────────────
pub use state::AppState;
pub use storage::ConfigService;
pub use utils::error::{AppError, AppResult};
