//! Cross-Platform Path Utilities
//!
//! Functions for resolving application directories across platforms.
//! Jumla keeps its state under `~/.jumla/`.

use std::path::{Path, PathBuf};

use crate::utils::error::{AppError, AppResult};

/// Get the user's home directory
pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::config("Could not determine home directory"))
}

/// Get the Jumla directory (~/.jumla/)
pub fn jumla_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(".jumla"))
}

/// Get the config file path (~/.jumla/config.json)
pub fn config_path() -> AppResult<PathBuf> {
    Ok(jumla_dir()?.join("config.json"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Get the Jumla directory, creating if it doesn't exist
pub fn ensure_jumla_dir() -> AppResult<PathBuf> {
    let path = jumla_dir()?;
    ensure_dir(&path)?;
    Ok(path)
}
