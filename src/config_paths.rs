//! Centralized configuration paths for feedboard
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/feedboard/`
//! - Windows: `%APPDATA%\feedboard\`
//!
//! This module is the single source of truth for config paths.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

const APP_DIR: &str = "feedboard";

/// Base config directory for feedboard
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/feedboard`
///   - Else: `~/.config/feedboard`
///
/// Windows:
///   - `%APPDATA%\feedboard`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/feedboard/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/feedboard/layout.json`
///
/// Holds the persisted `tab_order`, `active_tabs` and `panel_widths` keys.
pub fn layout_state_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("layout.json"))
}

/// `~/.config/feedboard/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create `path` (and parents) if missing
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory {}", path.display()))
}

/// Ensure the logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = logs_dir().context("No config directory available")?;
    ensure_dir(&logs)?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_live_under_config_dir() {
        let Some(base) = config_dir() else {
            return;
        };
        assert!(base.ends_with(APP_DIR));
        assert!(config_file().unwrap().starts_with(&base));
        assert!(layout_state_file().unwrap().starts_with(&base));
        assert!(logs_dir().unwrap().starts_with(&base));
    }

    #[test]
    fn test_file_names() {
        if config_dir().is_none() {
            return;
        }
        assert!(config_file()
            .unwrap()
            .to_string_lossy()
            .ends_with("config.yaml"));
        assert!(layout_state_file()
            .unwrap()
            .to_string_lossy()
            .ends_with("layout.json"));
    }
}
