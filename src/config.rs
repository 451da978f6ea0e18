//! Board configuration persistence
//!
//! Stores layout metrics in `~/.config/feedboard/config.yaml`. Every field
//! has a default, so a partial file only overrides what it names.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Layout metrics shared by every panel in the strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Width of one content card column in pixels
    pub card_width: f32,
    /// Horizontal gap between card columns
    pub card_gap: f32,
    /// Column ceiling for card-based panels
    pub max_cols: u32,
    /// Gap between adjacent panels in the strip
    pub panel_gap: f32,
    /// Border allowance around each panel's content wrap
    pub wrap_border: f32,
    /// Scrollbar allowance reserved inside each panel
    pub scrollbar: f32,
    /// Snap increment for generic panels
    pub generic_step: f32,
    /// Smallest width a generic panel snaps to
    pub generic_min: f32,
    /// Largest width a generic panel snaps to
    pub generic_max: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            card_width: 350.0,
            card_gap: 12.0,
            max_cols: 6,
            panel_gap: 0.0,
            wrap_border: 2.0,
            scrollbar: 14.0,
            generic_step: 350.0,
            generic_min: 350.0,
            generic_max: 1750.0,
        }
    }
}

impl BoardConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from an explicit path, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("Config file not found at {}, using defaults", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<BoardConfig>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.sanitized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the given path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            crate::config_paths::ensure_dir(parent)?;
        }
        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Replace values the layout math cannot work with by their defaults
    pub(crate) fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let positive = |v: f32| v.is_finite() && v > 0.0;
        let non_negative = |v: f32| v.is_finite() && v >= 0.0;

        if !positive(self.card_width) {
            self.card_width = defaults.card_width;
        }
        if !non_negative(self.card_gap) {
            self.card_gap = defaults.card_gap;
        }
        if self.max_cols == 0 {
            self.max_cols = defaults.max_cols;
        }
        if !non_negative(self.panel_gap) {
            self.panel_gap = defaults.panel_gap;
        }
        if !non_negative(self.wrap_border) {
            self.wrap_border = defaults.wrap_border;
        }
        if !non_negative(self.scrollbar) {
            self.scrollbar = defaults.scrollbar;
        }
        if !positive(self.generic_step) {
            self.generic_step = defaults.generic_step;
        }
        if !positive(self.generic_min) || !positive(self.generic_max) || self.generic_max < self.generic_min {
            self.generic_min = defaults.generic_min;
            self.generic_max = defaults.generic_max;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: BoardConfig = serde_yaml::from_str("card_width: 300\n").unwrap();
        assert_eq!(config.card_width, 300.0);
        assert_eq!(config.card_gap, 12.0);
        assert_eq!(config.max_cols, 6);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = BoardConfig::load_from(&dir.path().join("nope.yaml"));
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn test_garbled_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "card_width: [not, a, number").unwrap();
        assert_eq!(BoardConfig::load_from(&path), BoardConfig::default());
    }

    #[test]
    fn test_nonsense_values_are_sanitized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "card_width: -5\nmax_cols: 0\ngeneric_min: 900\ngeneric_max: 400\n")
            .unwrap();
        let config = BoardConfig::load_from(&path);
        assert_eq!(config.card_width, 350.0);
        assert_eq!(config.max_cols, 6);
        assert_eq!(config.generic_min, 350.0);
        assert_eq!(config.generic_max, 1750.0);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = BoardConfig {
            max_cols: 4,
            panel_gap: 8.0,
            ..BoardConfig::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(BoardConfig::load_from(&path), config);
    }
}
