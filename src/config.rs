//! Application configuration.
//!
//! Optional TOML file in the platform config directory. A missing or
//! unreadable config degrades to defaults; CLI flags always override
//! configured values.

use crate::constants::APP_BINARY_NAME;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Keymap generation settings
    #[serde(default)]
    pub keymap: KeymapConfig,
    /// Diagram rendering settings
    #[serde(default)]
    pub render: RenderConfig,
}

/// Keymap generation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Default output path for generated keymaps
    #[serde(default)]
    pub output: Option<PathBuf>,
}

/// Diagram rendering settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// TrueType font used for key labels (falls back to a built-in font)
    #[serde(default)]
    pub font: Option<PathBuf>,
    /// Default output directory for rendered diagrams
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Platform config file location (`<config dir>/lazyzmk/config.toml`).
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_BINARY_NAME).join("config.toml"))
    }

    /// Loads the configuration, or defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or
    /// parsed.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}
