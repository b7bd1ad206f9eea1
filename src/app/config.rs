//! Configuration for embedding hosts

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Terminal configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Grid height in rows
    pub rows: usize,
    /// Grid width in columns
    pub cols: usize,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self { rows: 24, cols: 80 }
    }
}

impl TerminalConfig {
    /// Load configuration from a file
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: TerminalConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from `path` if given, else from the default location if that
    /// file exists, else return the default config.
    ///
    /// # Errors
    ///
    /// An explicitly requested file that cannot be loaded is an error; a
    /// broken file at the default location is logged and skipped.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        if let Some(config_path) = default_config_path().filter(|p| p.exists()) {
            match Self::load(&config_path) {
                Ok(config) => return Ok(config),
                Err(e) => tracing::warn!(path = %config_path.display(), error = %e, "ignoring config"),
            }
        }
        Ok(Self::default())
    }
}

/// `~/.config/mochi/grid.json`
pub fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("mochi")
            .join("grid.json")
    })
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
