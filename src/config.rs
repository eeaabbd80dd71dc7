//! Configuration management.
//!
//! Loads settings from a TOML file with environment-variable fallbacks. The
//! only required setting is the backend URL, and even that has a default
//! suitable for local development.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AskqlError, Result};

/// Backend URL used when nothing is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Backend connection settings.
    #[serde(default)]
    pub backend: BackendSection,
}

/// The `[backend]` section of the config file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BackendSection {
    /// Base URL of the assistant backend.
    pub url: Option<String>,

    /// Request timeout in seconds. Absent means no timeout.
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("askql")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file is not an error; it yields the defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| AskqlError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            AskqlError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }
}
