//! Client configuration.
//!
//! Loaded from TOML, with serde defaults for every field so a partial
//! file (or none at all) still yields a usable config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Connection settings for the array's administrative CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Vendor CLI binary invoked by the transport.
    #[serde(default = "default_cli_path")]
    pub cli_path: String,
    /// Management addresses of the storage processors, tried in order.
    #[serde(default)]
    pub sp_addresses: Vec<String>,
    /// Credential scope (0 = global, 1 = local, 2 = LDAP).
    #[serde(default)]
    pub scope: u32,
    /// Per-command timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            cli_path: default_cli_path(),
            sp_addresses: Vec::new(),
            scope: 0,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_cli_path() -> String {
    "naviseccli".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

impl ClientConfig {
    /// Load from the platform config directory, falling back to
    /// defaults when no file exists.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Default config file location, when the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sanctl").join("config.toml"))
    }
}
