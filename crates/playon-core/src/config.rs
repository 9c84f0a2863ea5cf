use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::PlayonError;
use crate::models::ServerRecord;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub general: GeneralConfig,
    /// Menu order. A server's identity is its index here.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<ServerRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// When off, only error notices are shown.
    pub show_notifications: bool,
}

impl AppConfig {
    /// Load config: the user file if it exists, built-in defaults otherwise.
    pub fn load_from(path: &Path) -> Result<Self, PlayonError> {
        if !path.exists() {
            return Self::parse(DEFAULT_CONFIG);
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Write the config, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), PlayonError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| PlayonError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", "playon")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Look a server up by label, or by its index in the list.
    pub fn find_server(&self, key: &str) -> Option<&ServerRecord> {
        self.servers
            .iter()
            .find(|s| s.label == key)
            .or_else(|| key.parse::<usize>().ok().and_then(|i| self.servers.get(i)))
    }

    /// Remove a server by label or index, returning it.
    pub fn remove_server(&mut self, key: &str) -> Option<ServerRecord> {
        let index = self
            .servers
            .iter()
            .position(|s| s.label == key)
            .or_else(|| key.parse::<usize>().ok().filter(|&i| i < self.servers.len()))?;
        Some(self.servers.remove(index))
    }

    fn parse(content: &str) -> Result<Self, PlayonError> {
        toml::from_str(content).map_err(|e| PlayonError::Config(e.to_string()))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}
