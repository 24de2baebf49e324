//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the storage directory
pub const DATA_DIR_ENV: &str = "ENROLL_DATA_DIR";

const DEFAULT_AUTOSAVE_SECS: u64 = 30;
const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;
const DEFAULT_TOAST_MS: u64 = 3000;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EnrollConfig {
    /// Directory holding the draft, the last registration and exports
    pub data_dir: Option<PathBuf>,
    /// Seconds between periodic draft saves
    pub autosave_interval_secs: Option<u64>,
    /// Simulated submission latency in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// How long a toast stays visible, in milliseconds
    pub toast_duration_ms: Option<u64>,
}

impl EnrollConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "enroll", "enroll-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: EnrollConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Load, falling back to defaults when the file is unreadable
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable config: {e}");
            Self::default()
        })
    }

    /// Storage directory: environment, then config file, then platform default
    pub fn resolve_data_dir(&self, env_value: Option<String>) -> Option<PathBuf> {
        env_value
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .or_else(|| self.data_dir.clone())
    }

    pub fn autosave_interval(&self) -> Duration {
        Duration::from_secs(
            self.autosave_interval_secs
                .filter(|s| *s > 0)
                .unwrap_or(DEFAULT_AUTOSAVE_SECS),
        )
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.unwrap_or(DEFAULT_SUBMIT_DELAY_MS))
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms.unwrap_or(DEFAULT_TOAST_MS))
    }
}
