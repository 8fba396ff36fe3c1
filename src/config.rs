//! Configuration handling for the TUI

use crate::contact::SUCCESS_BANNER_DURATION;
use crate::relay::DEFAULT_RELAY_URL;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the relay endpoint
pub const RELAY_URL_ENV: &str = "ROADLINE_RELAY_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Form relay endpoint
    pub relay_url: Option<String>,
    /// Seconds the success banner stays visible
    pub success_banner_secs: Option<u64>,
    /// Request timeout in seconds; unset waits for the relay indefinitely
    pub request_timeout_secs: Option<u64>,
    /// Start on the home view instead of the hero animation
    pub skip_splash: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "roadline", "roadline-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Relay URL from the environment, then the file, then the default
    pub fn relay_url(&self) -> String {
        self.relay_url_with_env(std::env::var(RELAY_URL_ENV).ok())
    }

    fn relay_url_with_env(&self, env: Option<String>) -> String {
        env.filter(|v| !v.trim().is_empty())
            .or_else(|| self.relay_url.clone())
            .unwrap_or_else(|| DEFAULT_RELAY_URL.to_string())
    }

    pub fn success_delay(&self) -> Duration {
        self.success_banner_secs
            .map(Duration::from_secs)
            .unwrap_or(SUCCESS_BANNER_DURATION)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn skip_splash(&self) -> bool {
        self.skip_splash.unwrap_or(false)
    }
}
