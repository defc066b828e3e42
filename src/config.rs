//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Deployed prediction endpoint
const DEFAULT_API_URL: &str = "https://machine-learning-deployment-mdk2.onrender.com/predict";

/// Environment variable that overrides the endpoint URL
const API_URL_ENV: &str = "NEPHRO_API_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Prediction endpoint URL
    pub api_url: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "nephro", "nephro-tui")
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

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Endpoint URL to use: env var, then config file, then the default
    pub fn resolve_api_url(&self) -> String {
        self.resolve_api_url_from(std::env::var(API_URL_ENV).ok())
    }

    /// Precedence logic, with the env lookup injected so tests do not
    /// mutate the process environment
    fn resolve_api_url_from(&self, env_url: Option<String>) -> String {
        env_url
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }
}
