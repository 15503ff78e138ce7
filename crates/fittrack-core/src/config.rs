//! Application configuration management.
//!
//! Configuration is stored at `~/.config/fittrack/config.json`. The API base
//! URL can be overridden with the `FITTRACK_API_URL` environment variable.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::stats::FitnessGoals;

/// Application name used for the config directory path
const APP_NAME: &str = "fittrack";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable that overrides the configured API URL
pub const API_URL_ENV: &str = "FITTRACK_API_URL";

/// Used when neither the environment nor the config file name a server
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub api_url: Option<String>,
    pub default_user_id: Option<i64>,
    pub request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub goals: FitnessGoals,
}

impl Config {
    /// Load the config file (if any) and apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_saved()?;
        config.apply_env(std::env::var(API_URL_ENV).ok());
        Ok(config)
    }

    /// Load exactly what is on disk, without environment overrides
    pub fn load_saved() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    fn apply_env(&mut self, env_url: Option<String>) {
        if let Some(url) = env_url.filter(|u| !u.trim().is_empty()) {
            debug!(url = %url, "Using API URL from environment");
            self.api_url = Some(url);
        }
    }

    /// Base URL without trailing slash
    pub fn api_url(&self) -> String {
        self.api_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_url() {
        assert_eq!(Config::default().api_url(), "http://localhost:3000");
    }

    #[test]
    fn test_blank_api_url_falls_back_to_default() {
        let config = Config {
            api_url: Some("  ".to_string()),
            ..Config::default()
        };
        assert_eq!(config.api_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = Config {
            api_url: Some("http://file.example".to_string()),
            ..Config::default()
        };
        config.apply_env(Some("https://env.example/".to_string()));
        assert_eq!(config.api_url(), "https://env.example");
    }

    #[test]
    fn test_empty_env_keeps_file_value() {
        let mut config = Config {
            api_url: Some("http://file.example".to_string()),
            ..Config::default()
        };
        config.apply_env(Some(String::new()));
        config.apply_env(None);
        assert_eq!(config.api_url(), "http://file.example");
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = Config {
            api_url: Some("http://api.local".to_string()),
            default_user_id: Some(7),
            request_timeout_secs: Some(15),
            goals: FitnessGoals {
                step_target: 8000,
                ..FitnessGoals::default()
            },
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_save_then_load_from_disk() {
        let dir = std::env::temp_dir().join(format!("fittrack-config-test-{}", std::process::id()));
        let path = dir.join(CONFIG_FILE);

        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        let config = Config {
            api_url: Some("http://saved.example".to_string()),
            default_user_id: Some(7),
            request_timeout_secs: None,
            goals: FitnessGoals {
                calorie_target: 2400,
                ..FitnessGoals::default()
            },
        };
        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_file_without_goals_uses_default_goals() {
        let config: Config = serde_json::from_str(r#"{"default_user_id": 3}"#).unwrap();
        assert_eq!(config.goals, FitnessGoals::default());
        assert_eq!(config.api_url, None);
    }
}
