use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_flash_count")]
    pub flash_count: u32,
    #[serde(default = "default_flash_delay_ms")]
    pub flash_delay_ms: u64,
    #[serde(default = "default_progress_segments")]
    pub progress_segments: u32,
    #[serde(default = "default_quit_key")]
    pub quit_key: char,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

fn default_data_file() -> String {
    Config::default_data_file().to_string_lossy().to_string()
}
fn default_tick_interval_ms() -> u64 {
    100
}
fn default_flash_count() -> u32 {
    5
}
fn default_flash_delay_ms() -> u64 {
    200
}
fn default_progress_segments() -> u32 {
    48
}
fn default_quit_key() -> char {
    'q'
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            tick_interval_ms: default_tick_interval_ms(),
            flash_count: default_flash_count(),
            flash_delay_ms: default_flash_delay_ms(),
            progress_segments: default_progress_segments(),
            quit_key: default_quit_key(),
            log_level: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rpomodoro")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rpomodoro")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpomodoro.conf")
    }

    /// Return the default path of the settings record
    pub fn default_data_file() -> PathBuf {
        Self::config_dir().join("data.csv")
    }

    pub fn log_dir() -> PathBuf {
        Self::config_dir().join("logs")
    }

    /// Load configuration from the standard location, or defaults if absent
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &std::path::Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::parse(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse YAML; keys left out fall back to their defaults.
    pub fn parse(content: &str) -> Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        if cfg.tick_interval_ms == 0 {
            return Err("tick_interval_ms must be greater than 0".into());
        }
        Ok(cfg)
    }

    pub fn data_path(&self) -> PathBuf {
        crate::utils::path::expand_tilde(&self.data_file)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn flash_delay(&self) -> Duration {
        Duration::from_millis(self.flash_delay_ms)
    }
}
