//! Configuration file support for the demo.
//!
//! Configuration is loaded from `~/.config/segpick/config.toml`. Missing
//! files fall back to defaults; unparseable files warn and fall back.
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/segpick/config.toml
//! tick_ms = 33
//! mouse = true
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{DemoError, Result};

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Animation tick interval in milliseconds.
    pub tick_ms: u64,

    /// Capture mouse events. Disable to keep the terminal's native text
    /// selection working.
    pub mouse: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: 33,
            mouse: true,
        }
    }
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if the file doesn't exist or can't
    /// be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match Self::try_load(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                Self::default()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| DemoError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| DemoError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("segpick")
            .join("config.toml")
    }

    /// Animation tick as a duration, floored at a sane minimum.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tick_ms, 33);
        assert!(config.mouse);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            tick_ms = 50
            mouse = false
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.tick_ms, 50);
        assert!(!config.mouse);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = toml::from_str("tick_ms = 20").unwrap();
        assert_eq!(config.tick_ms, 20);
        assert!(config.mouse);
    }

    #[test]
    fn test_tick_floor() {
        let config: Config = toml::from_str("tick_ms = 1").unwrap();
        assert_eq!(config.tick(), Duration::from_millis(16));
    }
}
