//! Stagger configuration system
//!
//! This crate provides centralized configuration management for the
//! stagger demo, loading settings from `stagger.toml` as an
//! alternative to environment variables.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for the stagger demo
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StaggerConfig {
    /// Reveal effect settings
    pub reveal: RevealConfig,
}

/// Reveal effect configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Selector identifying the elements to reveal (e.g. ".product")
    pub selector: String,
    /// Delay between reveal steps in milliseconds
    pub delay_ms: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".product".to_string(),
            delay_ms: 100.0,
        }
    }
}

impl StaggerConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the stagger.toml configuration file
    ///
    /// # Returns
    /// * `Ok(StaggerConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (stagger.toml in
    /// the current directory) or return default configuration if the
    /// file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("stagger.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file
    /// values. This allows for temporary overrides without modifying
    /// the config file.
    pub fn merge_with_env(&mut self) {
        if let Ok(selector) = std::env::var("STAGGER_SELECTOR") {
            self.reveal.selector = selector;
        }
        if let Ok(val) = std::env::var("STAGGER_DELAY_MS") {
            if let Ok(delay) = val.parse::<f32>() {
                self.reveal.delay_ms = delay;
            }
        }
    }

    /// Load configuration with environment variable overrides applied
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
