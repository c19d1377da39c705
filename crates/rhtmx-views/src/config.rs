// File: src/config.rs
// Purpose: Configuration parsing from rhtmx.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub views: ViewsConfig,
}

/// `[views]` section
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ViewsConfig {
    #[serde(default)]
    pub paths: PathsConfig,

    /// Legacy key -> view path template
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}

/// Where convention-based view paths point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,

    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_prefix() -> String {
    "/pages".to_string()
}

fn default_extension() -> String {
    "rhtmx".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            extension: default_extension(),
        }
    }
}

impl Config {
    /// Load configuration from rhtmx.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        tracing::debug!(
            overrides = config.views.overrides.len(),
            "Loaded views configuration from {:?}",
            path
        );

        Ok(config)
    }
}
