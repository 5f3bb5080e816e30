//! Configuration for the intranet dashboard.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Feed settings.
    #[serde(default)]
    pub feed: FeedConfig,
    /// Department settings.
    #[serde(default)]
    pub department: DepartmentConfig,
}

impl Config {
    /// Load configuration from default path.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save configuration to default path.
    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(self)?;
            std::fs::write(path, content)?;
        }
        Ok(())
    }

    /// Get configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "intranet-dashboard")
            .map(|d| d.config_dir().join("config.toml"))
    }
}

/// News feed settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Maximum news items shown.
    #[serde(default = "default_max_items")]
    pub max_items: usize,
    /// Show likes and comments.
    #[serde(default = "default_true")]
    pub show_stats: bool,
    /// Feed density.
    #[serde(default)]
    pub variant: FeedStyle,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            max_items: default_max_items(),
            show_stats: true,
            variant: FeedStyle::default(),
        }
    }
}

/// Feed density, mirrors the widget variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FeedStyle {
    #[default]
    Default,
    Compact,
    Detailed,
}

/// Department settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepartmentConfig {
    /// Department selected at startup; first one when unset or unknown.
    #[serde(default)]
    pub initial: Option<String>,
}

fn default_max_items() -> usize {
    5
}

fn default_true() -> bool {
    true
}
