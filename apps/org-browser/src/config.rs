//! Configuration for the org browser.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
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
        directories::ProjectDirs::from("", "", "org-browser")
            .map(|d| d.config_dir().join("config.toml"))
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Heading of the tree pane.
    #[serde(default = "default_title")]
    pub title: String,
    /// Sub-heading shown above the tree.
    #[serde(default = "default_description")]
    pub description: String,
    /// Offer the People tab in the detail pane.
    #[serde(default = "default_true")]
    pub show_people: bool,
    /// Offer the Documents tab in the detail pane.
    #[serde(default = "default_true")]
    pub show_documents: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
            show_people: true,
            show_documents: true,
        }
    }
}

fn default_title() -> String {
    "Estrutura Organizacional".to_string()
}

fn default_description() -> String {
    "Visualize e gerencie a estrutura organizacional da empresa".to_string()
}

fn default_true() -> bool {
    true
}
