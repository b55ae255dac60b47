//! Configuration handling for the items widgets

use crate::state::Thickness;
use anyhow::Result;
use directories::ProjectDirs;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration, every field overriding a skin default when set
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TuiConfig {
    /// Text color of the selected item
    pub selected_text_color: Option<Color>,
    /// Background color of the selected item
    pub selected_item_color: Option<Color>,
    /// Text color of unselected items
    pub text_color: Option<Color>,
    /// Insets around each item's label
    pub item_padding: Option<Thickness>,
    /// Item field used as the label in the demo list
    pub name_field: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "items-tui", "items-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                tracing::debug!("loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
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
}
