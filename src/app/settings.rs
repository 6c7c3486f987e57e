use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::error::Result;

/// Which panes are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Edit,
    Preview,
    #[default]
    Split,
}

/// Presentation state persisted across runs. Documents and their content are
/// never part of this; closing the app discards unsaved buffers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    #[serde(default)]
    pub view_mode: ViewMode,

    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u32,

    #[serde(default)]
    pub sidebar_collapsed: bool,

    #[serde(default = "default_split_ratio")]
    pub split_ratio: f32,
}

fn default_sidebar_width() -> u32 {
    240
}

fn default_split_ratio() -> f32 {
    0.5
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::default(),
            sidebar_width: default_sidebar_width(),
            sidebar_collapsed: false,
            split_ratio: default_split_ratio(),
        }
    }
}

impl UiSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        let config_path = Self::get_config_path();

        match fs::read_to_string(&config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                let _ = default.save();
                default
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path();

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("markpad");
        path.push("settings.json");
        path
    }
}
