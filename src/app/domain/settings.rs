use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::AppError;

/// The two-valued visual appearance setting applied application-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_theme")]
    pub theme: Theme,

    /// When true, the theme is derived from the OS dark-mode setting
    /// instead of the explicit choice above.
    #[serde(default)]
    pub auto_switch_theme: bool,
}

fn default_theme() -> Theme {
    Theme::Light
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            auto_switch_theme: false,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    fn load_from(config_path: &Path) -> Self {
        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                let _ = default.save_to(config_path);
                default
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    fn save_to(&self, config_path: &Path) -> Result<(), AppError> {
        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("nocturne");
        path.push("settings.json");
        path
    }
}
