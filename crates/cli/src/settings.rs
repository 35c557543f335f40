use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use facehider_core::shared::constants::{API_URL, DEFAULT_MODE, MOCK_DELAY};
use facehider_core::shared::hide_mode::HideMode;

/// Persistent defaults for the CLI. Explicit flags override these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mode: HideMode,
    pub mock_mode: bool,
    pub api_url: String,
    pub mock_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: DEFAULT_MODE,
            mock_mode: true,
            api_url: API_URL.to_string(),
            mock_delay_ms: MOCK_DELAY.as_millis() as u64,
        }
    }
}

impl Settings {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("FaceHider").join("settings.json"))
    }

    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Missing or malformed files fall back to defaults.
    pub fn load_from(path: &Path) -> Self {
        let Ok(json) = fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed settings at {}: {e}", path.display());
            Self::default()
        })
    }

    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            self.save_to(&path);
        }
    }

    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(self) {
            if let Err(e) = fs::write(path, json) {
                log::warn!("Failed to save settings to {}: {e}", path.display());
            }
        }
    }
}
