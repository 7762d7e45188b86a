//! Window settings stored as settings.json in the app data directory

use crate::types::{Insets, SafeAreaProvider};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Simulated device safe area
    pub safe_area_top: f32,
    pub safe_area_bottom: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            safe_area_top: 47.0,
            safe_area_bottom: 34.0,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }
}

impl SafeAreaProvider for Settings {
    fn insets(&self) -> Insets {
        Insets {
            top: self.safe_area_top.max(0.0),
            bottom: self.safe_area_bottom.max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("coffee-rank-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = temp_dir("missing");
        let _ = std::fs::remove_file(dir.join("settings.json"));
        assert_eq!(Settings::load(&dir), Settings::default());
    }

    #[test]
    fn save_then_load_keeps_geometry() {
        let dir = temp_dir("saved");
        let settings = Settings {
            window_x: Some(10.0),
            window_y: Some(20.0),
            window_w: Some(390.0),
            window_h: Some(844.0),
            ..Settings::default()
        };
        settings.save(&dir);
        assert_eq!(Settings::load(&dir), settings);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = temp_dir("partial");
        std::fs::write(dir.join("settings.json"), r#"{ "safe_area_top": 20.0 }"#).unwrap();
        let settings = Settings::load(&dir);
        assert_eq!(settings.safe_area_top, 20.0);
        assert_eq!(settings.safe_area_bottom, 34.0);
        assert_eq!(settings.window_w, None);
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = temp_dir("corrupt");
        std::fs::write(dir.join("settings.json"), "not json").unwrap();
        assert_eq!(Settings::load(&dir), Settings::default());
    }

    #[test]
    fn negative_insets_are_clamped() {
        let settings = Settings {
            safe_area_top: -5.0,
            safe_area_bottom: 12.0,
            ..Settings::default()
        };
        assert_eq!(settings.insets(), Insets { top: 0.0, bottom: 12.0 });
    }
}
