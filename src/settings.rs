//! Game settings and preferences
//!
//! JSON on disk natively (path from `FLIPPY_SETTINGS`), LocalStorage on the
//! web. Any problem loading falls back to defaults with a warning.

use serde::{Deserialize, Serialize};

/// Environment variable naming the native settings file
pub const SETTINGS_ENV: &str = "FLIPPY_SETTINGS";
/// Settings file used when the variable is unset
pub const DEFAULT_SETTINGS_FILE: &str = "flippy_settings.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed; a time-based seed is used when absent
    pub seed: Option<u64>,
    /// Folder holding images and sounds; working directory when absent
    pub asset_dir: Option<String>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Demo ===
    /// Start the web build with the autopilot on. The native build has no
    /// window and always runs the autopilot.
    pub autopilot: bool,
    /// Native headless runs stop after this many frames (0 = until quit)
    pub demo_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            asset_dir: None,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            autopilot: false,
            demo_frames: 0,
        }
    }
}

impl Settings {
    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
        settings.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "flippy_bird_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from the file named by `FLIPPY_SETTINGS`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let path = std::env::var(SETTINGS_ENV).unwrap_or_else(|_| DEFAULT_SETTINGS_FILE.to_string());
        Self::load_from(std::path::Path::new(&path))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(_) => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{"seed": 42, "autopilot": true}"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert!(settings.autopilot);
        assert_eq!(settings.master_volume, 0.8);
        assert_eq!(settings.demo_frames, 0);
    }

    #[test]
    fn test_volumes_are_clamped() {
        let settings = Settings::from_json(r#"{"master_volume": 3.0, "sfx_volume": -1}"#).unwrap();
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.sfx_volume, 0.0);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Settings::from_json("{not json").is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            asset_dir: Some("/opt/flippy".to_string()),
            muted: true,
            ..Default::default()
        };
        assert_eq!(Settings::from_json(&settings.to_json()).unwrap(), settings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("flippy-no-such-settings.json");
        assert_eq!(Settings::load_from(&path), Settings::default());
    }
}
