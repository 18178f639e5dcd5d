//! User preferences
//!
//! Volumes and difficulty, persisted as a JSON file. Load failures fall
//! back to defaults with a log line; saving is best-effort. Nothing here
//! returns an error to the caller.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::Difficulty;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Spawn-curve preset
    pub difficulty: Difficulty,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music_volume: 0.5,
            sfx_volume: 0.5,
            difficulty: Difficulty::Medium,
        }
    }
}

impl Settings {
    /// Settings file next to the working directory
    pub const DEFAULT_PATH: &'static str = "chicken_shooter_settings.json";

    /// Load from disk, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("settings file unreadable ({e}), using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Save to disk, best-effort
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    log::warn!("could not save settings: {e}");
                } else {
                    log::info!("settings saved");
                }
            }
            Err(e) => log::warn!("could not serialize settings: {e}"),
        }
    }
}

/// Map a pointer x within a slider track to a volume fraction. Drags past
/// either end clamp; a degenerate track maps to zero.
pub fn slider_fraction(x: f32, track_x: f32, track_width: f32) -> f32 {
    if track_width <= 0.0 {
        return 0.0;
    }
    ((x - track_x) / track_width).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_fraction_clamps() {
        assert_eq!(slider_fraction(150.0, 100.0, 200.0), 0.25);
        assert_eq!(slider_fraction(50.0, 100.0, 200.0), 0.0);
        assert_eq!(slider_fraction(500.0, 100.0, 200.0), 1.0);
        assert_eq!(slider_fraction(150.0, 100.0, 0.0), 0.0);
    }

    #[test]
    fn test_settings_round_trip() {
        let settings = Settings {
            music_volume: 0.25,
            sfx_volume: 0.75,
            difficulty: Difficulty::Hard,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let path = std::env::temp_dir().join("chicken_shooter_no_such_settings.json");
        let _ = fs::remove_file(&path);
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn test_load_garbage_defaults() {
        let path = std::env::temp_dir().join("chicken_shooter_garbage_settings.json");
        fs::write(&path, "not json at all").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join("chicken_shooter_save_settings.json");
        let settings = Settings {
            music_volume: 0.9,
            sfx_volume: 0.1,
            difficulty: Difficulty::Easy,
        };
        settings.save(&path);
        assert_eq!(Settings::load(&path), settings);
        let _ = fs::remove_file(&path);
    }
}
