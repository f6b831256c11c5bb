//! Presentation settings
//!
//! Window size, title, frame rate, score font size and colors. Game rules are
//! fixed in `consts` and deliberately not part of this file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::PongError;
use crate::platform::{Color, colors};
use crate::sim::Court;

/// Environment variable naming an optional JSON settings file
pub const SETTINGS_ENV: &str = "CLASSIC_PONG_SETTINGS";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window (and court) width in logical pixels
    pub window_width: u32,
    /// Window (and court) height in logical pixels
    pub window_height: u32,
    pub title: String,
    /// Frame rate cap; 0 runs uncapped
    pub target_fps: u32,
    pub score_font_size: u32,
    pub background: Color,
    pub foreground: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: COURT_WIDTH as u32,
            window_height: COURT_HEIGHT as u32,
            title: "Pong".to_string(),
            target_fps: TARGET_FPS,
            score_font_size: SCORE_FONT_SIZE,
            background: colors::BACKGROUND,
            foreground: colors::FOREGROUND,
        }
    }
}

impl Settings {
    /// Court matching the window size
    pub fn court(&self) -> Court {
        Court::new(self.window_width as i32, self.window_height as i32)
    }

    /// Reject sizes the fixed paddle layout or the score glyphs cannot be placed on
    pub fn validate(&self) -> Result<(), PongError> {
        if self.window_width > i32::MAX as u32 || self.window_height > i32::MAX as u32 {
            return Err(PongError::InvalidSettings("window size out of range".into()));
        }
        if !self.court().fits_layout() {
            return Err(PongError::InvalidSettings(format!(
                "{}x{} window is too small for the paddle layout",
                self.window_width, self.window_height
            )));
        }
        if self.score_font_size == 0 {
            return Err(PongError::InvalidSettings("score_font_size must be positive".into()));
        }
        // Score digits must fit on the court
        let max_font = MAX_SCORE_FONT_SIZE.min(self.window_height);
        if self.score_font_size > max_font {
            return Err(PongError::InvalidSettings(format!(
                "score_font_size {} exceeds {}",
                self.score_font_size, max_font
            )));
        }
        Ok(())
    }

    /// Parse and validate settings JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, PongError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_from(path: &Path) -> Result<Self, PongError> {
        let json = std::fs::read_to_string(path).map_err(|source| PongError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load from the file named by `CLASSIC_PONG_SETTINGS`, falling back to
    /// defaults when it is unset or unusable
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(SETTINGS_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(Path::new(&path)) {
            Ok(settings) => {
                log::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_court() {
        let settings = Settings::default();
        assert_eq!(settings.court(), Court::new(500, 400));
        assert_eq!(settings.target_fps, 60);
        assert_eq!(settings.score_font_size, 75);
        assert_eq!(settings.title, "Pong");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "window_width": 800, "title": "Big Pong" }"#)
            .unwrap();
        assert_eq!(settings.window_width, 800);
        assert_eq!(settings.window_height, 400);
        assert_eq!(settings.title, "Big Pong");
        assert_eq!(settings.target_fps, 60);
    }

    #[test]
    fn test_rejects_court_too_narrow() {
        let err = Settings::from_json(r#"{ "window_width": 200 }"#).unwrap_err();
        assert!(matches!(err, PongError::InvalidSettings(_)));
    }

    #[test]
    fn test_rejects_zero_font() {
        let err = Settings::from_json(r#"{ "score_font_size": 0 }"#).unwrap_err();
        assert!(matches!(err, PongError::InvalidSettings(_)));
    }

    #[test]
    fn test_rejects_huge_font() {
        let err = Settings::from_json(r#"{ "score_font_size": 1000000000 }"#).unwrap_err();
        assert!(matches!(err, PongError::InvalidSettings(_)));

        // Taller than the window
        let err = Settings::from_json(r#"{ "score_font_size": 401 }"#).unwrap_err();
        assert!(matches!(err, PongError::InvalidSettings(_)));
        assert!(Settings::from_json(r#"{ "score_font_size": 400 }"#).is_ok());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ window_width: ").unwrap_err();
        assert!(matches!(err, PongError::SettingsParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load_from(Path::new("/nonexistent/classic_pong.json")).unwrap_err();
        assert!(matches!(err, PongError::SettingsIo { .. }));
    }

    #[test]
    fn test_roundtrip_through_file() {
        let path = std::env::temp_dir().join(format!("classic_pong_{}.json", std::process::id()));
        let mut settings = Settings::default();
        settings.target_fps = 30;
        std::fs::write(&path, serde_json::to_string(&settings).unwrap()).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, settings);
    }

    // Only test in the crate that touches SETTINGS_ENV
    #[test]
    fn test_load_falls_back_to_defaults() {
        let dir = std::env::temp_dir();
        let bad = dir.join(format!("classic_pong_bad_{}.json", std::process::id()));
        let good = dir.join(format!("classic_pong_good_{}.json", std::process::id()));
        std::fs::write(&bad, r#"{ "score_font_size": 0 }"#).unwrap();
        std::fs::write(&good, r#"{ "target_fps": 30 }"#).unwrap();

        let load_with = |path: &Path| {
            // SAFETY: no other test reads or writes this variable
            unsafe { std::env::set_var(SETTINGS_ENV, path) };
            Settings::load()
        };
        let missing = load_with(Path::new("/nonexistent/classic_pong.json"));
        let invalid = load_with(bad.as_path());
        let loaded = load_with(good.as_path());
        // SAFETY: as above
        unsafe { std::env::remove_var(SETTINGS_ENV) };
        std::fs::remove_file(&bad).ok();
        std::fs::remove_file(&good).ok();

        assert_eq!(missing, Settings::default());
        assert_eq!(invalid, Settings::default());
        assert_eq!(loaded.target_fps, 30);
        assert_eq!(Settings::load(), Settings::default());
    }
}
