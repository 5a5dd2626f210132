//! Application configuration loaded from `tictactech.toml`.

use crate::theme::ThemeBook;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactech_core::{AnimationSettings, Geometry, Vec2};
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactech.toml";

/// Smallest cell size, in terminal columns, that still fits a marker.
pub const MIN_CELL_SIZE: f32 = 4.0;

/// Highest accepted frame rate.
const MAX_FPS: u32 = 240;

/// Board layout settings.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Edge length of one cell in terminal columns.
    cell_size: f32,

    /// Center the board in the terminal instead of pinning it top-left.
    centered: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            cell_size: 10.0,
            centered: true,
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Name of the starting theme.
    theme: String,

    /// Target frames per second of the render loop.
    fps: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            fps: 60,
        }
    }
}

/// Sound settings.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    /// Whether cues ring the terminal bell.
    enabled: bool,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Full application configuration.
///
/// Every section and field is optional in the file; missing values take
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Board layout.
    board: BoardConfig,

    /// Animation timing.
    animation: AnimationSettings,

    /// Theme and frame rate.
    display: DisplayConfig,

    /// Sound cues.
    sound: SoundConfig,
}

impl AppConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::parse(&content)?;
        info!(theme = %config.display.theme, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if present,
    /// else the defaults.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file is not.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Checks values that serde cannot: ranges, durations, theme names.
    #[instrument(skip_all)]
    pub fn validate(&self, themes: &ThemeBook) -> Result<(), ConfigError> {
        let cell_size = self.board.cell_size;
        if Geometry::new(Vec2::ZERO, cell_size).is_err() || cell_size < MIN_CELL_SIZE {
            return Err(ConfigError::new(format!(
                "board.cell_size must be a number >= {}, got {}",
                MIN_CELL_SIZE, cell_size
            )));
        }

        if !(1..=MAX_FPS).contains(&self.display.fps) {
            return Err(ConfigError::new(format!(
                "display.fps must be between 1 and {}, got {}",
                MAX_FPS, self.display.fps
            )));
        }

        self.animation
            .validate()
            .map_err(|e| ConfigError::new(format!("animation: {}", e)))?;

        if !themes.exists(&self.display.theme) {
            return Err(ConfigError::new(format!(
                "Unknown theme '{}', available: {}",
                self.display.theme,
                themes.available().join(", ")
            )));
        }

        Ok(())
    }

    /// Overrides the starting theme.
    pub fn set_theme(&mut self, theme: impl Into<String>) {
        self.display.theme = theme.into();
    }

    /// Overrides the frame rate.
    pub fn set_fps(&mut self, fps: u32) {
        self.display.fps = fps;
    }

    /// Turns sound cues on or off.
    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.sound.enabled = enabled;
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactech_core::Easing;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.validate(&ThemeBook::builtin()).is_ok());
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = AppConfig::parse(
            r#"
            [animation]
            grow_duration = 0.5
            grow_easing = "ease_out"

            [sound]
            enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(*config.animation().grow_duration(), 0.5);
        assert_eq!(*config.animation().grow_easing(), Easing::EaseOut);
        assert_eq!(*config.animation().win_blinks(), 3);
        assert!(!config.sound().enabled());
        assert_eq!(config.board(), &BoardConfig::default());
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let themes = ThemeBook::builtin();
        for toml in [
            "[board]\ncell_size = 2.0",
            "[display]\nfps = 0",
            "[display]\nfps = 1000",
            "[animation]\ngrow_duration = 0.0",
            "[display]\ntheme = \"neon\"",
        ] {
            let config = AppConfig::parse(toml).unwrap();
            assert!(config.validate(&themes).is_err(), "{toml}");
        }
    }

    #[test]
    fn test_unknown_theme_lists_available() {
        let mut config = AppConfig::default();
        config.set_theme("neon");
        let err = config.validate(&ThemeBook::builtin()).unwrap_err();
        assert!(err.message.contains("colorful, dark, default"), "{}", err.message);
    }

    #[test]
    fn test_malformed_toml_is_error() {
        assert!(AppConfig::parse("[board\ncell_size = ").is_err());
        assert!(AppConfig::parse("[display]\nfps = \"fast\"").is_err());
    }
}
