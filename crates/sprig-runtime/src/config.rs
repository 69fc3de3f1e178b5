//! Game configuration loaded from TOML

use serde::{Deserialize, Serialize};
use sprig_core::{Result, SprigError};
use std::fs;
use std::path::Path;

use crate::clock::DEFAULT_MAX_CATCH_UP_TICKS;

/// Startup configuration for a [`GameHost`](crate::GameHost).
///
/// Every field has a default, so a config file only needs the values it
/// changes:
///
/// ```toml
/// target_fps = 30
/// width = 800
/// height = 600
/// frame_counter_font = "fonts/mono.font.toml"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_target_fps")]
    pub target_fps: f64,

    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    /// Falls back to the game's name when unset
    #[serde(default)]
    pub window_title: Option<String>,

    #[serde(default)]
    pub fullscreen: bool,

    /// Force the accelerated rendering path
    #[serde(default)]
    pub require_accelerated: bool,

    #[serde(default = "default_content_directory")]
    pub content_directory: String,

    /// Font for the frame-rate overlay, relative to the content directory
    #[serde(default)]
    pub frame_counter_font: Option<String>,

    #[serde(default = "default_max_catch_up_ticks")]
    pub max_catch_up_ticks: u32,
}

fn default_target_fps() -> f64 {
    60.0
}
fn default_width() -> u32 {
    1280
}
fn default_height() -> u32 {
    720
}
fn default_content_directory() -> String {
    "content".to_string()
}
fn default_max_catch_up_ticks() -> u32 {
    DEFAULT_MAX_CATCH_UP_TICKS
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_fps: default_target_fps(),
            width: default_width(),
            height: default_height(),
            window_title: None,
            fullscreen: false,
            require_accelerated: false,
            content_directory: default_content_directory(),
            frame_counter_font: None,
            max_catch_up_ticks: default_max_catch_up_ticks(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, or fall back to defaults when the file is missing.
    /// A file that exists but does not parse is an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).map_err(|e| match e {
                SprigError::TomlParseError(msg) => {
                    SprigError::TomlParseError(format!("{}: {}", path.display(), msg))
                }
                other => other,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Reject values the runtime would otherwise have to clamp
    pub fn validate(&self) -> Result<()> {
        if !self.target_fps.is_finite() || self.target_fps <= 0.0 {
            return Err(SprigError::InvalidFrameRate(self.target_fps));
        }
        if self.width == 0 || self.height == 0 {
            return Err(SprigError::InvalidResolution {
                width: i64::from(self.width),
                height: i64::from(self.height),
            });
        }
        if self.max_catch_up_ticks == 0 {
            return Err(SprigError::InvalidConfig(
                "max_catch_up_ticks must be at least 1".to_string(),
            ));
        }
        if self.content_directory.is_empty() {
            return Err(SprigError::InvalidConfig(
                "content_directory must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
