//! Display controller: the single owner of screen size and fullscreen state

use serde::{Deserialize, Serialize};
use sprig_core::{Result, SprigError, Vec2};
use std::path::{Path, PathBuf};

use crate::backend::DisplaySurface;

/// A width/height pair in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Windowed,
    Fullscreen,
}

/// Screen size, window title and content location
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenMetrics {
    pub width: u32,
    pub height: u32,
    /// Windowed size to restore when leaving fullscreen
    pub previous_width: u32,
    pub previous_height: u32,
    pub window_title: Option<String>,
    pub content_directory: PathBuf,
}

impl ScreenMetrics {
    pub fn resolution(&self) -> Resolution {
        Resolution::new(self.width, self.height)
    }
}

/// Owns [`ScreenMetrics`] and the windowed/fullscreen state machine.
/// Everything else derives sizes from here instead of caching them.
#[derive(Debug, Clone)]
pub struct DisplayController {
    metrics: ScreenMetrics,
    mode: DisplayMode,
}

impl Default for DisplayController {
    /// 1280x720, windowed
    fn default() -> Self {
        Self::with_size(1280, 720)
    }
}

impl DisplayController {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_resolution(width, height)?;
        Ok(Self::with_size(width, height))
    }

    fn with_size(width: u32, height: u32) -> Self {
        Self {
            metrics: ScreenMetrics {
                width,
                height,
                previous_width: width,
                previous_height: height,
                window_title: None,
                content_directory: PathBuf::from("content"),
            },
            mode: DisplayMode::Windowed,
        }
    }

    pub fn metrics(&self) -> &ScreenMetrics {
        &self.metrics
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn is_full_screen(&self) -> bool {
        self.mode == DisplayMode::Fullscreen
    }

    pub fn width(&self) -> u32 {
        self.metrics.width
    }

    pub fn height(&self) -> u32 {
        self.metrics.height
    }

    pub fn resolution(&self) -> Resolution {
        self.metrics.resolution()
    }

    /// Set the current size. Takes effect for every reader immediately.
    pub fn set_screen_resolution(&mut self, width: u32, height: u32) -> Result<()> {
        check_resolution(width, height)?;
        self.metrics.width = width;
        self.metrics.height = height;
        Ok(())
    }

    /// Center of the screen, using integer halves of the current size
    pub fn screen_center(&self) -> Vec2 {
        Vec2::new(
            (self.metrics.width / 2) as f32,
            (self.metrics.height / 2) as f32,
        )
    }

    pub fn set_window_title(&mut self, title: impl Into<String>) {
        self.metrics.window_title = Some(title.into());
    }

    pub fn window_title(&self) -> Option<&str> {
        self.metrics.window_title.as_deref()
    }

    pub fn set_content_directory<P: AsRef<Path>>(&mut self, path: P) {
        self.metrics.content_directory = path.as_ref().to_path_buf();
    }

    pub fn content_directory(&self) -> &Path {
        &self.metrics.content_directory
    }

    /// Record a size change the backend made on its own (window drag).
    /// Zero-sized reports (minimised windows) are ignored.
    pub fn surface_resized(&mut self, resolution: Resolution) -> bool {
        if resolution.width == 0 || resolution.height == 0 {
            return false;
        }
        self.metrics.width = resolution.width;
        self.metrics.height = resolution.height;
        true
    }

    /// Switch between windowed and fullscreen.
    ///
    /// Entering fullscreen saves the windowed size and applies the largest
    /// mode the display offers; leaving restores the saved size. If the
    /// surface refuses the change, every field is put back as it was and a
    /// recoverable [`SprigError::DisplayMode`] is returned.
    pub fn toggle_full_screen(&mut self, surface: &mut dyn DisplaySurface) -> Result<DisplayMode> {
        let saved = self.metrics.clone();

        let result = match self.mode {
            DisplayMode::Windowed => self.enter_full_screen(surface),
            DisplayMode::Fullscreen => self.leave_full_screen(surface),
        };

        match result {
            Ok(mode) => {
                self.mode = mode;
                log::info!(
                    "display mode: {:?} {}x{}",
                    mode,
                    self.metrics.width,
                    self.metrics.height
                );
                Ok(mode)
            }
            Err(e) => {
                self.metrics = saved;
                Err(match e {
                    SprigError::DisplayMode(_) => e,
                    other => SprigError::DisplayMode(other.to_string()),
                })
            }
        }
    }

    fn enter_full_screen(&mut self, surface: &mut dyn DisplaySurface) -> Result<DisplayMode> {
        let largest = surface
            .fullscreen_modes()
            .into_iter()
            .filter(|m| m.width > 0 && m.height > 0)
            .max_by_key(|m| m.area())
            .ok_or_else(|| {
                SprigError::DisplayMode("display offers no fullscreen modes".to_string())
            })?;

        self.metrics.previous_width = self.metrics.width;
        self.metrics.previous_height = self.metrics.height;
        self.metrics.width = largest.width;
        self.metrics.height = largest.height;
        surface.apply_mode(largest, DisplayMode::Fullscreen)?;
        Ok(DisplayMode::Fullscreen)
    }

    fn leave_full_screen(&mut self, surface: &mut dyn DisplaySurface) -> Result<DisplayMode> {
        let windowed = Resolution::new(self.metrics.previous_width, self.metrics.previous_height);
        self.metrics.width = windowed.width;
        self.metrics.height = windowed.height;
        surface.apply_mode(windowed, DisplayMode::Windowed)?;
        Ok(DisplayMode::Windowed)
    }
}

fn check_resolution(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(SprigError::InvalidResolution {
            width: i64::from(width),
            height: i64::from(height),
        });
    }
    Ok(())
}
