//! Seams to the platform: window/surface, display modes, input, present

use sprig_core::{InputState, Result};
use sprig_render::SpriteBatch;

use crate::display::{DisplayMode, Resolution};

/// What the host asks for when it acquires a rendering surface
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceRequest {
    pub title: String,
    pub resolution: Resolution,
    pub mode: DisplayMode,
    /// Force the hardware-accelerated rendering path; a backend that cannot
    /// provide it must fail the request
    pub accelerated: bool,
}

/// Platform events the host reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendEvent {
    CloseRequested,
    /// The surface changed size outside the host's control (window drag)
    Resized(Resolution),
    /// Keys held during a focus change will never see their release
    FocusLost,
}

/// The part of a backend the display controller drives
pub trait DisplaySurface {
    /// Fullscreen modes the native display offers
    fn fullscreen_modes(&self) -> Vec<Resolution>;

    /// Switch the surface to `resolution` in `mode`
    fn apply_mode(&mut self, resolution: Resolution, mode: DisplayMode) -> Result<()>;
}

/// Window, input and presentation backend driven by the game host
pub trait Backend: DisplaySurface {
    /// Create the rendering surface. Failure is fatal to startup.
    fn acquire_surface(&mut self, request: &SurfaceRequest) -> Result<()>;

    /// Destroy the surface. Safe to call when none exists.
    fn release_surface(&mut self);

    /// Pump native events, feeding key state into `input`
    fn poll_events(&mut self, input: &mut InputState) -> Vec<BackendEvent>;

    /// Put the recorded frame on screen
    fn present(&mut self, batch: &SpriteBatch) -> Result<()>;
}
