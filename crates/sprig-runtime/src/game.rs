//! The contract a concrete game implements

use sprig_asset::ResourceManager;
use sprig_core::{GameTime, InputState, Result, Vec2};
use sprig_particles::ParticleManager;
use sprig_render::{Font, SpriteBatch};
use sprig_screens::ScreenManager;
use std::sync::Arc;

use crate::display::ScreenMetrics;

/// Lifecycle hooks the [`GameHost`](crate::GameHost) calls.
///
/// The host updates and draws the screen stack and particles itself, so a
/// game that lives entirely in screens only needs `name` and `load_content`.
pub trait Game {
    /// Display name; also the window title when none is configured.
    /// Must not be empty.
    fn name(&self) -> &str;

    /// Called once after every subsystem exists and before the first tick.
    /// An error aborts startup.
    fn load_content(&mut self, _ctx: &mut GameContext<'_>) -> Result<()> {
        Ok(())
    }

    /// Called once after the loop exits, before subsystems are torn down
    fn unload_content(&mut self, _ctx: &mut GameContext<'_>) {}

    /// Called once per admitted tick, before the screens and particles update
    fn update(&mut self, _ctx: &mut GameContext<'_>, _time: &GameTime) {}

    /// Called once per drawn frame, before the screens and particles draw
    fn draw(&mut self, _ctx: &mut GameContext<'_>, _batch: &mut SpriteBatch) {}
}

/// Host-side state games can poke through [`GameContext`]. Requests are
/// honoured at the next loop boundary.
#[derive(Debug, Default)]
pub(crate) struct HostControl {
    pub quit_requested: bool,
    pub toggle_full_screen_requested: bool,
    pub frame_counter_font: Option<Arc<Font>>,
    pub measured_fps: f64,
}

/// Borrowed view of the host handed to every [`Game`] hook
pub struct GameContext<'a> {
    pub resources: &'a mut ResourceManager,
    pub screens: &'a mut ScreenManager,
    pub particles: &'a mut ParticleManager,
    pub input: &'a InputState,
    display: &'a ScreenMetrics,
    control: &'a mut HostControl,
}

impl<'a> GameContext<'a> {
    pub(crate) fn new(
        resources: &'a mut ResourceManager,
        screens: &'a mut ScreenManager,
        particles: &'a mut ParticleManager,
        input: &'a InputState,
        display: &'a ScreenMetrics,
        control: &'a mut HostControl,
    ) -> Self {
        Self {
            resources,
            screens,
            particles,
            input,
            display,
            control,
        }
    }

    /// Stop the loop once the current update/draw pair completes
    pub fn quit(&mut self) {
        self.control.quit_requested = true;
    }

    pub fn is_quitting(&self) -> bool {
        self.control.quit_requested
    }

    /// Toggle fullscreen at the end of the current frame
    pub fn toggle_full_screen(&mut self) {
        self.control.toggle_full_screen_requested = true;
    }

    /// Overlay the measured frame rate with `font` on every frame
    pub fn set_frame_counter_font(&mut self, font: Arc<Font>) {
        self.control.frame_counter_font = Some(font);
    }

    pub fn clear_frame_counter_font(&mut self) {
        self.control.frame_counter_font = None;
    }

    pub fn measured_fps(&self) -> f64 {
        self.control.measured_fps
    }

    pub fn display(&self) -> &ScreenMetrics {
        self.display
    }

    pub fn screen_width(&self) -> u32 {
        self.display.width
    }

    pub fn screen_height(&self) -> u32 {
        self.display.height
    }

    pub fn screen_center(&self) -> Vec2 {
        Vec2::new(
            (self.display.width / 2) as f32,
            (self.display.height / 2) as f32,
        )
    }
}
