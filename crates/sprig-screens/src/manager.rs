//! Screen stack

use sprig_asset::ResourceManager;
use sprig_core::{GameTime, InputState, Result};
use sprig_render::SpriteBatch;

use crate::context::{HostRequest, ScreenCommand, ScreenContext};
use crate::screen::Screen;

/// Pushdown stack of screens.
///
/// The top screen receives input; every screen updates; screens draw
/// bottom-to-top starting from the highest screen that is not a popup.
/// Requests that only the host can honour are queued for
/// [`ScreenManager::drain_host_requests`].
#[derive(Default)]
pub struct ScreenManager {
    screens: Vec<Box<dyn Screen>>,
    ctx: ScreenContext,
    host_requests: Vec<HostRequest>,
}

impl ScreenManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a screen's content and push it on top of the stack
    pub fn add_screen(
        &mut self,
        mut screen: Box<dyn Screen>,
        resources: &mut ResourceManager,
    ) -> Result<()> {
        screen.load_content(resources)?;
        log::debug!("screen pushed: {}", screen.name());
        self.screens.push(screen);
        Ok(())
    }

    /// Run one tick: input for the top screen, update for all, then apply
    /// whatever the screens queued.
    pub fn update(&mut self, time: &GameTime, input: &InputState, resources: &mut ResourceManager) {
        if let Some(top) = self.screens.len().checked_sub(1) {
            self.ctx.set_current(top);
            self.screens[top].handle_input(input, &mut self.ctx);
        }

        for (index, screen) in self.screens.iter_mut().enumerate().rev() {
            self.ctx.set_current(index);
            screen.update(time, &mut self.ctx);
        }

        self.apply_commands(resources);
    }

    fn apply_commands(&mut self, resources: &mut ResourceManager) {
        let commands = self.ctx.take_commands();
        if commands.is_empty() {
            return;
        }

        let mut exits = Vec::new();
        let mut pushes = Vec::new();
        for command in commands {
            match command {
                ScreenCommand::Exit(index) => exits.push(index),
                ScreenCommand::Push(screen) => pushes.push(screen),
                ScreenCommand::Host(request) => self.host_requests.push(request),
            }
        }

        // Highest index first so earlier indices stay valid
        exits.sort_unstable();
        exits.dedup();
        for index in exits.into_iter().rev() {
            if index < self.screens.len() {
                let mut screen = self.screens.remove(index);
                screen.unload_content();
                log::debug!("screen removed: {}", screen.name());
            }
        }

        for screen in pushes {
            let name = screen.name().to_string();
            if let Err(e) = self.add_screen(screen, resources) {
                log::error!("failed to load screen '{name}': {e}");
            }
        }
    }

    /// Record draw calls for every visible screen
    pub fn draw(&mut self, batch: &mut SpriteBatch) {
        let first_visible = self
            .screens
            .iter()
            .rposition(|s| !s.is_popup())
            .unwrap_or(0);
        for screen in self.screens.iter_mut().skip(first_visible) {
            screen.draw(batch);
        }
    }

    /// Requests for the host raised since the last drain
    pub fn drain_host_requests(&mut self) -> Vec<HostRequest> {
        std::mem::take(&mut self.host_requests)
    }

    /// Unload and drop every screen, top first
    pub fn unload_all(&mut self) {
        while let Some(mut screen) = self.screens.pop() {
            screen.unload_content();
            log::debug!("screen unloaded: {}", screen.name());
        }
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Names of all screens, bottom to top
    pub fn screen_names(&self) -> Vec<&str> {
        self.screens.iter().map(|s| s.name()).collect()
    }
}
