//! Screen trait

use sprig_asset::ResourceManager;
use sprig_core::{GameTime, InputState, Result};
use sprig_render::SpriteBatch;

use crate::context::ScreenContext;

/// One layer of the screen stack (title, menu, gameplay, pause overlay...)
pub trait Screen {
    /// Human-readable name, used in logs
    fn name(&self) -> &str;

    /// Called once when the screen is added to the stack
    fn load_content(&mut self, _resources: &mut ResourceManager) -> Result<()> {
        Ok(())
    }

    /// Called once when the screen leaves the stack or the game shuts down
    fn unload_content(&mut self) {}

    /// Called only for the top screen, before `update`
    fn handle_input(&mut self, _input: &InputState, _ctx: &mut ScreenContext) {}

    /// Called every tick for every screen on the stack
    fn update(&mut self, _time: &GameTime, _ctx: &mut ScreenContext) {}

    fn draw(&mut self, batch: &mut SpriteBatch);

    /// Popups let the screens beneath them keep drawing
    fn is_popup(&self) -> bool {
        false
    }
}
