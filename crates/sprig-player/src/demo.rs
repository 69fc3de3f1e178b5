//! Demo game: a main menu, a play screen with particle bursts, and the
//! usual F1 / F11 shortcuts

use sprig_core::{Color, GameTime, InputState, Key, Result, TextAlign, Vec2};
use sprig_particles::{BurstConfig, BurstEffect};
use sprig_render::{Font, SpriteBatch, Texture};
use sprig_runtime::{Game, GameContext};
use sprig_screens::{MenuItem, MenuScreen, Screen, ScreenContext};
use std::sync::Arc;

/// Name the built-in font is cached under
pub const BUILTIN_FONT: &str = "builtin-mono";

/// Spawns a particle burst while the play screen is on top
const BURST_KEY: Key = Key::Space;

/// Gameplay placeholder: a line of text; Escape returns to the menu
struct PlayScreen {
    font: Arc<Font>,
    center: Vec2,
}

impl Screen for PlayScreen {
    fn name(&self) -> &str {
        "play"
    }

    fn handle_input(&mut self, input: &InputState, ctx: &mut ScreenContext) {
        if input.is_key_just_pressed(Key::Escape) {
            ctx.exit_screen();
        }
    }

    fn draw(&mut self, batch: &mut SpriteBatch) {
        batch.draw_string(
            &self.font,
            "Space: burst   Esc: menu",
            self.center,
            Color::WHITE,
            TextAlign::Center,
        );
    }
}

pub struct DemoGame {
    font: Option<Arc<Font>>,
    particle_texture: Arc<Texture>,
    bursts: u32,
    show_fps: bool,
}

impl DemoGame {
    pub fn new() -> Self {
        Self {
            font: None,
            particle_texture: Arc::new(Texture::white_pixel()),
            bursts: 0,
            show_fps: false,
        }
    }

    /// Bursts spawned so far
    pub fn bursts(&self) -> u32 {
        self.bursts
    }

    fn build_menu(font: &Arc<Font>, center: Vec2) -> MenuScreen {
        let mut menu = MenuScreen::new("main-menu", center - Vec2::new(0.0, 40.0));
        menu.set_font(Arc::clone(font));

        let play_font = Arc::clone(font);
        menu.add_item(MenuItem::new("Play").on_select(move |ctx| {
            ctx.push_screen(PlayScreen {
                font: Arc::clone(&play_font),
                center,
            });
        }));
        menu.add_item(MenuItem::new("Fullscreen").on_select(|ctx| ctx.toggle_full_screen()));
        menu.add_item(MenuItem::new("Quit").on_select(|ctx| ctx.quit_game()));
        menu
    }
}

impl Default for DemoGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for DemoGame {
    fn name(&self) -> &str {
        "Sprig Demo"
    }

    fn load_content(&mut self, ctx: &mut GameContext<'_>) -> Result<()> {
        let font = ctx
            .resources
            .insert_font(BUILTIN_FONT, Font::new(BUILTIN_FONT, 8, 16));
        let menu = Self::build_menu(&font, ctx.screen_center());
        ctx.screens.add_screen(Box::new(menu), ctx.resources)?;
        self.font = Some(font);
        Ok(())
    }

    fn unload_content(&mut self, _ctx: &mut GameContext<'_>) {
        self.font = None;
    }

    fn update(&mut self, ctx: &mut GameContext<'_>, _time: &GameTime) {
        if ctx.input.is_key_just_pressed(Key::F11) {
            ctx.toggle_full_screen();
        }
        if ctx.input.is_key_just_pressed(Key::F1) {
            self.show_fps = !self.show_fps;
            match (&self.font, self.show_fps) {
                (Some(font), true) => ctx.set_frame_counter_font(Arc::clone(font)),
                _ => ctx.clear_frame_counter_font(),
            }
        }

        let playing = ctx.screens.screen_names().last() == Some(&"play");
        if playing && ctx.input.is_key_just_pressed(BURST_KEY) {
            self.bursts += 1;
            let effect = BurstEffect::new(
                ctx.screen_center(),
                BurstConfig::default(),
                Arc::clone(&self.particle_texture),
                self.bursts,
            );
            ctx.particles.add_effect(Box::new(effect));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_runtime::{GameHost, HeadlessBackend, ManualTimeSource};

    fn host(backend: HeadlessBackend) -> GameHost<DemoGame, HeadlessBackend> {
        let mut host = GameHost::new(DemoGame::new(), backend);
        host.set_time_source(ManualTimeSource::new());
        host
    }

    /// Press and release `key` on consecutive polls starting at `poll`
    fn tap(backend: HeadlessBackend, poll: u64, key: Key) -> HeadlessBackend {
        backend.key_down_on_poll(poll, key).key_up_on_poll(poll + 1, key)
    }

    #[test]
    fn test_menu_quit() {
        let backend = HeadlessBackend::new();
        let backend = tap(backend, 2, Key::Down);
        let backend = tap(backend, 4, Key::Down);
        let backend = backend.key_down_on_poll(6, Key::Enter);
        let mut host = host(backend);

        assert_eq!(host.run(), 0);
        assert!(!host.is_full_screen());
        assert!(host.backend().frames_presented() >= 3);
    }

    #[test]
    fn test_menu_fullscreen_then_close() {
        let backend = HeadlessBackend::new();
        let backend = tap(backend, 2, Key::Down);
        let backend = backend.key_down_on_poll(4, Key::Enter).close_on_poll(8);
        let mut host = host(backend);

        assert_eq!(host.run(), 0);
        assert!(host.is_full_screen());
    }

    #[test]
    fn test_play_screen_bursts() {
        let backend = HeadlessBackend::new();
        let backend = tap(backend, 2, Key::Enter);
        let backend = tap(backend, 4, Key::Space);
        let backend = backend.close_on_poll(8);
        let mut host = host(backend);

        assert_eq!(host.run(), 0);
        assert_eq!(host.game().bursts(), 1);
    }

    #[test]
    fn test_name_used_as_title() {
        let host = host(HeadlessBackend::new());
        assert_eq!(host.window_title(), "Sprig Demo");
    }
}
