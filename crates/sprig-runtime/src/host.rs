//! Game host: owns the backend, the clock and the subsystems, and drives a
//! [`Game`] through Created → Initializing → Running → Stopped.

use sprig_core::{Color, GameTime, InputState, Result, SprigError, TextAlign, Vec2};
use sprig_render::Font;
use sprig_screens::HostRequest;
use std::path::Path;
use std::sync::Arc;

use crate::backend::{Backend, BackendEvent, SurfaceRequest};
use crate::clock::{FrameClock, SystemTimeSource, TimeSource};
use crate::config::GameConfig;
use crate::display::{DisplayController, DisplayMode, ScreenMetrics};
use crate::game::{Game, GameContext, HostControl};
use crate::subsystems::Subsystems;

/// Top-left corner of the frame-rate overlay
const FRAME_COUNTER_POSITION: Vec2 = Vec2::new(10.0, 10.0);

/// Lifecycle of a [`GameHost`]. Moves forward only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostState {
    Created,
    Initializing,
    Running,
    Stopped,
}

/// Runs one game on one backend.
///
/// Configure the host, then call [`run`](GameHost::run) once. Each loop
/// iteration polls the backend, admits zero or more fixed ticks from the
/// [`FrameClock`] (sleeping when none are due), updates the game, the screen
/// stack and the particles once per tick, then draws and presents exactly
/// one frame.
pub struct GameHost<G: Game, B: Backend> {
    game: G,
    backend: B,
    time: Box<dyn TimeSource>,
    clock: FrameClock,
    display: DisplayController,
    state: HostState,
    is_initialized: bool,
    is_running: bool,
    requires_accelerated_backend: bool,
    start_full_screen: bool,
    frame_counter_font_path: Option<String>,
    subsystems: Option<Subsystems>,
    input: InputState,
    control: HostControl,
    surface_acquired: bool,
}

impl<G: Game, B: Backend> GameHost<G, B> {
    /// A host at 60 ticks per second, 1280x720, windowed, content from
    /// `content/`
    pub fn new(game: G, backend: B) -> Self {
        Self {
            game,
            backend,
            time: Box::new(SystemTimeSource::new()),
            clock: FrameClock::default(),
            display: DisplayController::default(),
            state: HostState::Created,
            is_initialized: false,
            is_running: false,
            requires_accelerated_backend: false,
            start_full_screen: false,
            frame_counter_font_path: None,
            subsystems: None,
            input: InputState::new(),
            control: HostControl::default(),
            surface_acquired: false,
        }
    }

    pub fn with_config(game: G, backend: B, config: GameConfig) -> Result<Self> {
        config.validate()?;
        let mut host = Self::new(game, backend);
        host.set_target_frames_per_second(config.target_fps)?;
        host.clock.set_max_catch_up_ticks(config.max_catch_up_ticks)?;
        host.set_screen_resolution(config.width, config.height)?;
        if let Some(title) = config.window_title {
            host.set_window_title(title);
        }
        host.set_resource_directory(&config.content_directory);
        host.set_accelerated_backend_required(config.require_accelerated);
        host.start_full_screen = config.fullscreen;
        host.frame_counter_font_path = config.frame_counter_font;
        Ok(host)
    }

    /// Replace the wall clock, e.g. with a
    /// [`ManualTimeSource`](crate::ManualTimeSource) in tests
    pub fn set_time_source(&mut self, time: impl TimeSource + 'static) {
        self.time = Box::new(time);
    }

    pub fn set_target_frames_per_second(&mut self, rate: f64) -> Result<()> {
        self.clock.set_target_frames_per_second(rate)
    }

    pub fn set_screen_resolution(&mut self, width: u32, height: u32) -> Result<()> {
        self.display.set_screen_resolution(width, height)
    }

    pub fn set_window_title(&mut self, title: impl Into<String>) {
        self.display.set_window_title(title);
    }

    /// Root for every content path handed to the resource manager
    pub fn set_resource_directory<P: AsRef<Path>>(&mut self, path: P) {
        self.display.set_content_directory(path);
    }

    /// Only takes effect before `run`
    pub fn set_accelerated_backend_required(&mut self, required: bool) {
        self.requires_accelerated_backend = required;
    }

    /// Overlay the measured frame rate with `font`
    pub fn set_frame_counter_font(&mut self, font: Arc<Font>) {
        self.control.frame_counter_font = Some(font);
    }

    /// Stop after the current update/draw pair. Has no effect before `run`.
    pub fn quit(&mut self) {
        if self.is_running {
            log::info!("{}: quit requested", self.game.name());
        }
        self.is_running = false;
        self.control.quit_requested = true;
    }

    /// Switch between windowed and fullscreen. A failed switch leaves the
    /// display exactly as it was.
    pub fn toggle_full_screen(&mut self) -> Result<DisplayMode> {
        if !self.surface_acquired {
            return Err(SprigError::Lifecycle(
                "cannot change display mode before a surface exists".to_string(),
            ));
        }
        let mode = self.display.toggle_full_screen(&mut self.backend)?;
        if let Some(subsystems) = self.subsystems.as_mut() {
            subsystems
                .batch
                .set_viewport(self.display.width(), self.display.height());
        }
        Ok(mode)
    }

    pub fn state(&self) -> HostState {
        self.state
    }

    /// True once content has loaded and the loop may start
    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn is_full_screen(&self) -> bool {
        self.display.is_full_screen()
    }

    pub fn measured_fps(&self) -> f64 {
        self.clock.measured_fps()
    }

    /// The configured title, or the game's name
    pub fn window_title(&self) -> &str {
        self.display
            .window_title()
            .unwrap_or_else(|| self.game.name())
    }

    pub fn metrics(&self) -> &ScreenMetrics {
        self.display.metrics()
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Run the game to completion. Returns the process exit code: 0 after
    /// a normal quit, 1 after a fatal error (which is logged).
    pub fn run(&mut self) -> i32 {
        match self.try_run() {
            Ok(()) => 0,
            Err(e) => {
                log::error!("{}: {}", self.game.name(), e);
                1
            }
        }
    }

    /// [`run`](GameHost::run), with the fatal error returned instead of logged
    pub fn try_run(&mut self) -> Result<()> {
        if self.state != HostState::Created {
            return Err(SprigError::Lifecycle(
                "a game host can only run once".to_string(),
            ));
        }
        if self.game.name().trim().is_empty() {
            return Err(SprigError::InvalidConfig(
                "game name must not be empty".to_string(),
            ));
        }

        self.state = HostState::Initializing;
        self.control.quit_requested = false;
        log::info!("{}: initializing", self.game.name());
        if let Err(e) = self.initialize() {
            self.teardown();
            self.state = HostState::Stopped;
            return Err(e);
        }

        self.state = HostState::Running;
        self.is_running = true;
        log::info!(
            "{}: running at {} ticks/s",
            self.game.name(),
            self.clock.target_fps()
        );

        let result = self.run_loop();

        self.is_running = false;
        self.shutdown();
        self.state = HostState::Stopped;
        log::info!("{}: stopped", self.game.name());
        result
    }

    fn initialize(&mut self) -> Result<()> {
        let request = SurfaceRequest {
            title: self.window_title().to_string(),
            resolution: self.display.resolution(),
            mode: DisplayMode::Windowed,
            accelerated: self.requires_accelerated_backend,
        };
        self.backend.acquire_surface(&request).map_err(|e| match e {
            SprigError::Surface(_) => e,
            other => SprigError::Surface(other.to_string()),
        })?;
        self.surface_acquired = true;

        if self.start_full_screen {
            if let Err(e) = self.toggle_full_screen() {
                log::warn!("starting windowed: {e}");
            }
        }

        self.subsystems = Some(Subsystems::initialize(
            self.display.content_directory(),
            self.display.resolution(),
        ));

        if let Some(path) = self.frame_counter_font_path.clone() {
            if let Some(subsystems) = self.subsystems.as_mut() {
                let font = subsystems.resources.load_font(&path)?;
                self.control.frame_counter_font = Some(font);
            }
        }

        self.with_context(|game, ctx| game.load_content(ctx))
            .unwrap_or(Ok(()))?;
        self.is_initialized = true;
        Ok(())
    }

    fn run_loop(&mut self) -> Result<()> {
        self.clock.reset(self.time.now());

        while self.is_running {
            for event in self.backend.poll_events(&mut self.input) {
                self.handle_event(event);
            }
            if !self.is_running {
                break;
            }

            let now = self.time.now();
            let ticks = self.clock.advance(now);
            if ticks == 0 {
                self.time.sleep(self.clock.time_until_next_tick(now));
                continue;
            }

            for _ in 0..ticks {
                let time = self.clock.next_tick();
                self.update(&time);
                self.input.end_frame();
                if self.control.quit_requested {
                    break;
                }
            }

            self.draw()?;
            if self.clock.record_frame(now) {
                self.control.measured_fps = self.clock.measured_fps();
                log::trace!("{} fps", self.control.measured_fps);
            }

            self.apply_requests();
        }
        Ok(())
    }

    fn handle_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::CloseRequested => self.quit(),
            BackendEvent::Resized(resolution) => {
                if self.display.surface_resized(resolution) {
                    if let Some(subsystems) = self.subsystems.as_mut() {
                        subsystems.batch.set_viewport(resolution.width, resolution.height);
                    }
                }
            }
            BackendEvent::FocusLost => self.input.reset(),
        }
    }

    fn update(&mut self, time: &GameTime) {
        let Some(subsystems) = self.subsystems.as_mut() else {
            return;
        };

        {
            let mut ctx = GameContext::new(
                &mut subsystems.resources,
                &mut subsystems.screens,
                &mut subsystems.particles,
                &self.input,
                self.display.metrics(),
                &mut self.control,
            );
            self.game.update(&mut ctx, time);
        }

        subsystems
            .screens
            .update(time, &self.input, &mut subsystems.resources);
        subsystems.particles.update(time);

        for request in subsystems.screens.drain_host_requests() {
            match request {
                HostRequest::Quit => self.control.quit_requested = true,
                HostRequest::ToggleFullScreen => self.control.toggle_full_screen_requested = true,
            }
        }
    }

    fn draw(&mut self) -> Result<()> {
        let Some(subsystems) = self.subsystems.as_mut() else {
            return Ok(());
        };
        let Subsystems {
            resources,
            screens,
            particles,
            batch,
        } = subsystems;

        batch.begin();
        {
            let mut ctx = GameContext::new(
                resources,
                screens,
                particles,
                &self.input,
                self.display.metrics(),
                &mut self.control,
            );
            self.game.draw(&mut ctx, batch);
        }
        screens.draw(batch);
        particles.draw(batch);
        if let Some(font) = &self.control.frame_counter_font {
            let text = format!("{:.0} fps", self.control.measured_fps);
            batch.draw_string(font, &text, FRAME_COUNTER_POSITION, Color::WHITE, TextAlign::Left);
        }
        batch.end();

        self.backend.present(batch)
    }

    /// Honour requests raised during the frame
    fn apply_requests(&mut self) {
        if std::mem::take(&mut self.control.toggle_full_screen_requested) {
            if let Err(e) = self.toggle_full_screen() {
                log::warn!("fullscreen toggle failed: {e}");
            }
        }
        if self.control.quit_requested {
            self.quit();
        }
    }

    fn with_context<R>(
        &mut self,
        f: impl FnOnce(&mut G, &mut GameContext<'_>) -> R,
    ) -> Option<R> {
        let subsystems = self.subsystems.as_mut()?;
        let mut ctx = GameContext::new(
            &mut subsystems.resources,
            &mut subsystems.screens,
            &mut subsystems.particles,
            &self.input,
            self.display.metrics(),
            &mut self.control,
        );
        Some(f(&mut self.game, &mut ctx))
    }

    fn shutdown(&mut self) {
        if self.is_initialized {
            log::info!("{}: unloading content", self.game.name());
            self.with_context(|game, ctx| game.unload_content(ctx));
        }
        self.teardown();
    }

    /// Subsystems in reverse creation order, then the surface
    fn teardown(&mut self) {
        if let Some(subsystems) = self.subsystems.take() {
            subsystems.shutdown();
        }
        if self.surface_acquired {
            self.backend.release_surface();
            self.surface_acquired = false;
        }
    }
}

impl<G: Game, B: Backend> Drop for GameHost<G, B> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualTimeSource;
    use crate::display::Resolution;
    use crate::headless::{CallLog, HeadlessBackend};
    use sprig_core::Key;
    use sprig_render::SpriteBatch;
    use sprig_screens::{MenuItem, MenuScreen, Screen};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Screen that only records its unload
    struct Probe {
        log: CallLog,
    }

    impl Screen for Probe {
        fn name(&self) -> &str {
            "probe"
        }

        fn unload_content(&mut self) {
            self.log.borrow_mut().push("screen:unload".to_string());
        }

        fn draw(&mut self, _batch: &mut SpriteBatch) {}
    }

    /// Game that records every hook into the shared log
    struct Recorder {
        name: String,
        log: CallLog,
        updates: u32,
        quit_after_updates: Option<u32>,
        toggle_on_update: Option<u32>,
        fail_load: bool,
        push_probe: bool,
        menu: bool,
        stall: Option<(ManualTimeSource, f64)>,
    }

    impl Recorder {
        fn new(log: &CallLog) -> Self {
            Self {
                name: "recorder".to_string(),
                log: Rc::clone(log),
                updates: 0,
                quit_after_updates: None,
                toggle_on_update: None,
                fail_load: false,
                push_probe: false,
                menu: false,
                stall: None,
            }
        }

        fn record(&self, entry: &str) {
            self.log.borrow_mut().push(entry.to_string());
        }
    }

    impl Game for Recorder {
        fn name(&self) -> &str {
            &self.name
        }

        fn load_content(&mut self, ctx: &mut GameContext<'_>) -> Result<()> {
            self.record("game:load");
            if self.push_probe {
                ctx.screens.add_screen(
                    Box::new(Probe {
                        log: Rc::clone(&self.log),
                    }),
                    ctx.resources,
                )?;
            }
            if self.menu {
                let mut menu = MenuScreen::new("main", Vec2::ZERO);
                menu.add_item(MenuItem::new("Quit").on_select(|ctx| ctx.quit_game()));
                ctx.screens.add_screen(Box::new(menu), ctx.resources)?;
            }
            if self.fail_load {
                return Err(SprigError::Content("missing sprites".to_string()));
            }
            Ok(())
        }

        fn unload_content(&mut self, _ctx: &mut GameContext<'_>) {
            self.record("game:unload");
        }

        fn update(&mut self, ctx: &mut GameContext<'_>, _time: &GameTime) {
            self.updates += 1;
            self.record("game:update");
            if let Some((time, seconds)) = &self.stall {
                if self.updates == 1 {
                    time.advance(*seconds);
                }
            }
            if self.toggle_on_update == Some(self.updates) {
                ctx.toggle_full_screen();
            }
            if self.quit_after_updates == Some(self.updates) {
                ctx.quit();
            }
        }

        fn draw(&mut self, _ctx: &mut GameContext<'_>, _batch: &mut SpriteBatch) {
            self.record("game:draw");
        }
    }

    fn call_log() -> CallLog {
        Rc::new(RefCell::new(Vec::new()))
    }

    fn host(game: Recorder, backend: HeadlessBackend) -> (GameHost<Recorder, HeadlessBackend>, ManualTimeSource) {
        let time = ManualTimeSource::new();
        let mut host = GameHost::new(game, backend);
        host.set_time_source(time.clone());
        (host, time)
    }

    fn entries(log: &CallLog) -> Vec<String> {
        log.borrow().clone()
    }

    #[test]
    fn test_close_before_first_tick() {
        let log = call_log();
        let mut game = Recorder::new(&log);
        game.push_probe = true;
        let backend = HeadlessBackend::new().with_call_log(Rc::clone(&log)).close_on_poll(1);
        let (mut host, _) = host(game, backend);
        assert_eq!(host.state(), HostState::Created);

        assert_eq!(host.run(), 0);
        assert_eq!(
            entries(&log),
            vec![
                "backend:acquire",
                "game:load",
                "game:unload",
                "screen:unload",
                "backend:release",
            ]
        );
        assert_eq!(host.state(), HostState::Stopped);
        assert!(host.is_initialized());
        assert!(!host.is_running());
        assert_eq!(host.backend().frames_presented(), 0);
    }

    #[test]
    fn test_quit_during_update_still_draws() {
        let log = call_log();
        let mut game = Recorder::new(&log);
        game.quit_after_updates = Some(1);
        let backend = HeadlessBackend::new().with_call_log(Rc::clone(&log));
        let (mut host, _) = host(game, backend);

        assert_eq!(host.run(), 0);
        assert_eq!(
            entries(&log),
            vec![
                "backend:acquire",
                "game:load",
                "game:update",
                "game:draw",
                "game:unload",
                "backend:release",
            ]
        );
        assert_eq!(host.backend().frames_presented(), 1);
        assert_eq!(host.clock().tick_count(), 1);
    }

    #[test]
    fn test_quit_before_run_is_ignored() {
        let log = call_log();
        let mut game = Recorder::new(&log);
        game.quit_after_updates = Some(2);
        let (mut host, _) = host(game, HeadlessBackend::new());
        host.quit();

        assert_eq!(host.run(), 0);
        assert_eq!(host.game().updates, 2);
        assert_eq!(host.backend().frames_presented(), 2);
    }

    #[test]
    fn test_surface_failure_is_fatal() {
        let log = call_log();
        let backend = HeadlessBackend::new().failing_acquire();
        let (mut host, _) = host(Recorder::new(&log), backend);

        assert_eq!(host.run(), 1);
        assert!(entries(&log).is_empty());
        assert_eq!(host.state(), HostState::Stopped);
        assert!(!host.is_initialized());
    }

    #[test]
    fn test_accelerated_path_unavailable() {
        let log = call_log();
        let backend = HeadlessBackend::new().without_acceleration();
        let (mut host, _) = host(Recorder::new(&log), backend);
        host.set_accelerated_backend_required(true);

        assert!(matches!(host.try_run(), Err(SprigError::Surface(_))));
        assert!(host.backend().last_request().is_some_and(|r| r.accelerated));
    }

    #[test]
    fn test_load_failure_releases_everything() {
        let log = call_log();
        let mut game = Recorder::new(&log);
        game.fail_load = true;
        game.push_probe = true;
        let backend = HeadlessBackend::new().with_call_log(Rc::clone(&log));
        let (mut host, _) = host(game, backend);

        assert_eq!(host.run(), 1);
        assert_eq!(
            entries(&log),
            vec![
                "backend:acquire",
                "game:load",
                "screen:unload",
                "backend:release",
            ]
        );
        assert!(!host.is_initialized());
        assert!(!host.backend().has_surface());
    }

    #[test]
    fn test_run_only_once() {
        let log = call_log();
        let backend = HeadlessBackend::new().close_on_poll(1);
        let (mut host, _) = host(Recorder::new(&log), backend);

        assert_eq!(host.run(), 0);
        assert!(matches!(host.try_run(), Err(SprigError::Lifecycle(_))));
        assert_eq!(host.run(), 1);
    }

    #[test]
    fn test_empty_name_rejected() {
        let log = call_log();
        let mut game = Recorder::new(&log);
        game.name = "  ".to_string();
        let (mut host, _) = host(game, HeadlessBackend::new());

        assert!(matches!(host.try_run(), Err(SprigError::InvalidConfig(_))));
        assert_eq!(host.state(), HostState::Created);
    }

    #[test]
    fn test_window_title_defaults_to_game_name() {
        let log = call_log();
        let backend = HeadlessBackend::new().close_on_poll(1);
        let (mut host, _) = host(Recorder::new(&log), backend);
        assert_eq!(host.window_title(), "recorder");

        host.run();
        assert_eq!(host.backend().last_request().map(|r| r.title.as_str()), Some("recorder"));

        let mut titled = GameHost::new(Recorder::new(&log), HeadlessBackend::new());
        titled.set_window_title("Sprig Demo");
        assert_eq!(titled.window_title(), "Sprig Demo");
    }

    #[test]
    fn test_toggle_requested_by_game() {
        let log = call_log();
        let mut game = Recorder::new(&log);
        game.toggle_on_update = Some(1);
        game.quit_after_updates = Some(2);
        let backend = HeadlessBackend::new().with_call_log(Rc::clone(&log));
        let (mut host, _) = host(game, backend);

        assert_eq!(host.run(), 0);
        assert!(host.is_full_screen());
        assert_eq!(host.metrics().resolution(), Resolution::new(1920, 1080));
        assert_eq!(host.metrics().previous_width, 1280);
        assert!(entries(&log).contains(&"backend:apply_mode 1920x1080 Fullscreen".to_string()));
    }

    #[test]
    fn test_failed_toggle_keeps_running_windowed() {
        let log = call_log();
        let mut game = Recorder::new(&log);
        game.toggle_on_update = Some(1);
        game.quit_after_updates = Some(2);
        let mut backend = HeadlessBackend::new();
        backend.set_fail_mode_changes(true);
        let (mut host, _) = host(game, backend);

        assert_eq!(host.run(), 0);
        assert!(!host.is_full_screen());
        assert_eq!(host.metrics().resolution(), Resolution::new(1280, 720));
        assert_eq!(host.game().updates, 2);
    }

    #[test]
    fn test_toggle_before_run_is_rejected() {
        let log = call_log();
        let (mut host, _) = host(Recorder::new(&log), HeadlessBackend::new());
        assert!(matches!(host.toggle_full_screen(), Err(SprigError::Lifecycle(_))));
        assert!(!host.is_full_screen());
    }

    #[test]
    fn test_frame_counter_overlay() {
        let log = call_log();
        let mut game = Recorder::new(&log);
        game.quit_after_updates = Some(1);
        let (mut plain, _) = host(game, HeadlessBackend::new());
        plain.run();
        assert_eq!(plain.backend().last_frame_commands(), 0);

        let mut game = Recorder::new(&log);
        game.quit_after_updates = Some(1);
        let (mut counted, _) = host(game, HeadlessBackend::new());
        counted.set_frame_counter_font(Arc::new(Font::new("mono", 8, 16)));
        counted.run();
        assert_eq!(counted.backend().last_frame_commands(), 1);
    }

    #[test]
    fn test_long_frame_drops_backlog() {
        let log = call_log();
        let time = ManualTimeSource::new();
        let mut game = Recorder::new(&log);
        game.stall = Some((time.clone(), 1.0));
        game.quit_after_updates = Some(6);
        let mut host = GameHost::new(game, HeadlessBackend::new());
        host.set_time_source(time);

        assert_eq!(host.run(), 0);
        assert_eq!(host.game().updates, 6);
        assert_eq!(host.clock().dropped_ticks(), 55);
        assert_eq!(host.backend().frames_presented(), 2);
    }

    #[test]
    fn test_menu_quit_through_screen_stack() {
        let log = call_log();
        let mut game = Recorder::new(&log);
        game.menu = true;
        let backend = HeadlessBackend::new().key_down_on_poll(2, Key::Enter);
        let (mut host, _) = host(game, backend);

        assert_eq!(host.run(), 0);
        assert_eq!(host.game().updates, 1);
        assert_eq!(host.backend().frames_presented(), 1);
    }

    #[test]
    fn test_resize_event_updates_metrics() {
        let log = call_log();
        let backend = HeadlessBackend::new()
            .event_on_poll(1, BackendEvent::Resized(Resolution::new(800, 600)))
            .close_on_poll(2);
        let (mut host, _) = host(Recorder::new(&log), backend);

        assert_eq!(host.run(), 0);
        assert_eq!(host.metrics().resolution(), Resolution::new(800, 600));
    }

    #[test]
    fn test_with_config() {
        let log = call_log();
        let config = GameConfig {
            target_fps: 30.0,
            width: 640,
            height: 480,
            window_title: Some("Configured".to_string()),
            ..GameConfig::default()
        };
        let host = GameHost::with_config(Recorder::new(&log), HeadlessBackend::new(), config)
            .expect("valid config");
        assert_eq!(host.clock().target_fps(), 30.0);
        assert_eq!(host.metrics().resolution(), Resolution::new(640, 480));
        assert_eq!(host.window_title(), "Configured");

        let bad = GameConfig {
            target_fps: 0.0,
            ..GameConfig::default()
        };
        assert!(GameHost::with_config(Recorder::new(&log), HeadlessBackend::new(), bad).is_err());
    }

    #[test]
    fn test_invalid_frame_rate_rejected() {
        let log = call_log();
        let (mut host, _) = host(Recorder::new(&log), HeadlessBackend::new());
        assert!(matches!(
            host.set_target_frames_per_second(-1.0),
            Err(SprigError::InvalidFrameRate(_))
        ));
        assert_eq!(host.clock().target_fps(), 60.0);
    }
}
