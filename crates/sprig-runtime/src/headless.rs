//! In-memory backend for tests, CI and server-side simulation

use sprig_core::{InputState, Key, Result, SprigError};
use sprig_render::SpriteBatch;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::backend::{Backend, BackendEvent, DisplaySurface, SurfaceRequest};
use crate::display::{DisplayMode, Resolution};

/// Shared record of backend calls, interleaved with whatever else a test
/// writes into the same log
pub type CallLog = Rc<RefCell<Vec<String>>>;

/// Something to deliver on a given poll
#[derive(Debug, Clone, Copy)]
enum Scripted {
    Event(BackendEvent),
    KeyDown(Key),
    KeyUp(Key),
}

/// Backend with no window. Surface, display modes and input are simulated,
/// and presented frames are counted instead of shown.
pub struct HeadlessBackend {
    modes: Vec<Resolution>,
    surface: Option<SurfaceRequest>,
    last_request: Option<SurfaceRequest>,
    current: Option<(Resolution, DisplayMode)>,
    supports_accelerated: bool,
    fail_acquire: bool,
    fail_mode_changes: bool,
    polls: u64,
    script: VecDeque<(u64, Scripted)>,
    frames_presented: u64,
    last_frame_commands: usize,
    call_log: Option<CallLog>,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self {
            modes: vec![
                Resolution::new(1280, 720),
                Resolution::new(1920, 1080),
            ],
            surface: None,
            last_request: None,
            current: None,
            supports_accelerated: true,
            fail_acquire: false,
            fail_mode_changes: false,
            polls: 0,
            script: VecDeque::new(),
            frames_presented: 0,
            last_frame_commands: 0,
            call_log: None,
        }
    }

    pub fn with_modes(mut self, modes: Vec<Resolution>) -> Self {
        self.modes = modes;
        self
    }

    /// Refuse surface requests that insist on acceleration
    pub fn without_acceleration(mut self) -> Self {
        self.supports_accelerated = false;
        self
    }

    /// Refuse every surface request
    pub fn failing_acquire(mut self) -> Self {
        self.fail_acquire = true;
        self
    }

    pub fn with_call_log(mut self, log: CallLog) -> Self {
        self.call_log = Some(log);
        self
    }

    /// Make later mode changes fail (or succeed again)
    pub fn set_fail_mode_changes(&mut self, fail: bool) {
        self.fail_mode_changes = fail;
    }

    /// Deliver a close request on the `poll`-th call to `poll_events` (1-based)
    pub fn close_on_poll(mut self, poll: u64) -> Self {
        self.schedule(poll, Scripted::Event(BackendEvent::CloseRequested));
        self
    }

    pub fn event_on_poll(mut self, poll: u64, event: BackendEvent) -> Self {
        self.schedule(poll, Scripted::Event(event));
        self
    }

    pub fn key_down_on_poll(mut self, poll: u64, key: Key) -> Self {
        self.schedule(poll, Scripted::KeyDown(key));
        self
    }

    pub fn key_up_on_poll(mut self, poll: u64, key: Key) -> Self {
        self.schedule(poll, Scripted::KeyUp(key));
        self
    }

    fn schedule(&mut self, poll: u64, item: Scripted) {
        let at = self
            .script
            .iter()
            .position(|(p, _)| *p > poll)
            .unwrap_or(self.script.len());
        self.script.insert(at, (poll, item));
    }

    fn record(&self, call: String) {
        if let Some(log) = &self.call_log {
            log.borrow_mut().push(call);
        }
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// The most recent surface request, kept after the surface is released
    pub fn last_request(&self) -> Option<&SurfaceRequest> {
        self.last_request.as_ref()
    }

    /// Size and mode last applied to the surface
    pub fn current_mode(&self) -> Option<(Resolution, DisplayMode)> {
        self.current
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn last_frame_commands(&self) -> usize {
        self.last_frame_commands
    }

    pub fn poll_count(&self) -> u64 {
        self.polls
    }
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for HeadlessBackend {
    fn fullscreen_modes(&self) -> Vec<Resolution> {
        self.modes.clone()
    }

    fn apply_mode(&mut self, resolution: Resolution, mode: DisplayMode) -> Result<()> {
        if self.surface.is_none() {
            return Err(SprigError::DisplayMode("no surface".to_string()));
        }
        if self.fail_mode_changes {
            return Err(SprigError::DisplayMode(format!(
                "{}x{} {:?} rejected",
                resolution.width, resolution.height, mode
            )));
        }
        self.current = Some((resolution, mode));
        self.record(format!(
            "backend:apply_mode {}x{} {:?}",
            resolution.width, resolution.height, mode
        ));
        Ok(())
    }
}

impl Backend for HeadlessBackend {
    fn acquire_surface(&mut self, request: &SurfaceRequest) -> Result<()> {
        self.last_request = Some(request.clone());
        if self.fail_acquire {
            return Err(SprigError::Surface("headless surface refused".to_string()));
        }
        if request.accelerated && !self.supports_accelerated {
            return Err(SprigError::Surface(
                "accelerated rendering path unavailable".to_string(),
            ));
        }
        self.current = Some((request.resolution, request.mode));
        self.surface = Some(request.clone());
        self.record("backend:acquire".to_string());
        Ok(())
    }

    fn release_surface(&mut self) {
        if self.surface.take().is_some() {
            self.current = None;
            self.record("backend:release".to_string());
        }
    }

    fn poll_events(&mut self, input: &mut InputState) -> Vec<BackendEvent> {
        self.polls += 1;
        let mut events = Vec::new();
        while let Some((poll, _)) = self.script.front() {
            if *poll > self.polls {
                break;
            }
            let Some((_, item)) = self.script.pop_front() else {
                break;
            };
            match item {
                Scripted::Event(event) => events.push(event),
                Scripted::KeyDown(key) => input.process_key_down(key),
                Scripted::KeyUp(key) => input.process_key_up(key),
            }
        }
        events
    }

    fn present(&mut self, batch: &SpriteBatch) -> Result<()> {
        if self.surface.is_none() {
            return Err(SprigError::Surface("present without a surface".to_string()));
        }
        self.frames_presented += 1;
        self.last_frame_commands = batch.len();
        Ok(())
    }
}
