//! Backend driving a real window through winit
//!
//! The host owns the loop, so events are pumped once per `poll_events`
//! instead of handing control to `EventLoop::run_app`.

use sprig_core::{InputState, Key, Result, SprigError};
use sprig_render::SpriteBatch;
use sprig_runtime::{
    Backend, BackendEvent, DisplayMode, DisplaySurface, Resolution, SurfaceRequest,
};
use std::time::Duration;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::monitor::VideoModeHandle;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Fullscreen, Window, WindowId};

/// Pumps allowed while waiting for the platform to hand over a window
const MAX_CREATE_PUMPS: u32 = 100;

/// Receives winit callbacks and buffers them until the next poll
#[derive(Default)]
struct WindowHandler {
    window: Option<Window>,
    pending: Option<SurfaceRequest>,
    create_error: Option<String>,
    events: Vec<BackendEvent>,
    keys: Vec<(Key, ElementState)>,
}

impl ApplicationHandler for WindowHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let Some(request) = self.pending.take() else {
            return;
        };

        let attrs = Window::default_attributes()
            .with_title(request.title.as_str())
            .with_inner_size(PhysicalSize::new(
                request.resolution.width,
                request.resolution.height,
            ));
        match event_loop.create_window(attrs) {
            Ok(window) => self.window = Some(window),
            Err(e) => self.create_error = Some(e.to_string()),
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => self.events.push(BackendEvent::CloseRequested),
            WindowEvent::Resized(size) => self
                .events
                .push(BackendEvent::Resized(Resolution::new(size.width, size.height))),
            WindowEvent::Focused(false) => self.events.push(BackendEvent::FocusLost),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                if let PhysicalKey::Code(code) = event.physical_key {
                    if let Some(key) = map_key(code) {
                        self.keys.push((key, event.state));
                    }
                }
            }
            _ => {}
        }
    }
}

/// Translate a physical key into the runtime's key set
fn map_key(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowRight => Key::Right,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Escape => Key::Escape,
        KeyCode::Space => Key::Space,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab => Key::Tab,
        KeyCode::F1 => Key::F1,
        KeyCode::F11 => Key::F11,
        KeyCode::KeyA => Key::Char('a'),
        KeyCode::KeyB => Key::Char('b'),
        KeyCode::KeyC => Key::Char('c'),
        KeyCode::KeyD => Key::Char('d'),
        KeyCode::KeyE => Key::Char('e'),
        KeyCode::KeyF => Key::Char('f'),
        KeyCode::KeyG => Key::Char('g'),
        KeyCode::KeyH => Key::Char('h'),
        KeyCode::KeyI => Key::Char('i'),
        KeyCode::KeyJ => Key::Char('j'),
        KeyCode::KeyK => Key::Char('k'),
        KeyCode::KeyL => Key::Char('l'),
        KeyCode::KeyM => Key::Char('m'),
        KeyCode::KeyN => Key::Char('n'),
        KeyCode::KeyO => Key::Char('o'),
        KeyCode::KeyP => Key::Char('p'),
        KeyCode::KeyQ => Key::Char('q'),
        KeyCode::KeyR => Key::Char('r'),
        KeyCode::KeyS => Key::Char('s'),
        KeyCode::KeyT => Key::Char('t'),
        KeyCode::KeyU => Key::Char('u'),
        KeyCode::KeyV => Key::Char('v'),
        KeyCode::KeyW => Key::Char('w'),
        KeyCode::KeyX => Key::Char('x'),
        KeyCode::KeyY => Key::Char('y'),
        KeyCode::KeyZ => Key::Char('z'),
        KeyCode::Digit0 => Key::Char('0'),
        KeyCode::Digit1 => Key::Char('1'),
        KeyCode::Digit2 => Key::Char('2'),
        KeyCode::Digit3 => Key::Char('3'),
        KeyCode::Digit4 => Key::Char('4'),
        KeyCode::Digit5 => Key::Char('5'),
        KeyCode::Digit6 => Key::Char('6'),
        KeyCode::Digit7 => Key::Char('7'),
        KeyCode::Digit8 => Key::Char('8'),
        KeyCode::Digit9 => Key::Char('9'),
        _ => return None,
    };
    Some(key)
}

/// A winit window. Frames are handed to the rendering collaborator through
/// `present`; this backend only schedules the redraw.
pub struct WinitBackend {
    event_loop: EventLoop<()>,
    handler: WindowHandler,
}

impl WinitBackend {
    /// Create the platform event loop. Only one may exist per process.
    pub fn new() -> Result<Self> {
        let event_loop = EventLoop::new().map_err(|e| SprigError::Surface(e.to_string()))?;
        Ok(Self {
            event_loop,
            handler: WindowHandler::default(),
        })
    }

    fn pump(&mut self, timeout: Option<Duration>) -> bool {
        matches!(
            self.event_loop.pump_app_events(timeout, &mut self.handler),
            PumpStatus::Continue
        )
    }

    fn window(&self) -> Result<&Window> {
        self.handler
            .window
            .as_ref()
            .ok_or_else(|| SprigError::Surface("no window".to_string()))
    }

    /// The monitor's mode with this size and the highest refresh rate
    fn video_mode(&self, resolution: Resolution) -> Option<VideoModeHandle> {
        let monitor = self.handler.window.as_ref()?.current_monitor()?;
        monitor
            .video_modes()
            .filter(|mode| {
                let size = mode.size();
                size.width == resolution.width && size.height == resolution.height
            })
            .max_by_key(|mode| mode.refresh_rate_millihertz())
    }
}

impl DisplaySurface for WinitBackend {
    fn fullscreen_modes(&self) -> Vec<Resolution> {
        let Some(monitor) = self
            .handler
            .window
            .as_ref()
            .and_then(|window| window.current_monitor())
        else {
            return Vec::new();
        };
        let mut modes: Vec<Resolution> = monitor
            .video_modes()
            .map(|mode| Resolution::new(mode.size().width, mode.size().height))
            .collect();
        modes.sort_by_key(|r| (r.width, r.height));
        modes.dedup();
        modes
    }

    fn apply_mode(&mut self, resolution: Resolution, mode: DisplayMode) -> Result<()> {
        match mode {
            DisplayMode::Fullscreen => {
                let video_mode = self.video_mode(resolution).ok_or_else(|| {
                    SprigError::DisplayMode(format!(
                        "monitor has no {}x{} mode",
                        resolution.width, resolution.height
                    ))
                })?;
                self.window()?
                    .set_fullscreen(Some(Fullscreen::Exclusive(video_mode)));
            }
            DisplayMode::Windowed => {
                let window = self.window()?;
                window.set_fullscreen(None);
                let _ = window
                    .request_inner_size(PhysicalSize::new(resolution.width, resolution.height));
            }
        }
        log::debug!(
            "window mode: {}x{} {:?}",
            resolution.width,
            resolution.height,
            mode
        );
        Ok(())
    }
}

impl Backend for WinitBackend {
    fn acquire_surface(&mut self, request: &SurfaceRequest) -> Result<()> {
        if request.accelerated {
            return Err(SprigError::Surface(
                "winit backend has no accelerated rendering path".to_string(),
            ));
        }
        if self.handler.window.is_some() {
            return Err(SprigError::Surface("window already open".to_string()));
        }

        self.handler.pending = Some(request.clone());
        for _ in 0..MAX_CREATE_PUMPS {
            if !self.pump(Some(Duration::from_millis(10))) {
                return Err(SprigError::Surface("event loop exited".to_string()));
            }
            if let Some(e) = self.handler.create_error.take() {
                return Err(SprigError::Surface(e));
            }
            if self.handler.window.is_some() {
                log::info!(
                    "window opened: \"{}\" {}x{}",
                    request.title,
                    request.resolution.width,
                    request.resolution.height
                );
                return Ok(());
            }
        }
        self.handler.pending = None;
        Err(SprigError::Surface("platform never resumed".to_string()))
    }

    fn release_surface(&mut self) {
        if self.handler.window.take().is_some() {
            // Let the platform process the close before the process exits
            self.pump(Some(Duration::ZERO));
            log::info!("window closed");
        }
    }

    fn poll_events(&mut self, input: &mut InputState) -> Vec<BackendEvent> {
        if !self.pump(Some(Duration::ZERO)) {
            self.handler.events.push(BackendEvent::CloseRequested);
        }
        for (key, state) in self.handler.keys.drain(..) {
            match state {
                ElementState::Pressed => input.process_key_down(key),
                ElementState::Released => input.process_key_up(key),
            }
        }
        std::mem::take(&mut self.handler.events)
    }

    fn present(&mut self, batch: &SpriteBatch) -> Result<()> {
        let window = self.window()?;
        window.pre_present_notify();
        window.request_redraw();
        log::trace!("presented {} draw commands", batch.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(KeyCode::ArrowUp), Some(Key::Up));
        assert_eq!(map_key(KeyCode::NumpadEnter), Some(Key::Enter));
        assert_eq!(map_key(KeyCode::KeyQ), Some(Key::Char('q')));
        assert_eq!(map_key(KeyCode::Digit7), Some(Key::Char('7')));
        assert_eq!(map_key(KeyCode::CapsLock), None);
    }
}
