//! Sprig Runtime - game loop, display control and subsystem orchestration
//!
//! - `GameHost` — runs a [`Game`] on a [`Backend`] through its lifecycle
//! - `FrameClock` — fixed-tick admission, frame limiting and fps measurement
//! - `DisplayController` — resolution, title and fullscreen toggle with rollback
//! - `Subsystems` — resources, screens, particles and sprite batch, built in
//!   order and torn down in reverse
//! - `HeadlessBackend` — windowless backend for tests and simulation

mod backend;
mod clock;
mod config;
mod display;
mod game;
mod headless;
mod host;
mod subsystems;

pub use backend::{Backend, BackendEvent, DisplaySurface, SurfaceRequest};
pub use clock::{
    FrameClock, ManualTimeSource, SystemTimeSource, TimeSource, DEFAULT_MAX_CATCH_UP_TICKS,
};
pub use config::GameConfig;
pub use display::{DisplayController, DisplayMode, Resolution, ScreenMetrics};
pub use game::{Game, GameContext};
pub use headless::{CallLog, HeadlessBackend};
pub use host::{GameHost, HostState};
pub use subsystems::{Subsystems, CREATION_ORDER};
