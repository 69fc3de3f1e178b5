//! Sprig Player — windowed runner
//!
//! This crate provides the winit-backed [`WinitBackend`] and the
//! [`DemoGame`] the `sprig-player` binary runs.

mod demo;
mod winit_backend;

pub use demo::{DemoGame, BUILTIN_FONT};
pub use winit_backend::WinitBackend;
