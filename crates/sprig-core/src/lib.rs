//! Sprig Core - Foundational types for the Sprig 2D runtime
//!
//! This crate provides the types every other Sprig crate depends on:
//! - `SprigError` / `Result` - error taxonomy shared by the runtime
//! - `Color`, `Vec2`, `TextAlign` - drawing primitives
//! - `GameTime` - timing values handed to update hooks
//! - `InputState`, `Key` - per-frame keyboard state

mod error;
mod input;
mod time;
mod types;

pub use error::{Result, SprigError};
pub use input::{InputState, Key};
pub use time::GameTime;
pub use types::{Color, TextAlign, Vec2};
