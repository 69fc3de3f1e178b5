//! Sprig Render - batched 2D draw submission
//!
//! Screens, menu items and particles record draw calls into a
//! [`SpriteBatch`]; the backend consumes the recorded commands when the frame
//! is presented. Rasterisation itself belongs to the backend.

mod batch;
mod font;
mod texture;

pub use batch::{DrawCommand, SpriteBatch};
pub use font::{Font, FontDescriptor};
pub use texture::Texture;
