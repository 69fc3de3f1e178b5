//! Draw-call recording

use sprig_core::{Color, TextAlign, Vec2};
use std::sync::Arc;

use crate::font::Font;
use crate::texture::Texture;

/// One recorded draw call
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Text {
        font: Arc<Font>,
        text: String,
        /// Top-left of the run after alignment has been applied
        position: Vec2,
        color: Color,
    },
    Sprite {
        texture: Arc<Texture>,
        position: Vec2,
        color: Color,
        scale: f32,
    },
}

/// Collects draw calls between `begin` and `end` for one frame.
///
/// The batch also carries the current viewport size so draw code can lay out
/// against the surface without reaching for the display controller.
#[derive(Debug)]
pub struct SpriteBatch {
    commands: Vec<DrawCommand>,
    viewport: (u32, u32),
    drawing: bool,
    frames: u64,
}

impl SpriteBatch {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            commands: Vec::new(),
            viewport: (width, height),
            drawing: false,
            frames: 0,
        }
    }

    /// Start a new frame, discarding the previous frame's commands
    pub fn begin(&mut self) {
        self.commands.clear();
        self.drawing = true;
    }

    /// Close the frame; recorded commands stay readable until the next `begin`
    pub fn end(&mut self) {
        if self.drawing {
            self.drawing = false;
            self.frames += 1;
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Record a single line of text anchored at `position`
    pub fn draw_string(
        &mut self,
        font: &Arc<Font>,
        text: &str,
        position: Vec2,
        color: Color,
        align: TextAlign,
    ) {
        if text.is_empty() {
            return;
        }
        let x = position.x + align.offset(font.measure(text));
        self.commands.push(DrawCommand::Text {
            font: Arc::clone(font),
            text: text.to_string(),
            position: Vec2::new(x, position.y),
            color,
        });
    }

    /// Record a sprite with its top-left corner at `position`
    pub fn draw_texture(&mut self, texture: &Arc<Texture>, position: Vec2, color: Color, scale: f32) {
        self.commands.push(DrawCommand::Sprite {
            texture: Arc::clone(texture),
            position,
            color,
            scale,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Number of frames closed with `end`
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}
