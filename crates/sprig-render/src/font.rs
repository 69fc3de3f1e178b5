//! Fixed-cell bitmap fonts

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::texture::Texture;

/// On-disk description of a bitmap font (a `.font.toml` file).
///
/// ```toml
/// texture = "fonts/mono.png"
/// glyph_width = 8
/// glyph_height = 16
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontDescriptor {
    /// Glyph sheet, relative to the content directory
    #[serde(default)]
    pub texture: Option<String>,
    pub glyph_width: u32,
    pub glyph_height: u32,
    /// First character present in the sheet
    #[serde(default = "default_first_char")]
    pub first_char: char,
    /// Extra pixels between glyphs
    #[serde(default)]
    pub spacing: u32,
}

fn default_first_char() -> char {
    ' '
}

/// A loaded bitmap font. Every glyph occupies the same cell, which keeps
/// text measurement exact without a shaping step.
#[derive(Debug, Clone)]
pub struct Font {
    pub name: String,
    pub glyph_width: u32,
    pub glyph_height: u32,
    pub first_char: char,
    pub spacing: u32,
    pub sheet: Option<Arc<Texture>>,
}

impl Font {
    pub fn new(name: impl Into<String>, glyph_width: u32, glyph_height: u32) -> Self {
        Self {
            name: name.into(),
            glyph_width,
            glyph_height,
            first_char: default_first_char(),
            spacing: 0,
            sheet: None,
        }
    }

    pub fn from_descriptor(
        name: impl Into<String>,
        desc: &FontDescriptor,
        sheet: Option<Arc<Texture>>,
    ) -> Self {
        Self {
            name: name.into(),
            glyph_width: desc.glyph_width,
            glyph_height: desc.glyph_height,
            first_char: desc.first_char,
            spacing: desc.spacing,
            sheet,
        }
    }

    /// Pixel width of a single line of `text`
    pub fn measure(&self, text: &str) -> f32 {
        let count = text.chars().count() as u32;
        if count == 0 {
            return 0.0;
        }
        (count * self.glyph_width + (count - 1) * self.spacing) as f32
    }

    pub fn line_height(&self) -> f32 {
        self.glyph_height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_includes_spacing() {
        let mut font = Font::new("mono", 8, 16);
        assert_eq!(font.measure(""), 0.0);
        assert_eq!(font.measure("abc"), 24.0);

        font.spacing = 2;
        assert_eq!(font.measure("abc"), 28.0);
    }

    #[test]
    fn test_descriptor_defaults() {
        let desc: FontDescriptor = toml::from_str("glyph_width = 8\nglyph_height = 12\n").unwrap();
        assert_eq!(desc.first_char, ' ');
        assert_eq!(desc.spacing, 0);
        assert!(desc.texture.is_none());
    }
}
