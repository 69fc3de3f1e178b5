//! Decoded RGBA8 images

/// A decoded image in tightly packed RGBA8
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pixels: Vec<u8>,
}

impl Texture {
    /// Wrap already-decoded RGBA8 pixels. Returns `None` if the buffer length
    /// does not match `width * height * 4`.
    pub fn from_rgba8(
        name: impl Into<String>,
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    ) -> Option<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return None;
        }
        Some(Self {
            name: name.into(),
            width,
            height,
            pixels,
        })
    }

    /// A single opaque white pixel, used where no image is bound
    pub fn white_pixel() -> Self {
        Self {
            name: "white".to_string(),
            width: 1,
            height: 1,
            pixels: vec![255; 4],
        }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_mismatched_buffer() {
        assert!(Texture::from_rgba8("bad", 2, 2, vec![0; 15]).is_none());
        let tex = Texture::from_rgba8("ok", 2, 2, vec![0; 16]).unwrap();
        assert_eq!(tex.pixels().len(), 16);
    }
}
