//! Resource manager: path resolution, decoding, caching

use sprig_core::{Result, SprigError};
use sprig_render::{Font, FontDescriptor, Texture};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::sound::Sound;

/// Loads and caches game resources from a content directory
#[derive(Debug, Default)]
pub struct ResourceManager {
    /// Root all relative resource paths resolve against
    content_root: Option<PathBuf>,
    fonts: HashMap<String, Arc<Font>>,
    textures: HashMap<String, Arc<Texture>>,
    sounds: HashMap<String, Arc<Sound>>,
}

impl ResourceManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content directory. Switching to a different root drops every
    /// cached resource, since cached keys are relative to the old root.
    pub fn set_content_path<P: AsRef<Path>>(&mut self, path: P) {
        let path = path.as_ref().to_path_buf();
        if self.content_root.as_ref() == Some(&path) {
            return;
        }
        if self.resource_count() > 0 {
            log::debug!(
                "content root changed to {}, dropping {} cached resource(s)",
                path.display(),
                self.resource_count()
            );
            self.unload_all();
        }
        self.content_root = Some(path);
    }

    pub fn content_path(&self) -> Option<&Path> {
        self.content_root.as_deref()
    }

    /// Resolve a resource path against the content root
    pub fn resolve(&self, relative: &str) -> Result<PathBuf> {
        let root = self.content_root.as_ref().ok_or_else(|| {
            SprigError::Content(format!(
                "cannot load '{relative}': content directory has not been set"
            ))
        })?;
        if Path::new(relative).is_absolute() {
            return Err(SprigError::Content(format!(
                "resource path '{relative}' must be relative to the content directory"
            )));
        }
        Ok(root.join(relative))
    }

    /// Load (or fetch from cache) an image, decoded to RGBA8
    pub fn load_texture(&mut self, relative: &str) -> Result<Arc<Texture>> {
        if let Some(texture) = self.textures.get(relative) {
            return Ok(Arc::clone(texture));
        }

        let path = self.resolve(relative)?;
        let image = image::open(&path).map_err(|e| {
            SprigError::Content(format!("failed to decode image {}: {}", path.display(), e))
        })?;
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        let texture = Texture::from_rgba8(relative, width, height, rgba.into_raw())
            .ok_or_else(|| {
                SprigError::Content(format!("image {} has an invalid pixel buffer", path.display()))
            })?;

        log::debug!("loaded texture {relative} ({width}x{height})");
        let texture = Arc::new(texture);
        self.textures
            .insert(relative.to_string(), Arc::clone(&texture));
        Ok(texture)
    }

    /// Load (or fetch from cache) a bitmap font from its `.font.toml` descriptor.
    /// The glyph sheet, if named, is loaded through the texture cache.
    pub fn load_font(&mut self, relative: &str) -> Result<Arc<Font>> {
        if let Some(font) = self.fonts.get(relative) {
            return Ok(Arc::clone(font));
        }

        let path = self.resolve(relative)?;
        let content = fs::read_to_string(&path).map_err(|e| {
            SprigError::Content(format!("failed to read font {}: {}", path.display(), e))
        })?;
        let desc: FontDescriptor = toml::from_str(&content).map_err(|e| {
            SprigError::Content(format!("failed to parse font {}: {}", path.display(), e))
        })?;
        if desc.glyph_width == 0 || desc.glyph_height == 0 {
            return Err(SprigError::Content(format!(
                "font {} has a zero-sized glyph cell",
                path.display()
            )));
        }

        let sheet = desc
            .texture
            .as_deref()
            .map(|texture| self.load_texture(texture))
            .transpose()?;

        log::debug!(
            "loaded font {relative} ({}x{} cells)",
            desc.glyph_width,
            desc.glyph_height
        );
        let font = Arc::new(Font::from_descriptor(relative, &desc, sheet));
        self.fonts.insert(relative.to_string(), Arc::clone(&font));
        Ok(font)
    }

    /// Load (or fetch from cache) the raw bytes of an audio clip
    pub fn load_sound(&mut self, relative: &str) -> Result<Arc<Sound>> {
        if let Some(sound) = self.sounds.get(relative) {
            return Ok(Arc::clone(sound));
        }

        let path = self.resolve(relative)?;
        let bytes = fs::read(&path).map_err(|e| {
            SprigError::Content(format!("failed to read sound {}: {}", path.display(), e))
        })?;

        log::debug!("loaded sound {relative} ({} bytes)", bytes.len());
        let sound = Arc::new(Sound::new(relative, bytes));
        self.sounds.insert(relative.to_string(), Arc::clone(&sound));
        Ok(sound)
    }

    /// Register a font built in code under `name`, replacing any cached entry
    pub fn insert_font(&mut self, name: &str, font: Font) -> Arc<Font> {
        let font = Arc::new(font);
        self.fonts.insert(name.to_string(), Arc::clone(&font));
        font
    }

    pub fn font(&self, name: &str) -> Option<Arc<Font>> {
        self.fonts.get(name).cloned()
    }

    pub fn texture(&self, name: &str) -> Option<Arc<Texture>> {
        self.textures.get(name).cloned()
    }

    pub fn sound(&self, name: &str) -> Option<Arc<Sound>> {
        self.sounds.get(name).cloned()
    }

    /// Total cached fonts, textures and sounds
    pub fn resource_count(&self) -> usize {
        self.fonts.len() + self.textures.len() + self.sounds.len()
    }

    /// Drop every cached resource. Handles already given out stay valid.
    pub fn unload_all(&mut self) {
        self.fonts.clear();
        self.textures.clear();
        self.sounds.clear();
    }
}
