//! Sprig Asset - resource loading under a content root
//!
//! The [`ResourceManager`] resolves paths against a content directory that is
//! configured once at startup, decodes fonts, textures and sounds, and caches
//! each by its relative path so repeated loads share one instance.

mod manager;
mod sound;

pub use manager::ResourceManager;
pub use sound::Sound;
