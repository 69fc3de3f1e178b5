//! The subsystems a game host owns

use sprig_asset::ResourceManager;
use sprig_particles::ParticleManager;
use sprig_render::SpriteBatch;
use sprig_screens::ScreenManager;
use std::path::Path;

use crate::display::Resolution;

/// Subsystem names in creation order. Teardown walks this list backwards.
pub const CREATION_ORDER: [&str; 4] = ["resources", "screens", "particles", "batch"];

/// One instance of each subsystem, created together in dependency order:
/// resources first (others load fonts and placeholders through it), then
/// screens, particles and finally the sprite batch.
pub struct Subsystems {
    pub resources: ResourceManager,
    pub screens: ScreenManager,
    pub particles: ParticleManager,
    pub batch: SpriteBatch,
}

impl Subsystems {
    pub fn initialize(content_directory: &Path, viewport: Resolution) -> Self {
        Self::initialize_traced(content_directory, viewport, |_| {})
    }

    /// `initialize`, reporting each subsystem's name once it exists
    pub fn initialize_traced(
        content_directory: &Path,
        viewport: Resolution,
        mut created: impl FnMut(&'static str),
    ) -> Self {
        let mut resources = ResourceManager::new();
        resources.set_content_path(content_directory);
        log::debug!(
            "resource manager ready (content: {})",
            content_directory.display()
        );
        created(CREATION_ORDER[0]);

        let screens = ScreenManager::new();
        log::debug!("screen manager ready");
        created(CREATION_ORDER[1]);

        let particles = ParticleManager::new();
        log::debug!("particle manager ready");
        created(CREATION_ORDER[2]);

        let batch = SpriteBatch::new(viewport.width, viewport.height);
        log::debug!(
            "sprite batch ready ({}x{})",
            viewport.width,
            viewport.height
        );
        created(CREATION_ORDER[3]);

        Self {
            resources,
            screens,
            particles,
            batch,
        }
    }

    /// Tear down in reverse creation order
    pub fn shutdown(self) {
        self.shutdown_traced(|_| {});
    }

    /// `shutdown`, reporting each subsystem's name once it is released
    pub fn shutdown_traced(self, mut released: impl FnMut(&'static str)) {
        let Self {
            mut resources,
            mut screens,
            mut particles,
            batch,
        } = self;

        drop(batch);
        log::debug!("sprite batch released");
        released(CREATION_ORDER[3]);

        particles.clear();
        drop(particles);
        log::debug!("particle manager released");
        released(CREATION_ORDER[2]);

        screens.unload_all();
        drop(screens);
        log::debug!("screen manager released");
        released(CREATION_ORDER[1]);

        resources.unload_all();
        drop(resources);
        log::debug!("resource manager released");
        released(CREATION_ORDER[0]);
    }
}
