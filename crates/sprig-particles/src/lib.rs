//! Sprig Particles - particle effect management
//!
//! The [`ParticleManager`] owns every live effect, ticks them with the
//! simulation, drops the ones that finish, and lets the rest record their
//! draw calls. [`BurstEffect`] is a small CPU emitter for one-shot bursts;
//! games can plug in their own simulations through [`ParticleEffect`].

pub mod burst;
pub mod rand;

use sprig_core::GameTime;
use sprig_render::SpriteBatch;

pub use burst::{BurstConfig, BurstEffect};

/// A running particle effect
pub trait ParticleEffect {
    /// Advance the simulation by one tick
    fn update(&mut self, time: &GameTime);

    /// Record draw calls for the current state
    fn draw(&self, batch: &mut SpriteBatch);

    /// Whether the effect has finished and can be dropped
    fn is_finished(&self) -> bool;
}

/// Owns and ticks all active particle effects
#[derive(Default)]
pub struct ParticleManager {
    effects: Vec<Box<dyn ParticleEffect>>,
}

impl ParticleManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking an effect
    pub fn add_effect(&mut self, effect: Box<dyn ParticleEffect>) {
        self.effects.push(effect);
    }

    /// Tick every effect, then drop the finished ones
    pub fn update(&mut self, time: &GameTime) {
        for effect in self.effects.iter_mut() {
            effect.update(time);
        }
        let before = self.effects.len();
        self.effects.retain(|e| !e.is_finished());
        let removed = before - self.effects.len();
        if removed > 0 {
            log::trace!("dropped {removed} finished particle effect(s)");
        }
    }

    pub fn draw(&self, batch: &mut SpriteBatch) {
        for effect in &self.effects {
            effect.draw(batch);
        }
    }

    pub fn effect_count(&self) -> usize {
        self.effects.len()
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_core::{Color, Vec2};
    use sprig_render::Texture;
    use std::sync::Arc;

    struct Countdown {
        ticks_left: u32,
        texture: Arc<Texture>,
    }

    impl ParticleEffect for Countdown {
        fn update(&mut self, _time: &GameTime) {
            self.ticks_left = self.ticks_left.saturating_sub(1);
        }

        fn draw(&self, batch: &mut SpriteBatch) {
            batch.draw_texture(&self.texture, Vec2::ZERO, Color::WHITE, 1.0);
        }

        fn is_finished(&self) -> bool {
            self.ticks_left == 0
        }
    }

    fn countdown(ticks_left: u32) -> Box<dyn ParticleEffect> {
        Box::new(Countdown {
            ticks_left,
            texture: Arc::new(Texture::white_pixel()),
        })
    }

    #[test]
    fn finished_effects_are_dropped() {
        let mut manager = ParticleManager::new();
        manager.add_effect(countdown(1));
        manager.add_effect(countdown(3));
        assert_eq!(manager.effect_count(), 2);

        let time = GameTime::new(1.0 / 60.0, 0.0, 0);
        manager.update(&time);
        assert_eq!(manager.effect_count(), 1);

        manager.update(&time);
        manager.update(&time);
        assert_eq!(manager.effect_count(), 0);
    }

    #[test]
    fn draw_visits_live_effects() {
        let mut manager = ParticleManager::new();
        manager.add_effect(countdown(5));
        manager.add_effect(countdown(5));

        let mut batch = SpriteBatch::new(320, 240);
        batch.begin();
        manager.draw(&mut batch);
        batch.end();
        assert_eq!(batch.len(), 2);
    }
}
