//! One-shot radial burst emitter

use sprig_core::{Color, GameTime, Vec2};
use sprig_render::{SpriteBatch, Texture};
use std::sync::Arc;

use crate::rand::ParticleRng;
use crate::ParticleEffect;

/// Parameters for a burst
#[derive(Debug, Clone)]
pub struct BurstConfig {
    pub count: usize,
    pub lifetime_min: f32,
    pub lifetime_max: f32,
    pub speed_min: f32,
    pub speed_max: f32,
    /// Pixels per second squared, +y is down
    pub gravity: Vec2,
    pub color_start: Color,
    pub color_end: Color,
    pub scale: f32,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            count: 32,
            lifetime_min: 0.4,
            lifetime_max: 0.9,
            speed_min: 40.0,
            speed_max: 160.0,
            gravity: Vec2::new(0.0, 200.0),
            color_start: Color::WHITE,
            color_end: Color::TRANSPARENT,
            scale: 1.0,
        }
    }
}

#[derive(Debug, Clone)]
struct Particle {
    position: Vec2,
    velocity: Vec2,
    age: f32,
    lifetime: f32,
}

impl Particle {
    fn age_ratio(&self) -> f32 {
        if self.lifetime <= 0.0 {
            1.0
        } else {
            (self.age / self.lifetime).min(1.0)
        }
    }
}

/// Spawns every particle at once from a point and lets them fly out
pub struct BurstEffect {
    config: BurstConfig,
    texture: Arc<Texture>,
    particles: Vec<Particle>,
}

impl BurstEffect {
    pub fn new(origin: Vec2, config: BurstConfig, texture: Arc<Texture>, seed: u32) -> Self {
        let mut rng = ParticleRng::new(seed);
        let particles = (0..config.count)
            .map(|_| {
                let direction = rng.unit_circle();
                let speed = rng.range(config.speed_min, config.speed_max);
                Particle {
                    position: origin,
                    velocity: direction * speed,
                    age: 0.0,
                    lifetime: rng.range(config.lifetime_min, config.lifetime_max),
                }
            })
            .collect();

        Self {
            config,
            texture,
            particles,
        }
    }

    pub fn alive_count(&self) -> usize {
        self.particles.len()
    }
}

impl ParticleEffect for BurstEffect {
    fn update(&mut self, time: &GameTime) {
        let dt = time.elapsed_f32();
        let gravity = self.config.gravity;

        let mut i = 0;
        while i < self.particles.len() {
            let p = &mut self.particles[i];
            p.age += dt;
            if p.age >= p.lifetime {
                // Swap-remove: order does not matter for drawing
                self.particles.swap_remove(i);
                continue;
            }
            p.velocity += gravity * dt;
            p.position += p.velocity * dt;
            i += 1;
        }
    }

    fn draw(&self, batch: &mut SpriteBatch) {
        for p in &self.particles {
            let color = self
                .config
                .color_start
                .lerp(self.config.color_end, p.age_ratio());
            batch.draw_texture(&self.texture, p.position, color, self.config.scale);
        }
    }

    fn is_finished(&self) -> bool {
        self.particles.is_empty()
    }
}
