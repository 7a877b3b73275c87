//! A group of particles spawned together from one trigger

use crate::particle::Particle;
use crate::rng::ParticleRng;
use confetti_core::{ParticleConfig, Vector};
use confetti_render::Surface;

#[derive(Debug, Clone)]
pub struct Burst {
    pub origin: Vector,
    particles: Vec<Particle>,
    /// Effective config at spawn time (after any trigger override)
    spawn_config: ParticleConfig,
}

impl Burst {
    /// Spawn `config.particle_count` particles at `origin`.
    /// The config is read once here; later edits never reach these particles'
    /// spawn-time properties.
    pub fn spawn(origin: Vector, config: &ParticleConfig, rng: &mut ParticleRng) -> Self {
        let particles = (0..config.particle_count)
            .map(|_| Particle::new(origin, config, rng))
            .collect();

        Self {
            origin,
            particles,
            spawn_config: config.clone(),
        }
    }

    /// Advance every particle, then drop those that left the screen.
    /// Survivors keep their order. Returns how many were culled.
    pub fn update(
        &mut self,
        dt: f32,
        config: &ParticleConfig,
        viewport_height: f32,
        rng: &mut ParticleRng,
    ) -> usize {
        let before = self.particles.len();
        self.particles.retain_mut(|p| {
            p.update(dt, config, rng);
            !p.is_off_screen(viewport_height)
        });
        before - self.particles.len()
    }

    pub fn draw<S: Surface + ?Sized>(&self, mut surface: Option<&mut S>) {
        for particle in &self.particles {
            particle.draw(surface.as_deref_mut());
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn spawn_config(&self) -> &ParticleConfig {
        &self.spawn_config
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Exhausted bursts are removed by the controller
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
