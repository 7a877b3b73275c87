//! A single confetti piece
//!
//! Velocity, rotation and fade advance once per tick; only gravity and
//! turbulence are scaled by `dt`. On-screen speed therefore depends on the
//! frame rate, which is how the effect has always looked.

use crate::rng::ParticleRng;
use confetti_core::{ParticleConfig, Vector};
use confetti_render::{Screen, Surface};

/// Velocity retained per tick
pub const DRAG: f32 = 0.98;
/// Peak lateral acceleration from turbulence, per second
pub const TURBULENCE: f32 = 25.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub size: Vector,
    /// Top-left corner of the unrotated rectangle
    pub position: Vector,
    pub velocity: Vector,
    /// Degrees, clockwise
    pub rotation: f32,
    /// Degrees per tick
    pub rotation_speed: f32,
    pub hue: f32,
    /// Percent. Goes negative once faded out; clamped when drawn.
    pub opacity: f32,
    pub lifetime: f32,
}

impl Particle {
    /// Spawn a particle centered on `origin`
    pub fn new(origin: Vector, config: &ParticleConfig, rng: &mut ParticleRng) -> Self {
        let s = config.particle_size;
        let size = Vector::new(rng.range(4.0 * s, 20.0 * s), rng.range(4.0 * s, 8.0 * s));

        let position = origin - size.scale(0.5);
        let velocity = random_velocity(config.explosion_power, rng);

        Self {
            size,
            position,
            velocity,
            rotation: rng.unit() * 360.0,
            rotation_speed: 10.0 * (rng.unit() - 0.5),
            hue: rng.unit() * 360.0,
            opacity: 100.0,
            lifetime: rng.range(0.25, 1.25),
        }
    }

    /// Advance one tick. `dt` is in seconds.
    pub fn update(&mut self, dt: f32, config: &ParticleConfig, rng: &mut ParticleRng) {
        // Taller pieces are heavier and fall faster
        self.velocity.y += config.gravity * (self.size.y / (10.0 * config.particle_size)) * dt;
        self.velocity.x += TURBULENCE * (rng.unit() - 0.5) * dt;

        self.velocity = self.velocity.scale(DRAG);
        self.position = self.position + self.velocity;
        self.rotation += self.rotation_speed;

        if config.fade {
            self.opacity -= self.lifetime * config.fade_speed;
        }
    }

    /// Loose cull bound well below the viewport. Compares the vertical
    /// position against the horizontal size on purpose.
    pub fn is_off_screen(&self, viewport_height: f32) -> bool {
        self.position.y - 2.0 * self.size.x > 2.0 * viewport_height
    }

    /// Opacity clamped into the drawable range [0, 100]
    pub fn visible_opacity(&self) -> f32 {
        self.opacity.clamp(0.0, 100.0)
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: Option<&mut S>) {
        Screen::draw_rectangle(
            surface,
            self.position,
            self.size,
            self.rotation,
            self.hue,
            self.visible_opacity(),
        );
    }
}

/// Upward-biased direction, normalized, then each axis stretched by its own
/// independent magnitude draw.
fn random_velocity(explosion_power: f32, rng: &mut ParticleRng) -> Vector {
    let mut vx = rng.unit() - 0.5;
    let mut vy = rng.unit() - 0.7;

    let len = (vx * vx + vy * vy).sqrt();
    if len > 0.0 {
        vx /= len;
        vy /= len;
    }

    Vector::new(
        vx * (rng.unit() * explosion_power),
        vy * (rng.unit() * explosion_power),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use confetti_render::RotatedRect;

    fn still_particle() -> Particle {
        Particle {
            size: Vector::new(10.0, 5.0),
            position: Vector::new(0.0, 0.0),
            velocity: Vector::new(2.0, -4.0),
            rotation: 0.0,
            rotation_speed: 3.0,
            hue: 120.0,
            opacity: 100.0,
            lifetime: 0.5,
        }
    }

    #[derive(Default)]
    struct Recorder(Vec<RotatedRect>);

    impl Surface for Recorder {
        fn size(&self) -> (u32, u32) {
            (800, 600)
        }
        fn clear(&mut self) {
            self.0.clear();
        }
        fn fill_rect(&mut self, rect: &RotatedRect) {
            self.0.push(*rect);
        }
    }

    #[test]
    fn size_bounds_scale_with_particle_size() {
        let mut rng = ParticleRng::new(1);
        for s in [0.25_f32, 1.0, 2.5] {
            let config = ParticleConfig {
                particle_size: s,
                ..Default::default()
            };
            for _ in 0..500 {
                let p = Particle::new(Vector::new(50.0, 50.0), &config, &mut rng);
                assert!(p.size.x >= 4.0 * s && p.size.x < 20.0 * s);
                assert!(p.size.y >= 4.0 * s && p.size.y < 8.0 * s);
            }
        }
    }

    #[test]
    fn spawns_centered_on_origin() {
        let mut rng = ParticleRng::new(2);
        let config = ParticleConfig::default();
        let origin = Vector::new(100.0, 100.0);
        for _ in 0..200 {
            let p = Particle::new(origin, &config, &mut rng);
            let center = p.position + p.size.scale(0.5);
            assert!((center.x - origin.x).abs() < 1e-4);
            assert!((center.y - origin.y).abs() < 1e-4);
        }
    }

    #[test]
    fn initial_state_ranges() {
        let mut rng = ParticleRng::new(3);
        let config = ParticleConfig::default();
        for _ in 0..500 {
            let p = Particle::new(Vector::ZERO, &config, &mut rng);
            assert!((0.0..360.0).contains(&p.rotation));
            assert!(p.rotation_speed >= -5.0 && p.rotation_speed < 5.0);
            assert!((0.0..360.0).contains(&p.hue));
            assert_eq!(p.opacity, 100.0);
            assert!(p.lifetime >= 0.25 && p.lifetime < 1.25);
            // Each axis is at most unit-direction times power
            assert!(p.velocity.x.abs() <= config.explosion_power);
            assert!(p.velocity.y.abs() <= config.explosion_power);
        }
    }

    #[test]
    fn velocity_is_biased_upward() {
        let mut rng = ParticleRng::new(4);
        let config = ParticleConfig::default();
        let upward = (0..2000)
            .map(|_| Particle::new(Vector::ZERO, &config, &mut rng))
            .filter(|p| p.velocity.y < 0.0)
            .count();
        assert!(upward > 1200, "only {upward} of 2000 went up");
    }

    #[test]
    fn zero_dt_update_applies_per_tick_terms_only() {
        let mut rng = ParticleRng::new(5);
        let config = ParticleConfig::default();
        let mut p = still_particle();
        p.update(0.0, &config, &mut rng);

        assert!((p.velocity.x - 2.0 * DRAG).abs() < 1e-6);
        assert!((p.velocity.y + 4.0 * DRAG).abs() < 1e-6);
        assert!((p.position.x - 2.0 * DRAG).abs() < 1e-6);
        assert!((p.position.y + 4.0 * DRAG).abs() < 1e-6);
        assert_eq!(p.rotation, 3.0);
        assert_eq!(p.opacity, 100.0);
    }

    #[test]
    fn gravity_scales_with_height() {
        let mut rng = ParticleRng::new(6);
        let config = ParticleConfig {
            gravity: 10.0,
            particle_size: 1.0,
            ..Default::default()
        };
        let mut p = still_particle();
        p.velocity = Vector::ZERO;
        p.update(1.0, &config, &mut rng);
        // 10 * (5 / 10) * 1s, then drag
        assert!((p.velocity.y - 5.0 * DRAG).abs() < 1e-5);
        assert!(p.velocity.x.abs() <= TURBULENCE * 0.5 * DRAG);
    }

    #[test]
    fn fade_is_per_tick() {
        let mut rng = ParticleRng::new(7);
        let config = ParticleConfig {
            fade: true,
            fade_speed: 2.0,
            ..Default::default()
        };
        let mut p = still_particle();
        p.update(0.016, &config, &mut rng);
        p.update(0.5, &config, &mut rng);
        assert!((p.opacity - 98.0).abs() < 1e-5);
    }

    #[test]
    fn off_screen_boundary() {
        let mut p = still_particle();
        let viewport_height = 300.0;
        // position.y - 2 * size.x == 2 * viewport_height
        p.position.y = 2.0 * viewport_height + 2.0 * p.size.x;
        assert!(!p.is_off_screen(viewport_height));
        p.position.y += 0.01;
        assert!(p.is_off_screen(viewport_height));
    }

    #[test]
    fn draw_clamps_negative_opacity() {
        let mut p = still_particle();
        let mut rec = Recorder::default();

        p.draw(Some(&mut rec));
        assert_eq!(rec.0.len(), 1);
        assert_eq!(rec.0[0].color.a, 1.0);
        assert_eq!(rec.0[0].center, Vector::new(5.0, 2.5));

        p.opacity = -30.0;
        assert_eq!(p.visible_opacity(), 0.0);
        rec.clear();
        p.draw(Some(&mut rec));
        assert!(rec.0.is_empty());
    }
}
