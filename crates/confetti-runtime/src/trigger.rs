//! Trigger events and the per-kind burst override policy

use confetti_core::{ConfigOverride, ParticleConfig, Vector};
use confetti_particles::ParticleRng;
use serde::{Deserialize, Serialize};

/// Fewest particles a click burst may have
pub const CLICK_MIN_COUNT: u32 = 15;
/// Fewest particles a keystroke burst may have
pub const KEYSTROKE_MIN_COUNT: u32 = 3;
/// Weakest explosion a keystroke burst may have
pub const KEYSTROKE_MIN_POWER: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerKind {
    Click,
    Keystroke,
}

impl TriggerKind {
    /// Per-burst parameters derived from `base`. `base` itself is never touched.
    pub fn override_for(&self, base: &ParticleConfig, rng: &mut ParticleRng) -> ConfigOverride {
        match self {
            TriggerKind::Click => {
                let count = (base.particle_count as f32 * (0.1 + rng.unit())).floor() as u32;
                ConfigOverride {
                    particle_count: Some(count.max(CLICK_MIN_COUNT)),
                    explosion_power: Some(base.explosion_power * (0.3 + rng.unit() * 0.6)),
                }
            }
            TriggerKind::Keystroke => ConfigOverride {
                particle_count: Some((base.particle_count / 12).max(KEYSTROKE_MIN_COUNT)),
                explosion_power: Some((base.explosion_power / 5.0).max(KEYSTROKE_MIN_POWER)),
            },
        }
    }
}

/// An interaction that should produce one burst
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerEvent {
    /// Burst center in surface pixels
    pub origin: Vector,
    pub kind: TriggerKind,
    /// The click landed on the designated target element
    pub on_target: bool,
}

impl TriggerEvent {
    pub fn click(origin: Vector) -> Self {
        Self {
            origin,
            kind: TriggerKind::Click,
            on_target: false,
        }
    }

    pub fn keystroke(origin: Vector) -> Self {
        Self {
            origin,
            kind: TriggerKind::Keystroke,
            on_target: false,
        }
    }

    pub fn on_target(mut self) -> Self {
        self.on_target = true;
        self
    }
}

/// What a handled trigger produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerOutcome {
    pub kind: TriggerKind,
    /// Index of the new burst in draw order
    pub burst_index: usize,
    pub particles: usize,
    /// The host should hide the clicked target (`destroy_target` is set)
    pub hide_target: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_override_bounds() {
        let mut rng = ParticleRng::new(21);
        let base = ParticleConfig::default();
        for _ in 0..1000 {
            let o = TriggerKind::Click.override_for(&base, &mut rng);
            let count = o.particle_count.unwrap();
            let power = o.explosion_power.unwrap();
            assert!(count >= CLICK_MIN_COUNT);
            // floor(75 * 1.1) at most
            assert!(count <= 82);
            assert!(power >= 0.3 * base.explosion_power - 1e-4);
            assert!(power <= 0.9 * base.explosion_power + 1e-4);
        }
    }

    #[test]
    fn click_floor_applies_to_small_counts() {
        let mut rng = ParticleRng::new(22);
        let base = ParticleConfig {
            particle_count: 5,
            ..Default::default()
        };
        let o = TriggerKind::Click.override_for(&base, &mut rng);
        assert_eq!(o.particle_count, Some(CLICK_MIN_COUNT));
    }

    #[test]
    fn keystroke_override_is_deterministic() {
        let mut rng = ParticleRng::new(23);
        let base = ParticleConfig::default();
        let o = TriggerKind::Keystroke.override_for(&base, &mut rng);
        assert_eq!(o.particle_count, Some(6));
        assert_eq!(o.explosion_power, Some(5.0));

        let weak = ParticleConfig {
            particle_count: 20,
            explosion_power: 10.0,
            ..Default::default()
        };
        let o = TriggerKind::Keystroke.override_for(&weak, &mut rng);
        assert_eq!(o.particle_count, Some(KEYSTROKE_MIN_COUNT));
        assert_eq!(o.explosion_power, Some(KEYSTROKE_MIN_POWER));
    }
}
