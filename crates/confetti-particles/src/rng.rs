//! Uniform sampling source for particle construction and update

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct ParticleRng {
    inner: StdRng,
}

impl ParticleRng {
    /// Seeded generator, reproducible across runs
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// Returns a float in [0, 1)
    pub fn unit(&mut self) -> f32 {
        self.inner.gen::<f32>()
    }

    /// Returns a float in [min, max)
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        scale_unit(self.unit(), min, max)
    }
}

/// Maps `u` in [0, 1) onto [min, max). `min + u * (max - min)` can round up
/// to `max` near the top of the unit range, so that case is pulled back to
/// the largest float below `max`.
fn scale_unit(u: f32, min: f32, max: f32) -> f32 {
    let v = min + u * (max - min);
    if v < max {
        v
    } else {
        next_down(max).max(min)
    }
}

fn next_down(x: f32) -> f32 {
    if x > 0.0 {
        f32::from_bits(x.to_bits() - 1)
    } else if x == 0.0 {
        -f32::from_bits(1)
    } else {
        f32::from_bits(x.to_bits() + 1)
    }
}

impl Default for ParticleRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_bounds() {
        let mut rng = ParticleRng::new(42);
        for _ in 0..1000 {
            let v = rng.unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn range_bounds() {
        let mut rng = ParticleRng::new(7);
        for _ in 0..1000 {
            let v = rng.range(-5.0, 10.0);
            assert!(v >= -5.0 && v < 10.0);
        }
    }

    #[test]
    fn largest_unit_value_stays_below_max() {
        // 1 - 2^-24, the largest f32 rand's `gen` produces
        let top = 1.0 - f32::EPSILON / 2.0;
        assert_eq!(top * 16.0 + 4.0, 20.0);

        for (min, max) in [(4.0, 20.0), (4.0, 8.0), (0.25, 1.25), (10.0, 50.0), (-5.0, 10.0)] {
            let v = scale_unit(top, min, max);
            assert!(v >= min && v < max, "{v} not in [{min}, {max})");
        }
        assert_eq!(scale_unit(0.0, 4.0, 20.0), 4.0);
        assert_eq!(scale_unit(0.5, 0.0, 0.0), 0.0);
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = ParticleRng::new(99);
        let mut b = ParticleRng::new(99);
        for _ in 0..16 {
            assert_eq!(a.unit(), b.unit());
        }
    }
}
