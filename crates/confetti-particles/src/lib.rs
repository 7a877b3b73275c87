//! Confetti Particles - CPU confetti simulation
//!
//! Provides the burst lifecycle:
//! - `Particle` construction with the upward-biased explosion velocity
//! - Per-tick integration (gravity by height, turbulence, drag, spin, fade)
//! - `Burst` spawning from a config snapshot and single-pass off-screen culling

pub mod burst;
pub mod particle;
pub mod rng;

pub use burst::Burst;
pub use particle::Particle;
pub use rng::ParticleRng;
