//! Confetti Core - Foundational types for the confetti overlay
//!
//! This crate provides the types every other confetti crate depends on:
//! - `Vector` - 2D surface-space value type
//! - `Color`, `Hsla` - Fill colors and CSS-style HSL conversion
//! - `ParticleConfig` - Shared tunables with kind-checked setters
//! - `Settings` - The user settings record, stored as TOML
//! - Error types and Result alias

mod config;
mod error;
mod settings;
mod types;

pub use config::{ConfigOverride, ParticleConfig, ValueKind};
pub use error::{ConfettiError, Result};
pub use settings::Settings;
pub use types::{Color, Hsla, Vector};
