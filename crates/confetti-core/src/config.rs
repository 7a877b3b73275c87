//! Tunable particle parameters with kind-checked setters

use crate::error::{ConfettiError, Result};
use std::fmt;

/// Primitive kind a setter expects its input to have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    Boolean,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Number => write!(f, "number"),
            ValueKind::Boolean => write!(f, "boolean"),
        }
    }
}

/// Shared simulation parameters.
///
/// One instance lives inside the controller. Particles read it at construction
/// (size, count, power) and on every update (gravity, size, fade).
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleConfig {
    pub gravity: f32,
    pub particle_count: u32,
    pub particle_size: f32,
    pub explosion_power: f32,
    pub destroy_target: bool,
    pub fade: bool,
    pub fade_speed: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            gravity: 10.0,
            particle_count: 75,
            particle_size: 1.0,
            explosion_power: 25.0,
            destroy_target: false,
            fade: false,
            fade_speed: 1.0,
        }
    }
}

/// Per-burst deviation from the base config. Never written back.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfigOverride {
    pub particle_count: Option<u32>,
    pub explosion_power: Option<f32>,
}

impl ParticleConfig {
    /// A copy of this config with `overrides` merged on top
    pub fn with_override(&self, overrides: &ConfigOverride) -> Self {
        Self {
            particle_count: overrides.particle_count.unwrap_or(self.particle_count),
            explosion_power: overrides.explosion_power.unwrap_or(self.explosion_power),
            ..self.clone()
        }
    }

    pub fn set_count(&mut self, value: impl Into<toml::Value>) -> Result<()> {
        let n = expect_number("particle_count", &value.into())?;
        self.particle_count = count_from(n);
        Ok(())
    }

    pub fn set_power(&mut self, value: impl Into<toml::Value>) -> Result<()> {
        self.explosion_power = expect_number("explosion_power", &value.into())? as f32;
        Ok(())
    }

    pub fn set_size(&mut self, value: impl Into<toml::Value>) -> Result<()> {
        self.particle_size = expect_number("particle_size", &value.into())? as f32;
        Ok(())
    }

    pub fn set_gravity(&mut self, value: impl Into<toml::Value>) -> Result<()> {
        self.gravity = expect_number("gravity", &value.into())? as f32;
        Ok(())
    }

    pub fn set_fade(&mut self, value: impl Into<toml::Value>) -> Result<()> {
        self.fade = expect_bool("fade", &value.into())?;
        Ok(())
    }

    pub fn set_fade_speed(&mut self, value: impl Into<toml::Value>) -> Result<()> {
        self.fade_speed = expect_number("fade_speed", &value.into())? as f32;
        Ok(())
    }

    pub fn set_destroy_target(&mut self, value: impl Into<toml::Value>) -> Result<()> {
        self.destroy_target = expect_bool("destroy_target", &value.into())?;
        Ok(())
    }
}

fn expect_number(field: &'static str, value: &toml::Value) -> Result<f64> {
    match value {
        toml::Value::Integer(i) => Ok(*i as f64),
        toml::Value::Float(f) => Ok(*f),
        other => Err(mismatch(field, ValueKind::Number, other)),
    }
}

fn expect_bool(field: &'static str, value: &toml::Value) -> Result<bool> {
    match value {
        toml::Value::Boolean(b) => Ok(*b),
        other => Err(mismatch(field, ValueKind::Boolean, other)),
    }
}

fn mismatch(field: &'static str, expected: ValueKind, got: &toml::Value) -> ConfettiError {
    ConfettiError::ConfigTypeMismatch {
        field,
        expected,
        got: got.type_str().to_string(),
    }
}

/// Spawning loops while `i < count`, so a fractional count rounds up.
fn count_from(n: f64) -> u32 {
    if n.is_nan() || n <= 0.0 {
        0
    } else {
        n.ceil().min(u32::MAX as f64) as u32
    }
}
