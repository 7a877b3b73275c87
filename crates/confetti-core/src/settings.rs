//! User-facing settings record
//!
//! The shape mirrors the record the settings panel stores: camelCase keys,
//! one flat table. Stored as TOML on disk.

use crate::config::ParticleConfig;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings delivered at startup and on every settings-change notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub enabled: bool,
    pub particle_count: u32,
    pub explosion_power: f32,
    pub particle_size: f32,
    pub gravity: f32,
    pub fade: bool,
    pub fade_speed: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            particle_count: 75,
            explosion_power: 25.0,
            particle_size: 1.0,
            gravity: 10.0,
            fade: true,
            fade_speed: 2.7,
        }
    }
}

impl Settings {
    /// Default settings file: `<config dir>/confetti/settings.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("confetti").join("settings.toml"))
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Copy the simulation fields onto `config`.
    /// `enabled` is host state and `destroy_target` is not part of the record.
    pub fn apply_to(&self, config: &mut ParticleConfig) {
        config.particle_count = self.particle_count;
        config.explosion_power = self.explosion_power;
        config.particle_size = self.particle_size;
        config.gravity = self.gravity;
        config.fade = self.fade;
        config.fade_speed = self.fade_speed;
    }
}
