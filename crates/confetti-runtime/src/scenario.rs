//! Scripted headless runs
//!
//! A scenario fixes the surface size, frame rate, settings and a list of
//! triggers keyed by frame number, so a run can be replayed into a
//! [`RasterSurface`] without a window.

use crate::controller::{Controller, FrameReport};
use crate::event::OverlayEvent;
use crate::trigger::{TriggerEvent, TriggerKind};
use confetti_core::{ConfettiError, ParticleConfig, Result, Settings, Vector};
use confetti_render::RasterSurface;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Surface size in device pixels
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_fps")]
    pub fps: u32,
    pub frames: u32,
    /// Device pixels per logical pixel. Sets the cull line at
    /// `2 * height / scale_factor`.
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f64,
    /// Fixed seed for reproducible output
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default, rename = "trigger")]
    pub triggers: Vec<ScenarioTrigger>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioTrigger {
    pub frame: u32,
    pub kind: TriggerKind,
    /// Burst origin in surface pixels
    pub x: f32,
    pub y: f32,
}

fn default_fps() -> u32 {
    60
}

fn default_scale_factor() -> f64 {
    1.0
}

impl Scenario {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(s)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfettiError::ScenarioError(format!(
                "surface must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.fps == 0 {
            return Err(ConfettiError::ScenarioError("fps must be positive".into()));
        }
        if !(self.scale_factor > 0.0 && self.scale_factor.is_finite()) {
            return Err(ConfettiError::ScenarioError(format!(
                "scale_factor must be positive, got {}",
                self.scale_factor
            )));
        }
        if let Some(late) = self.triggers.iter().find(|t| t.frame >= self.frames) {
            return Err(ConfettiError::ScenarioError(format!(
                "trigger at frame {} is past the last frame ({})",
                late.frame,
                self.frames.saturating_sub(1)
            )));
        }
        Ok(())
    }

    /// Milliseconds per frame
    pub fn frame_duration_ms(&self) -> f64 {
        1000.0 / self.fps as f64
    }

    pub fn player(&self) -> ScenarioPlayer<'_> {
        ScenarioPlayer::new(self)
    }
}

/// Steps a scenario one frame at a time
pub struct ScenarioPlayer<'a> {
    scenario: &'a Scenario,
    controller: Controller,
    surface: RasterSurface,
    frame: u32,
}

impl<'a> ScenarioPlayer<'a> {
    pub fn new(scenario: &'a Scenario) -> Self {
        let config = ParticleConfig::default();
        let mut controller = match scenario.seed {
            Some(seed) => Controller::with_seed(config, scenario.width, scenario.height, seed),
            None => Controller::new(config, scenario.width, scenario.height),
        };
        controller.apply_settings(&scenario.settings);
        controller.set_scale_factor(scenario.scale_factor);

        Self {
            scenario,
            controller,
            surface: RasterSurface::new(scenario.width, scenario.height),
            frame: 0,
        }
    }

    /// Render the next frame, or `None` once every frame has been produced
    pub fn step(&mut self) -> Option<FrameReport> {
        if self.frame >= self.scenario.frames {
            return None;
        }

        for trigger in self.scenario.triggers.iter().filter(|t| t.frame == self.frame) {
            let event = TriggerEvent {
                origin: Vector::new(trigger.x, trigger.y),
                kind: trigger.kind,
                on_target: false,
            };
            self.controller.push_event(OverlayEvent::Trigger(event));
        }

        let timestamp_ms = self.frame as f64 * self.scenario.frame_duration_ms();
        let report = self.controller.tick(timestamp_ms, Some(&mut self.surface));
        self.frame += 1;
        Some(report)
    }

    /// Index of the frame most recently rendered
    pub fn frame(&self) -> Option<u32> {
        self.frame.checked_sub(1)
    }

    pub fn surface(&self) -> &RasterSurface {
        &self.surface
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }
}
