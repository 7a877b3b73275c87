//! Confetti Overlay - transparent always-on-top confetti window
//!
//! This crate provides the `OverlayApp` application handler, the settings
//! file watcher, and `run` which wires them to a winit event loop.

mod overlay_app;
pub mod watcher;

pub use overlay_app::OverlayApp;

use anyhow::{Context, Result};
use confetti_core::{ParticleConfig, Settings};
use confetti_runtime::Controller;
use std::path::PathBuf;
use winit::event_loop::{ControlFlow, EventLoop};

/// Initial viewport until the window reports its real size
const INITIAL_SIZE: (u32, u32) = (1280, 720);

#[derive(Debug, Clone, Default)]
pub struct OverlayOptions {
    /// Settings file; the per-user default location when `None`
    pub settings_path: Option<PathBuf>,
    pub fullscreen: bool,
    /// Reload settings whenever the file changes
    pub watch: bool,
}

pub fn run(options: OverlayOptions) -> Result<()> {
    let settings_path = options.settings_path.or_else(Settings::default_path);
    let settings = match &settings_path {
        Some(path) => Settings::load_or_default(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let mut controller = Controller::new(ParticleConfig::default(), INITIAL_SIZE.0, INITIAL_SIZE.1);
    controller.apply_settings(&settings);

    let _watcher = match (&settings_path, options.watch) {
        (Some(path), true) => Some(
            watcher::watch_settings(path, controller.sender())
                .context("Failed to watch settings file")?,
        ),
        (None, true) => {
            tracing::warn!("No settings location available, hot reload disabled");
            None
        }
        _ => None,
    };

    println!("Controls:");
    println!("  Click    - Confetti burst");
    println!("  Any key  - Small burst at the pointer");
    println!("  F11      - Toggle fullscreen");
    println!("  Escape   - Exit");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = OverlayApp::new(controller, options.fullscreen);
    event_loop.run_app(&mut app)?;

    if let Some(e) = app.take_error() {
        return Err(e).context("Overlay failed to start");
    }
    Ok(())
}
