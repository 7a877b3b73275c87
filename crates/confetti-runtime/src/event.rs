//! Events delivered to the controller from other threads or the host

use crate::trigger::TriggerEvent;
use confetti_core::Settings;

#[derive(Debug, Clone)]
pub enum OverlayEvent {
    /// Spawn a burst with the trigger's override policy
    Trigger(TriggerEvent),
    /// Replace the shared config and visibility with freshly loaded settings
    SettingsChanged(Settings),
    /// Show or hide rendering without pausing the simulation
    SetVisible(bool),
    /// Drawing surface changed size (surface pixels)
    Resized { width: u32, height: u32 },
    /// Device pixels per logical pixel changed
    ScaleFactorChanged(f64),
}
