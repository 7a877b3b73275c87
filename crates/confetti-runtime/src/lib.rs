//! Confetti Runtime - frame loop infrastructure
//!
//! Provides the pieces a host drives once per frame:
//! - `FrameClock` - timestamp-driven delta time
//! - `Controller` - owns the bursts, applies queued events, ticks and draws
//! - `TriggerEvent` / `TriggerKind` - click and keystroke bursts with their override policy
//! - `EventBus` / `EventSender` - cross-thread event queue drained at the start of each tick
//! - `InputState` - window input turned into triggers
//! - `Scenario` - scripted headless runs into a raster surface

mod anchor;
mod clock;
mod controller;
mod event;
mod event_bus;
mod input;
mod scenario;
mod trigger;

pub use anchor::{
    anchor_or_fallback, click_origin, keystroke_origin, Bounds, CaretLocator, CARET_OFFSET_Y,
};
pub use clock::FrameClock;
pub use controller::{Controller, FrameReport};
pub use event::OverlayEvent;
pub use event_bus::{EventBus, EventSender};
pub use input::{InputState, PointerCaret, PRIMARY_BUTTON};
pub use scenario::{Scenario, ScenarioPlayer, ScenarioTrigger};
pub use trigger::{
    TriggerEvent, TriggerKind, TriggerOutcome, CLICK_MIN_COUNT, KEYSTROKE_MIN_COUNT,
    KEYSTROKE_MIN_POWER,
};
