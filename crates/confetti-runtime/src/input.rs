//! Input state management
//!
//! Window events come in as physical pixels. The state keeps the pointer in
//! logical pixels and turns releases into [`TriggerEvent`]s.

use crate::anchor::{self, Bounds, CaretLocator};
use crate::trigger::TriggerEvent;
use confetti_core::Vector;
use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Left mouse button index
pub const PRIMARY_BUTTON: u32 = 0;

/// The overlay has no text fields of its own; the pointer stands in for the
/// caret of whatever the user is typing into.
pub struct PointerCaret;

impl CaretLocator for PointerCaret {
    type Element = Vector;

    fn caret_position(&self, pointer: &Vector) -> Option<Vector> {
        Some(*pointer)
    }

    fn element_bounds(&self, _pointer: &Vector) -> Option<Bounds> {
        None
    }
}

/// Tracks pointer and button state for the overlay window
pub struct InputState {
    mouse_buttons_down: HashSet<u32>,
    /// Pointer position in logical pixels, `None` once it leaves the window
    pointer: Option<Vector>,
    /// Physical pixels per logical pixel
    scale_factor: f64,
    /// Window size in physical pixels
    physical_size: (u32, u32),
    /// Window size in logical pixels
    viewport: Vector,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            mouse_buttons_down: HashSet::new(),
            pointer: None,
            scale_factor: 1.0,
            physical_size: (0, 0),
            viewport: Vector::ZERO,
        }
    }

    /// Also recomputes the logical viewport from the last physical size
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor > 0.0 {
            self.scale_factor = scale_factor;
            self.update_viewport();
        }
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Window size in physical pixels
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.physical_size = (width, height);
        self.update_viewport();
    }

    fn update_viewport(&mut self) {
        let (width, height) = self.physical_size;
        let scale = self.scale_factor as f32;
        self.viewport = Vector::new(width as f32 / scale, height as f32 / scale);
    }

    /// Pointer moved to a physical pixel position
    pub fn process_mouse_move(&mut self, x: f64, y: f64) {
        self.pointer = Some(Vector::new(
            (x / self.scale_factor) as f32,
            (y / self.scale_factor) as f32,
        ));
    }

    pub fn process_mouse_left(&mut self) {
        self.pointer = None;
    }

    pub fn pointer(&self) -> Option<Vector> {
        self.pointer
    }

    pub fn process_mouse_button_down(&mut self, button: u32) {
        self.mouse_buttons_down.insert(button);
    }

    /// A completed primary-button click over the window is a click trigger
    pub fn process_mouse_button_up(&mut self, button: u32) -> Option<TriggerEvent> {
        let was_down = self.mouse_buttons_down.remove(&button);
        if button != PRIMARY_BUTTON || !was_down {
            return None;
        }
        let pointer = self.pointer?;
        Some(TriggerEvent::click(anchor::click_origin(
            pointer,
            self.scale_factor as f32,
        )))
    }

    /// Every key release is a keystroke trigger, anchored below the pointer
    /// or at the viewport center when the pointer is outside the window
    pub fn process_key_up(&mut self, _key: KeyCode) -> TriggerEvent {
        let anchor = anchor::anchor_or_fallback(&PointerCaret, self.pointer.as_ref(), self.viewport);
        TriggerEvent::keystroke(anchor::keystroke_origin(anchor, self.scale_factor as f32))
    }

    pub fn is_mouse_button_down(&self, button: u32) -> bool {
        self.mouse_buttons_down.contains(&button)
    }
}
