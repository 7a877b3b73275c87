//! Drawing surface abstraction

use confetti_core::{Color, Vector};

/// A filled rectangle rotated about its own center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatedRect {
    /// Center in surface pixels
    pub center: Vector,
    /// Full width and height in surface pixels
    pub size: Vector,
    /// Clockwise rotation in radians (y grows downward)
    pub rotation: f32,
    pub color: Color,
}

/// Something the confetti can be drawn onto.
///
/// Sized to the viewport in device pixels. Implementations blend with
/// source-over compositing.
pub trait Surface {
    /// Width and height in device pixels
    fn size(&self) -> (u32, u32);

    /// Reset every pixel to fully transparent
    fn clear(&mut self);

    fn fill_rect(&mut self, rect: &RotatedRect);
}
