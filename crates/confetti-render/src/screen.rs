//! Stateless confetti drawing operations
//!
//! Every call takes the surface as an `Option`: with no surface attached the
//! simulation keeps running headless and drawing is a no-op.

use crate::surface::{RotatedRect, Surface};
use confetti_core::{Hsla, Vector};

/// Saturation of every confetti piece, in percent
pub const CONFETTI_SATURATION: f32 = 90.0;
/// Lightness of every confetti piece, in percent
pub const CONFETTI_LIGHTNESS: f32 = 65.0;

pub struct Screen;

impl Screen {
    /// Clear the entire surface to transparent
    pub fn clear<S: Surface + ?Sized>(surface: Option<&mut S>) {
        if let Some(surface) = surface {
            surface.clear();
        }
    }

    /// Draw a `size` rectangle whose unrotated top-left corner is `position`,
    /// rotated clockwise by `rotation_deg` about its center and filled with
    /// `hsla(hue, 90%, 65%, opacity%)`.
    pub fn draw_rectangle<S: Surface + ?Sized>(
        surface: Option<&mut S>,
        position: Vector,
        size: Vector,
        rotation_deg: f32,
        hue: f32,
        opacity: f32,
    ) {
        let Some(surface) = surface else {
            return;
        };

        let color = Hsla::new(hue, CONFETTI_SATURATION, CONFETTI_LIGHTNESS, opacity).to_color();
        if color.a <= 0.0 {
            return;
        }

        surface.fill_rect(&RotatedRect {
            center: position + size.scale(0.5),
            size,
            rotation: rotation_deg.to_radians(),
            color,
        });
    }
}
