//! CPU rasterizer surface backed by an RGBA image
//!
//! Used for headless rendering (scenario export) and tests.

use crate::context::RenderError;
use crate::surface::{RotatedRect, Surface};
use image::{Rgba, RgbaImage};
use std::path::Path;

pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width.max(1), height.max(1)),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    /// Composite the surface over an opaque background (confetti on a page)
    pub fn flatten(&self, background: [u8; 3]) -> RgbaImage {
        let mut out = RgbaImage::new(self.image.width(), self.image.height());
        for (dst, src) in out.pixels_mut().zip(self.image.pixels()) {
            let a = src.0[3] as f32 / 255.0;
            let mix = |s: u8, b: u8| (s as f32 * a + b as f32 * (1.0 - a)).round() as u8;
            *dst = Rgba([
                mix(src.0[0], background[0]),
                mix(src.0[1], background[1]),
                mix(src.0[2], background[2]),
                255,
            ]);
        }
        out
    }

    pub fn save_png(&self, path: &Path) -> Result<(), RenderError> {
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| RenderError::ImageWrite(e.to_string()))
    }
}

impl Surface for RasterSurface {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn clear(&mut self) {
        for p in self.image.pixels_mut() {
            *p = Rgba([0, 0, 0, 0]);
        }
    }

    fn fill_rect(&mut self, rect: &RotatedRect) {
        let (cx, cy) = (rect.center.x, rect.center.y);
        if !(cx.is_finite() && cy.is_finite()) || rect.color.a <= 0.0 {
            return;
        }

        let (width, height) = self.image.dimensions();
        let (sin, cos) = rect.rotation.sin_cos();
        let hx = rect.size.x * 0.5;
        let hy = rect.size.y * 0.5;

        // Axis-aligned bounds of the rotated rectangle
        let ex = hx * cos.abs() + hy * sin.abs();
        let ey = hx * sin.abs() + hy * cos.abs();
        let x0 = (cx - ex).floor().max(0.0) as u32;
        let y0 = (cy - ey).floor().max(0.0) as u32;
        let x1 = (cx + ex).ceil().min(width as f32).max(0.0) as u32;
        let y1 = (cy + ey).ceil().min(height as f32).max(0.0) as u32;

        let src = rect.color;
        for py in y0..y1 {
            for px in x0..x1 {
                // Sample at the pixel center, mapped back into the rectangle's frame
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                let lx = dx * cos + dy * sin;
                let ly = -dx * sin + dy * cos;
                if lx.abs() > hx || ly.abs() > hy {
                    continue;
                }

                let dst = self.image.get_pixel_mut(px, py);
                *dst = blend_over(src.to_array(), dst.0);
            }
        }
    }
}

/// Source-over compositing with straight alpha
fn blend_over(src: [f32; 4], dst: [u8; 4]) -> Rgba<u8> {
    let sa = src[3].clamp(0.0, 1.0);
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |i: usize| {
        let s = src[i].clamp(0.0, 1.0);
        let d = dst[i] as f32 / 255.0;
        let c = (s * sa + d * da * (1.0 - sa)) / out_a;
        (c * 255.0).round() as u8
    };

    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_a * 255.0).round() as u8,
    ])
}
