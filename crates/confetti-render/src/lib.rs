//! Confetti Render - drawing surfaces for the confetti overlay
//!
//! `Screen` holds the two stateless drawing operations the simulation needs
//! (clear, draw a rotated rectangle). They target any `Surface`:
//! - `RasterSurface` rasterizes on the CPU into an RGBA image (headless, tests)
//! - `RectBatch` + `RectPipeline` draw instanced quads with wgpu (overlay window)

mod context;
mod raster;
mod rect_batch;
mod rect_pipeline;
mod screen;
mod surface;

pub use context::{RenderContext, RenderError};
pub use raster::RasterSurface;
pub use rect_batch::{RectBatch, RectInstanceGpu};
pub use rect_pipeline::{RectPipeline, ScreenUniforms};
pub use screen::{Screen, CONFETTI_LIGHTNESS, CONFETTI_SATURATION};
pub use surface::{RotatedRect, Surface};

#[cfg(test)]
mod tests {
    #[test]
    fn rect_shader_wgsl_parses() {
        let source = include_str!("rect_shader.wgsl");
        naga::front::wgsl::parse_str(source).expect("rect_shader.wgsl failed to parse");
    }
}
