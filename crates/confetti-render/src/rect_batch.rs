//! CPU-side instance batch for the GPU rectangle pipeline

use crate::surface::{RotatedRect, Surface};
use bytemuck::{Pod, Zeroable};

/// GPU instance data for one rectangle - matches WGSL `RectInstance`.
/// 48 bytes, 16-byte aligned (3 x vec4).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct RectInstanceGpu {
    pub center_size: [f32; 4], // xy = center, zw = size
    pub color: [f32; 4],       // premultiplied rgba
    pub rotation: [f32; 4],    // x = clockwise radians
}

impl RectInstanceGpu {
    pub fn from_rect(rect: &RotatedRect) -> Self {
        Self {
            center_size: [rect.center.x, rect.center.y, rect.size.x, rect.size.y],
            color: rect.color.premultiplied(),
            rotation: [rect.rotation, 0.0, 0.0, 0.0],
        }
    }
}

/// Collects a frame's rectangles for one instanced draw call
pub struct RectBatch {
    width: u32,
    height: u32,
    instances: Vec<RectInstanceGpu>,
}

impl RectBatch {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            instances: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn instances(&self) -> &[RectInstanceGpu] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl Surface for RectBatch {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.instances.clear();
    }

    fn fill_rect(&mut self, rect: &RotatedRect) {
        self.instances.push(RectInstanceGpu::from_rect(rect));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confetti_core::{Color, Vector};

    #[test]
    fn instance_layout() {
        assert_eq!(std::mem::size_of::<RectInstanceGpu>(), 48);
        assert_eq!(std::mem::align_of::<RectInstanceGpu>(), 4);
    }

    #[test]
    fn clear_drops_instances() {
        let mut batch = RectBatch::new(320, 200);
        batch.fill_rect(&RotatedRect {
            center: Vector::new(5.0, 6.0),
            size: Vector::new(8.0, 4.0),
            rotation: 1.0,
            color: Color::new(1.0, 1.0, 1.0, 0.5),
        });
        assert_eq!(batch.len(), 1);
        let inst = batch.instances()[0];
        assert_eq!(inst.center_size, [5.0, 6.0, 8.0, 4.0]);
        assert_eq!(inst.color, [0.5, 0.5, 0.5, 0.5]);

        batch.clear();
        assert!(batch.is_empty());
        assert_eq!(batch.size(), (320, 200));
    }
}
