//! Spatial and color types

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A 2D vector in surface pixels (y grows downward)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns a new vector with both components multiplied by `k`
    pub fn scale(&self, k: f32) -> Self {
        Self {
            x: self.x * k,
            y: self.y * k,
        }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Add for Vector {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vector {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f32> for Vector {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        self.scale(scalar)
    }
}

/// An RGBA color with straight (non-premultiplied) alpha, components in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Color with RGB multiplied by alpha, as expected by premultiplied blending
    pub fn premultiplied(&self) -> [f32; 4] {
        [self.r * self.a, self.g * self.a, self.b * self.a, self.a]
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

/// A CSS-style `hsla()` color
///
/// `hue` is in degrees (any value, wrapped into [0, 360)), `saturation` and
/// `lightness` are percentages, `alpha` is a percentage in [0, 100].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
}

impl Hsla {
    pub const fn new(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    /// Convert using the CSS Color Level 3 HSL algorithm
    pub fn to_color(&self) -> Color {
        let h = self.hue.rem_euclid(360.0) / 360.0;
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);

        let t2 = if l <= 0.5 { l * (s + 1.0) } else { l + s - l * s };
        let t1 = l * 2.0 - t2;

        Color {
            r: hue_to_rgb(t1, t2, h + 1.0 / 3.0),
            g: hue_to_rgb(t1, t2, h),
            b: hue_to_rgb(t1, t2, h - 1.0 / 3.0),
            a: (self.alpha / 100.0).clamp(0.0, 1.0),
        }
    }
}

fn hue_to_rgb(t1: f32, t2: f32, h: f32) -> f32 {
    let h = h.rem_euclid(1.0);
    if h * 6.0 < 1.0 {
        t1 + (t2 - t1) * h * 6.0
    } else if h * 2.0 < 1.0 {
        t2
    } else if h * 3.0 < 2.0 {
        t1 + (t2 - t1) * (2.0 / 3.0 - h) * 6.0
    } else {
        t1
    }
}
