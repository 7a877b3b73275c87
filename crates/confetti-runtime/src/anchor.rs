//! Burst origins for pointer and typing triggers
//!
//! Positions handed in here are logical (layout) pixels. Burst origins are
//! surface pixels, so every origin is multiplied by the surface scale.

use confetti_core::Vector;

/// Keystroke bursts appear this many logical pixels below the caret
pub const CARET_OFFSET_Y: f32 = 10.0;

/// Axis-aligned bounds of an element in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn center(&self) -> Vector {
        Vector::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Locates the text caret inside a focused element
pub trait CaretLocator {
    type Element: ?Sized;

    /// Caret top-left, if the element exposes one
    fn caret_position(&self, element: &Self::Element) -> Option<Vector>;

    /// Element bounds used when there is no caret to find
    fn element_bounds(&self, element: &Self::Element) -> Option<Bounds>;
}

/// Caret position, else the focused element's center, else the viewport center
pub fn anchor_or_fallback<L: CaretLocator>(
    locator: &L,
    focused: Option<&L::Element>,
    viewport: Vector,
) -> Vector {
    focused
        .and_then(|element| {
            locator
                .caret_position(element)
                .or_else(|| locator.element_bounds(element).map(|b| b.center()))
        })
        .unwrap_or_else(|| viewport.scale(0.5))
}

pub fn click_origin(pointer: Vector, scale: f32) -> Vector {
    pointer.scale(scale)
}

pub fn keystroke_origin(anchor: Vector, scale: f32) -> Vector {
    Vector::new(anchor.x * scale, (anchor.y + CARET_OFFSET_Y) * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fields;

    enum Field {
        Caret(Vector),
        Box(Bounds),
        Opaque,
    }

    impl CaretLocator for Fields {
        type Element = Field;

        fn caret_position(&self, element: &Field) -> Option<Vector> {
            match element {
                Field::Caret(p) => Some(*p),
                _ => None,
            }
        }

        fn element_bounds(&self, element: &Field) -> Option<Bounds> {
            match element {
                Field::Box(b) => Some(*b),
                _ => None,
            }
        }
    }

    #[test]
    fn keystroke_offset_below_caret() {
        let anchor = anchor_or_fallback(&Fields, Some(&Field::Caret(Vector::new(40.0, 60.0))), Vector::ZERO);
        assert_eq!(keystroke_origin(anchor, 2.0), Vector::new(80.0, 140.0));
    }

    #[test]
    fn falls_back_to_element_center() {
        let bounds = Bounds {
            left: 10.0,
            top: 20.0,
            width: 100.0,
            height: 40.0,
        };
        let anchor = anchor_or_fallback(&Fields, Some(&Field::Box(bounds)), Vector::new(800.0, 600.0));
        assert_eq!(anchor, Vector::new(60.0, 40.0));
    }

    #[test]
    fn falls_back_to_viewport_center() {
        let viewport = Vector::new(800.0, 600.0);
        assert_eq!(anchor_or_fallback(&Fields, Some(&Field::Opaque), viewport), Vector::new(400.0, 300.0));
        assert_eq!(anchor_or_fallback::<Fields>(&Fields, None, viewport), Vector::new(400.0, 300.0));
    }

    #[test]
    fn click_scales_pointer() {
        assert_eq!(click_origin(Vector::new(50.0, 50.0), 2.0), Vector::new(100.0, 100.0));
    }
}
