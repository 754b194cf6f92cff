//! 2D transformation matrices used when drawing previews.

use crate::units::Px;
use pdf_writer::Content;

/// A PDF transformation matrix `[a, b, c, d, e, f]`:
/// ```text
/// | a  b  0 |
/// | c  d  0 |
/// | e  f  1 |
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Transform {
    /// Identity transform (no transformation)
    pub fn identity() -> Self {
        Transform::scale(1.0, 1.0)
    }

    /// Create a translation transform
    pub fn translate(x: Px, y: Px) -> Self {
        Transform {
            e: x.into(),
            f: y.into(),
            ..Transform::identity()
        }
    }

    /// Create a scaling transform
    pub fn scale(sx: f32, sy: f32) -> Self {
        Transform {
            a: sx,
            b: 0.0,
            c: 0.0,
            d: sy,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Maps pixel space (origin top-left, y down) onto PDF space (origin
    /// bottom-left, y up) for a canvas `height` pixels tall
    pub fn flip_y(height: Px) -> Self {
        Transform::scale(1.0, -1.0).with_translate(Px::ZERO, height)
    }

    /// Combine this transform with another (self * other)
    pub fn then(self, other: Transform) -> Self {
        Transform {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    /// Add a translation to this transform
    pub fn with_translate(self, x: Px, y: Px) -> Self {
        self.then(Transform::translate(x, y))
    }

    /// Where the point `(x, y)` ends up
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    /// Write the transform to a PDF content stream
    pub fn write_to_content(&self, content: &mut Content) {
        content.transform([self.a, self.b, self.c, self.d, self.e, self.f]);
    }
}
