use crate::layout::Margins;
use crate::units::Px;

/// A rectangle in pixel space, specified by its top-left corner and an
/// exclusive bottom-right corner.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rect {
    /// The x-coordinate of the left edge.
    pub x1: Px,
    /// The y-coordinate of the top edge.
    pub y1: Px,
    /// The x-coordinate one past the right edge.
    pub x2: Px,
    /// The y-coordinate one past the bottom edge.
    pub y2: Px,
}

impl Rect {
    pub fn new<X: Into<Px>>(x1: X, y1: X, x2: X, y2: X) -> Rect {
        Rect {
            x1: x1.into(),
            y1: y1.into(),
            x2: x2.into(),
            y2: y2.into(),
        }
    }

    pub fn width(&self) -> Px {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Px {
        self.y2 - self.y1
    }

    /// A rectangle is empty if it doesn't cover a single pixel
    pub fn is_empty(&self) -> bool {
        self.x2 <= self.x1 || self.y2 <= self.y1
    }

    /// Shrink the rectangle by the given margins. Opposite edges never cross:
    /// if the margins are larger than the rectangle, the result is empty and
    /// positioned on the first edge.
    pub fn inset(&self, margins: &Margins) -> Rect {
        let x1 = self.x1 + margins.left;
        let y1 = self.y1 + margins.top;
        Rect {
            x1,
            y1,
            x2: (self.x2 - margins.right).max(x1),
            y2: (self.y2 - margins.bottom).max(y1),
        }
    }
}

impl From<Rect> for pdf_writer::Rect {
    fn from(r: Rect) -> Self {
        pdf_writer::Rect {
            x1: r.x1.into(),
            y1: r.y1.into(),
            x2: r.x2.into(),
            y2: r.y2.into(),
        }
    }
}

impl From<&Rect> for pdf_writer::Rect {
    fn from(r: &Rect) -> Self {
        (*r).into()
    }
}
