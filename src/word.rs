use crate::units::Px;

/// A pre-measured fragment of text that gets laid out as a single unit.
///
/// The size of a word never changes once it is measured; only its anchor
/// (the top-left corner) moves during layout.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct WordBox {
    pub text: String,
    pub width: Px,
    pub height: Px,
    pub x: Px,
    pub y: Px,
}

impl WordBox {
    /// Create a word anchored at the canvas origin
    pub fn new<S: ToString>(text: S, width: Px, height: Px) -> WordBox {
        WordBox {
            text: text.to_string(),
            width,
            height,
            x: Px::ZERO,
            y: Px::ZERO,
        }
    }

    /// Move the top-left corner of the word to `(x, y)`
    pub fn move_to(&mut self, x: Px, y: Px) {
        self.x = x;
        self.y = y;
    }

    pub fn right(&self) -> Px {
        self.x + self.width
    }

    pub fn bottom(&self) -> Px {
        self.y + self.height
    }
}
