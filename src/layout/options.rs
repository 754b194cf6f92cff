use super::Margins;
use crate::error::BubbleError;
use crate::units::Px;
use crate::word::WordBox;

/// Knobs controlling how words are arranged inside a bubble
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOptions {
    /// The height of every row of words. If [None], the height of the
    /// tallest word is used.
    pub row_height: Option<Px>,
    /// The gap left between neighbouring words on the same row.
    pub space_width: Px,
    /// Distance kept between the words and the outline of the bubble.
    pub margins: Margins,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        LayoutOptions {
            row_height: None,
            space_width: Px(15),
            margins: Margins::symmetric(Px(10), Px(10)),
        }
    }
}

impl LayoutOptions {
    /// Create options with the default spacing and margins
    pub fn new() -> LayoutOptions {
        LayoutOptions::default()
    }

    /// Use a fixed row height instead of the tallest word's height
    pub fn row_height(&mut self, row_height: Px) -> &mut Self {
        self.row_height = Some(row_height);
        self
    }

    pub fn space_width(&mut self, space_width: Px) -> &mut Self {
        self.space_width = space_width;
        self
    }

    pub fn margins(&mut self, margins: Margins) -> &mut Self {
        self.margins = margins;
        self
    }

    /// The row height to lay `words` out with
    pub fn resolve_row_height<'w, I>(&self, words: I) -> Result<Px, BubbleError>
    where
        I: IntoIterator<Item = &'w WordBox>,
    {
        let row_height = match self.row_height {
            Some(row_height) => row_height,
            None => words
                .into_iter()
                .map(|word| word.height)
                .max()
                .unwrap_or_default(),
        };
        if row_height <= Px::ZERO {
            return Err(BubbleError::InvalidRowHeight(row_height));
        }
        Ok(row_height)
    }
}
