//! Arranging words inside an arbitrarily shaped speech bubble.
//!
//! Laying out a bubble runs through four stages:
//!
//! 1. [`PixelRows::scan`] finds the horizontal extent of the selection on
//!    every pixel row.
//! 2. [`BandFamilies::decompose`] splits the selection into rectangular
//!    [`BlockRow`]s of a fixed height, growing out from the vertical centre,
//!    once for odd and once for even row counts.
//! 3. [`pack`] searches for the fewest block rows the words fit in, filling
//!    them greedily from the top down in reading order.
//! 4. [`place`] centres each row of words inside its block row.
//!
//! [`layout`] runs all of them in sequence, and is what
//! [`Canvas::bubblify`](crate::Canvas::bubblify) uses.
//!
//! # Example
//!
//! ```
//! use bubblify::layout::{layout, LayoutOptions, Margins};
//! use bubblify::{MaskFn, Px, Rect, WordBox};
//! use id_arena::Arena;
//!
//! // an elliptical bubble, 200px wide and 120px tall
//! let bubble = MaskFn(|x: Px, y: Px| {
//!     let (dx, dy) = ((*x - 100) as f32 / 100.0, (*y - 60) as f32 / 60.0);
//!     dx * dx + dy * dy <= 1.0
//! });
//!
//! let mut words = Arena::new();
//! let order: Vec<_> = [("Hello", 60), ("there,", 64), ("friend!", 70)]
//!     .into_iter()
//!     .map(|(text, width)| words.alloc(WordBox::new(text, Px(width), Px(24))))
//!     .collect();
//!
//! let options = LayoutOptions::new()
//!     .space_width(Px(12))
//!     .margins(Margins::symmetric(Px(4), Px(8)))
//!     .clone();
//! let bounds = Rect::new(0, 0, 200, 120);
//! let assignment = layout(&bubble, bounds, &mut words, &order, &options)
//!     .expect("words fit in the bubble");
//!
//! for row in assignment.rows.iter() {
//!     for &id in row.words.iter() {
//!         assert!(words[id].x >= row.band.left.unwrap());
//!         assert_eq!(words[id].y, row.band.top);
//!     }
//! }
//! ```

mod bands;
mod margins;
mod options;
mod pack;
mod place;
mod scan;

pub use bands::*;
pub use margins::*;
pub use options::*;
pub use pack::*;
pub use place::*;
pub use scan::*;

use crate::error::BubbleError;
use crate::mask::Mask;
use crate::rect::Rect;
use crate::units::Px;
use crate::word::WordBox;
use id_arena::{Arena, Id};

/// Lay out the words in `order` inside the part of `mask` within `bounds`,
/// moving each word to its final position.
///
/// Nothing is moved unless every word fits. With no words at all this always
/// succeeds without looking at the mask.
pub fn layout<M: Mask + ?Sized>(
    mask: &M,
    bounds: Rect,
    words: &mut Arena<WordBox>,
    order: &[Id<WordBox>],
    options: &LayoutOptions,
) -> Result<Assignment, BubbleError> {
    if order.is_empty() {
        return Ok(Assignment::default());
    }

    let row_height = options.resolve_row_height(order.iter().map(|&id| &words[id]))?;

    // only the vertical margins shrink the scanned area; the horizontal ones
    // apply to each block row so that they follow the outline of the bubble
    let area = bounds.inset(&Margins::trbl(
        options.margins.top,
        Px::ZERO,
        options.margins.bottom,
        Px::ZERO,
    ));
    log::debug!(
        "laying out {} words in rows {}..{} with a row height of {row_height}",
        order.len(),
        area.y1,
        area.y2
    );

    let rows = PixelRows::scan(mask, area);
    let families = BandFamilies::decompose(&rows, row_height, &options.margins)?;
    let assignment = pack(&families, words, order, options.space_width)?;
    place(&assignment, words, options.space_width);

    Ok(assignment)
}
