//! Arranges text inside hand-drawn speech bubbles.
//!
//! Given a selection covering the inside of a speech bubble and a list of
//! measured words, `bubblify` finds the fewest rows the words can be spread
//! over and centres them inside the bubble, following its outline.
//!
//! ```
//! use bubblify::{Canvas, Selection, Px};
//! use bubblify::layout::LayoutOptions;
//! use image::{GrayImage, Luma};
//!
//! // a round bubble
//! let channel = GrayImage::from_fn(240, 160, |x, y| {
//!     let (dx, dy) = (x as f32 - 120.0, y as f32 - 80.0);
//!     Luma([if dx * dx / 14400.0 + dy * dy / 6400.0 <= 1.0 { 255 } else { 0 }])
//! });
//!
//! let mut canvas = Canvas::new(Selection::new(channel));
//! let assignment = canvas
//!     .bubblify_text(
//!         "What a lovely day it is!",
//!         |word| (Px(12 * word.len() as i32), Px(22)),
//!         &LayoutOptions::default(),
//!     )
//!     .expect("text fits");
//! assert!(assignment.band_count >= 1);
//! ```

mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

mod error;
pub use error::*;

/// Splitting bubbles into rows and packing words into them
pub mod layout;

mod mask;
pub use mask::*;

/// PDF previews of finished layouts
pub mod preview;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod transform;
pub use transform::*;

mod units;
pub use units::*;

mod word;
pub use word::*;

/// Re-export id-arena, whose IDs refer to words on a [Canvas]
pub use id_arena;
