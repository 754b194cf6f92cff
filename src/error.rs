use crate::units::Px;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum BubbleError {
    #[error("a speech bubble area must be selected before laying out text")]
    /// The canvas has no selection, or the selection doesn't cover any pixels
    NoSelection,

    #[error("the selected region is too small to fit the given text")]
    /// No number of rows could hold every word without overflowing the region
    RegionTooSmall,

    #[error("tried to access pixel row {row} outside of the scanned rows {top}..{bottom}")]
    /// A pixel row was requested that was never scanned. This is always a bug
    /// in the caller, never a property of the selection.
    InvalidRow { row: Px, top: Px, bottom: Px },

    #[error("row height must be positive, got {0}")]
    /// The row height (explicit or derived from the tallest word) was not positive
    InvalidRowHeight(Px),

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [image] failed to decode the selection
    Image(#[from] image::ImageError),
}
