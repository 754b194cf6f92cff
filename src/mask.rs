use crate::error::BubbleError;
use crate::rect::Rect;
use crate::units::Px;
use image::{DynamicImage, GrayImage};
use std::path::Path;

/// Answers whether a pixel belongs to the region words are laid out in.
///
/// A mask must not change while a layout is running; the engine assumes that
/// every query for the same pixel gives the same answer.
pub trait Mask {
    fn contains(&self, x: Px, y: Px) -> bool;
}

impl<M: Mask + ?Sized> Mask for &M {
    fn contains(&self, x: Px, y: Px) -> bool {
        (**self).contains(x, y)
    }
}

/// Selection channels are "on" wherever they are even partially selected.
/// Pixels outside of the image are never selected.
impl Mask for GrayImage {
    fn contains(&self, x: Px, y: Px) -> bool {
        if *x < 0 || *y < 0 {
            return false;
        }
        let (x, y) = (*x as u32, *y as u32);
        x < self.width() && y < self.height() && self.get_pixel(x, y).0[0] > 0
    }
}

/// Adapts a closure into a [Mask], mostly useful for procedurally defined shapes
///
/// ```
/// use bubblify::{Mask, MaskFn, Px};
///
/// let circle = MaskFn(|x: Px, y: Px| (*x - 50).pow(2) + (*y - 50).pow(2) <= 50 * 50);
/// assert!(circle.contains(Px(50), Px(50)));
/// assert!(!circle.contains(Px(0), Px(0)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MaskFn<F>(pub F);

impl<F: Fn(Px, Px) -> bool> Mask for MaskFn<F> {
    fn contains(&self, x: Px, y: Px) -> bool {
        (self.0)(x, y)
    }
}

/// The selection channel of a canvas: a greyscale image where any non-zero
/// pixel is part of the speech bubble
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub channel: GrayImage,
}

impl Selection {
    pub fn new(channel: GrayImage) -> Selection {
        Selection { channel }
    }

    /// Use the luminance of an image as the selection channel
    pub fn from_image(image: DynamicImage) -> Selection {
        Selection::new(image.to_luma8())
    }

    pub fn from_bytes(data: &[u8]) -> Result<Selection, BubbleError> {
        let image = image::load_from_memory(data)?;
        Ok(Selection::from_image(image))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Selection, BubbleError> {
        let data = std::fs::read(path.as_ref())?;
        Self::from_bytes(&data)
    }

    pub fn width(&self) -> Px {
        self.channel.width().into()
    }

    pub fn height(&self) -> Px {
        self.channel.height().into()
    }

    /// The tightest rectangle containing every selected pixel, or [None] if
    /// nothing is selected
    pub fn bounds(&self) -> Option<Rect> {
        let mut bounds: Option<Rect> = None;
        for (x, y, pixel) in self.channel.enumerate_pixels() {
            if pixel.0[0] == 0 {
                continue;
            }
            let (x, y) = (Px::from(x), Px::from(y));
            bounds = Some(match bounds {
                None => Rect {
                    x1: x,
                    y1: y,
                    x2: x + Px(1),
                    y2: y + Px(1),
                },
                Some(b) => Rect {
                    x1: b.x1.min(x),
                    y1: b.y1.min(y),
                    x2: b.x2.max(x + Px(1)),
                    y2: b.y2.max(y + Px(1)),
                },
            });
        }
        bounds
    }
}

impl Mask for Selection {
    fn contains(&self, x: Px, y: Px) -> bool {
        self.channel.contains(x, y)
    }
}
