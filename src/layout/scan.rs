use crate::error::BubbleError;
use crate::mask::Mask;
use crate::rect::Rect;
use crate::units::Px;

/// The horizontal extent of the selected pixels on a single pixel row.
///
/// `left` is the first selected pixel and `right` is one past the last
/// selected pixel, so `right - left` is the number of pixels between the
/// outermost selected pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Span {
    pub left: Px,
    pub right: Px,
}

impl Span {
    pub fn width(&self) -> Px {
        self.right - self.left
    }
}

/// The horizontal bounds of every pixel row in a scanned area, computed once
/// per layout and never updated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelRows {
    top: Px,
    rows: Vec<Option<Span>>,
}

impl PixelRows {
    /// Find the first and last selected pixel of every row in `area`. Rows
    /// with nothing selected are stored as [None].
    pub fn scan<M: Mask + ?Sized>(mask: &M, area: Rect) -> PixelRows {
        let mut rows: Vec<Option<Span>> = Vec::with_capacity((*area.height()).max(0) as usize);

        for y in *area.y1..*area.y2 {
            let y = Px(y);
            let Some(left) = (*area.x1..*area.x2)
                .map(Px)
                .find(|&x| mask.contains(x, y))
            else {
                rows.push(None);
                continue;
            };
            // the forward scan found a pixel, so the backward scan must too
            let last = (*left..*area.x2)
                .rev()
                .map(Px)
                .find(|&x| mask.contains(x, y))
                .unwrap_or(left);
            rows.push(Some(Span {
                left,
                right: last + Px(1),
            }));
        }

        log::trace!(
            "scanned {} pixel rows, {} of them selected",
            rows.len(),
            rows.iter().filter(|row| row.is_some()).count()
        );

        PixelRows {
            top: area.y1,
            rows,
        }
    }

    /// The first scanned row
    pub fn top(&self) -> Px {
        self.top
    }

    /// One past the last scanned row
    pub fn bottom(&self) -> Px {
        self.top + Px(self.rows.len() as i32)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the horizontal bounds of pixel row `y`, which is [None] if nothing on
    /// that row is selected. Asking for a row that wasn't scanned is an error.
    pub fn bounds(&self, y: Px) -> Result<Option<Span>, BubbleError> {
        let invalid = || BubbleError::InvalidRow {
            row: y,
            top: self.top(),
            bottom: self.bottom(),
        };
        let index = usize::try_from(*(y - self.top)).map_err(|_| invalid())?;
        self.rows.get(index).copied().ok_or_else(invalid)
    }

    /// Iterate over `(y, bounds)` for every scanned row, top to bottom
    pub fn iter(&self) -> impl Iterator<Item = (Px, Option<Span>)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| (self.top + Px(i as i32), *row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::MaskFn;

    #[test]
    fn finds_outermost_selected_pixels() {
        // a "U" shape: two posts joined at the bottom
        let mask = MaskFn(|x: Px, y: Px| {
            let post = (2..4).contains(&*x) || (8..10).contains(&*x);
            let base = *y == 5 && (2..10).contains(&*x);
            (0..6).contains(&*y) && (post || base)
        });
        let rows = PixelRows::scan(&mask, Rect::new(0, 0, 12, 8));

        assert_eq!(rows.len(), 8);
        assert_eq!(
            rows.bounds(Px(0)).unwrap(),
            Some(Span {
                left: Px(2),
                right: Px(10)
            })
        );
        assert_eq!(rows.bounds(Px(5)).unwrap().map(|s| s.width()), Some(Px(8)));
        assert_eq!(rows.bounds(Px(6)).unwrap(), None);
    }

    #[test]
    fn only_looks_inside_the_area() {
        let mask = MaskFn(|_: Px, _: Px| true);
        let rows = PixelRows::scan(&mask, Rect::new(5, 10, 25, 14));
        assert_eq!(rows.top(), Px(10));
        assert_eq!(rows.bottom(), Px(14));
        for (_, span) in rows.iter() {
            assert_eq!(
                span,
                Some(Span {
                    left: Px(5),
                    right: Px(25)
                })
            );
        }
    }

    #[test]
    fn rows_outside_the_scan_are_errors() {
        let mask = MaskFn(|_: Px, _: Px| true);
        let rows = PixelRows::scan(&mask, Rect::new(0, 10, 4, 14));
        assert!(matches!(
            rows.bounds(Px(9)),
            Err(BubbleError::InvalidRow { row: Px(9), .. })
        ));
        assert!(matches!(
            rows.bounds(Px(14)),
            Err(BubbleError::InvalidRow { .. })
        ));
        assert!(rows.bounds(Px(13)).is_ok());
    }

    #[test]
    fn single_pixel_rows_have_unit_width() {
        let mask = MaskFn(|x: Px, _: Px| *x == 3);
        let rows = PixelRows::scan(&mask, Rect::new(0, 0, 6, 1));
        assert_eq!(rows.bounds(Px(0)).unwrap().map(|s| s.width()), Some(Px(1)));
    }
}
