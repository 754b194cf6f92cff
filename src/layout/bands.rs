use super::scan::PixelRows;
use super::Margins;
use crate::error::BubbleError;
use crate::units::Px;

/// The largest rectangle that fits inside a run of consecutive pixel rows of
/// the selection.
///
/// A selection is split into block rows of a fixed height, extending out from
/// its vertical centre. There are two ways of doing this, depending on whether
/// we want an odd or an even number of rows. Given the selection
///
/// ```text
///         ................
///      .....................
///      ......................
///     .........................
///     ........................
///    .........................
///       ...................
///       .................
///          .............
/// ```
///
/// the odd block rows of height 3 are
///
/// ```text
///         +--------------+
///      ...|      1       |..
///      ...+--------------+...
///     +----------------------+.
///     |          0           |
///    .+----------------------+
///       ...+-----------+...
///       ...|     2     |.
///          +-----------+
/// ```
///
/// and the even block rows of height 3 are
///
/// ```text
///         ................
///      .....................
///      +--------------------+
///     .|         0          |..
///     .+--------------------+.
///    ...+---------------+.....
///       |       1       |..
///       +---------------+
///          .............
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BlockRow {
    pub top: Px,
    pub height: Px,
    /// The left edge of the rectangle, if every pixel row it covers is selected
    pub left: Option<Px>,
    /// The right edge of the rectangle, if every pixel row it covers is selected
    pub right: Option<Px>,
    /// How much horizontal room the rectangle has. This is zero when either
    /// bound is missing or the margins pushed the bounds past each other.
    pub width: Px,
}

impl BlockRow {
    /// Intersect the bounds of every scanned pixel row in `top..top + height`,
    /// then pull both sides in by the horizontal margins. Rows of the block
    /// that fall outside of the scanned rows are ignored.
    pub fn new(
        rows: &PixelRows,
        top: Px,
        height: Px,
        margins: &Margins,
    ) -> Result<BlockRow, BubbleError> {
        let mut block = BlockRow {
            top,
            height,
            left: None,
            right: None,
            width: Px::ZERO,
        };

        let first = top.max(rows.top());
        let last = (top + height).min(rows.bottom());
        if first >= last {
            return Ok(block);
        }

        let mut left = Px(i32::MIN);
        let mut right = Px(i32::MAX);
        for y in *first..*last {
            let Some(span) = rows.bounds(Px(y))? else {
                return Ok(block);
            };
            left = left.max(span.left);
            right = right.min(span.right);
        }

        let left = left + margins.left;
        let right = right - margins.right;
        block.left = Some(left);
        block.right = Some(right);
        if right > left {
            block.width = right - left;
        }
        Ok(block)
    }

    pub fn bottom(&self) -> Px {
        self.top + self.height
    }
}

/// The two alternative tilings of a selection into block rows.
///
/// Both families are stored in the order they were built: starting in the
/// middle of the selection and then alternating between the row above and the
/// row below, moving outwards.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BandFamilies {
    /// Block rows for odd row counts, starting with the row straddling the centre
    pub odd: Vec<BlockRow>,
    /// Block rows for even row counts, starting with the rows meeting at the centre
    pub even: Vec<BlockRow>,
}

impl BandFamilies {
    /// Split the scanned rows into odd and even families of block rows, each
    /// `row_height` tall.
    ///
    /// The central odd row is always present, even if the selection is shorter
    /// than a single row; every other row is only added (in pairs) while it
    /// lies entirely within the scanned rows.
    pub fn decompose(
        rows: &PixelRows,
        row_height: Px,
        margins: &Margins,
    ) -> Result<BandFamilies, BubbleError> {
        if row_height <= Px::ZERO {
            return Err(BubbleError::InvalidRowHeight(row_height));
        }

        let (top, bottom) = (rows.top(), rows.bottom());
        let centre = (top + bottom).half_floor();
        let half_floor = row_height.half_floor();
        let half_ceil = row_height.half_ceil();
        let fits = |row_top: Px| row_top >= top && row_top + row_height <= bottom;

        let mut families = BandFamilies {
            odd: vec![BlockRow::new(rows, centre - half_floor, row_height, margins)?],
            even: Vec::new(),
        };

        for i in 0i32.. {
            let even_higher = centre - row_height * (i + 1);
            let even_lower = centre + row_height * i;
            let odd_higher = even_higher - half_floor;
            let odd_lower = even_lower + half_ceil;

            let even_fits = fits(even_higher) && fits(even_lower);
            let odd_fits = fits(odd_higher) && fits(odd_lower);
            if !even_fits && !odd_fits {
                break;
            }

            if even_fits {
                families.even.extend([
                    BlockRow::new(rows, even_higher, row_height, margins)?,
                    BlockRow::new(rows, even_lower, row_height, margins)?,
                ]);
            }
            if odd_fits {
                families.odd.extend([
                    BlockRow::new(rows, odd_higher, row_height, margins)?,
                    BlockRow::new(rows, odd_lower, row_height, margins)?,
                ]);
            }
        }

        log::debug!(
            "split rows {top}..{bottom} around {centre} into {} odd and {} even block rows",
            families.odd.len(),
            families.even.len()
        );

        Ok(families)
    }

    /// The family that can be used to lay out `n` rows
    pub fn family(&self, n: usize) -> &[BlockRow] {
        if n % 2 == 0 {
            &self.even
        } else {
            &self.odd
        }
    }

    /// The most rows that could ever be used
    pub fn max_band_count(&self) -> usize {
        self.odd.len().max(self.even.len())
    }

    /// The first `n` block rows of the matching family, reordered from the top
    /// of the selection downwards. Returns [None] if the family has fewer than
    /// `n` rows.
    pub fn ordered(&self, n: usize) -> Option<Vec<BlockRow>> {
        let family = self.family(n);
        if n == 0 || n > family.len() {
            return None;
        }

        let steps = n / 2;
        let mut ordered = Vec::with_capacity(n);
        // rows above the centre, outermost first
        for i in 0..steps {
            ordered.push(family[n - 2 * i - 2]);
        }
        if n % 2 == 1 {
            ordered.push(family[0]);
        }
        // rows below the centre, innermost first
        for i in (0..steps).rev() {
            ordered.push(family[n - 2 * i - 1]);
        }
        Some(ordered)
    }
}
