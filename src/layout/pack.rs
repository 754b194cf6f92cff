use super::bands::{BandFamilies, BlockRow};
use crate::error::BubbleError;
use crate::units::Px;
use crate::word::WordBox;
use id_arena::{Arena, Id};

/// The words that were assigned to one block row, in reading order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedRow {
    pub band: BlockRow,
    pub words: Vec<Id<WordBox>>,
}

impl AssignedRow {
    /// The width of the row's words including the spaces between them
    pub fn occupied_width(&self, words: &Arena<WordBox>, space_width: Px) -> Px {
        let words_width: Px = self.words.iter().map(|&id| words[id].width).sum();
        let gaps = self.words.len().saturating_sub(1) as i32;
        words_width + space_width * gaps
    }
}

/// Which words go on which block row
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// How many block rows the words were spread over. Rows that ended up
    /// without any words still count.
    pub band_count: usize,
    /// The lower bound the search for `band_count` started from.
    pub min_band_count: usize,
    /// Rows that received at least one word, from top to bottom.
    pub rows: Vec<AssignedRow>,
}

/// The fewest block rows whose combined width could possibly hold
/// `total_width`, or [None] if even every block row together is too narrow.
///
/// Each family is walked outwards from the centre until enough width has been
/// collected, and the count is then rounded up to the family's parity.
pub fn min_band_count(families: &BandFamilies, total_width: Px) -> Option<usize> {
    let shortest = |family: &[BlockRow], parity: usize| {
        let mut cumulative = Px::ZERO;
        family
            .iter()
            .position(|row| {
                cumulative += row.width;
                cumulative >= total_width
            })
            .map(|index| {
                let count = index + 1;
                if count % 2 == parity {
                    count
                } else {
                    count + 1
                }
            })
    };

    match (shortest(&families.odd, 1), shortest(&families.even, 0)) {
        (Some(odd), Some(even)) => Some(odd.min(even)),
        (odd, even) => odd.or(even),
    }
}

/// Assign every word in `order` to a block row, using as few rows as the
/// greedy strategy allows.
///
/// Starting at [min_band_count], each row count is tried in turn: words are
/// added to the topmost row in order until the next one would overflow, at
/// which point it starts the next row down. A row count fails as soon as a
/// word doesn't fit in any of the remaining rows.
///
/// Words are never reordered, so this can use more rows than an optimal
/// packing would.
pub fn pack(
    families: &BandFamilies,
    words: &Arena<WordBox>,
    order: &[Id<WordBox>],
    space_width: Px,
) -> Result<Assignment, BubbleError> {
    if order.is_empty() {
        return Ok(Assignment::default());
    }

    let total_width: Px = order.iter().map(|&id| words[id].width).sum();
    let min_band_count =
        min_band_count(families, total_width).ok_or(BubbleError::RegionTooSmall)?;
    let max_band_count = families.max_band_count();
    log::debug!(
        "packing {} words ({total_width} wide) into {min_band_count}..={max_band_count} rows",
        order.len()
    );

    for band_count in min_band_count..=max_band_count {
        let Some(bands) = families.ordered(band_count) else {
            log::trace!("no family has {band_count} rows");
            continue;
        };

        match fill_rows(&bands, words, order, space_width) {
            Some(rows) => {
                log::debug!(
                    "words fit in {band_count} rows, {} of them used",
                    rows.len()
                );
                return Ok(Assignment {
                    band_count,
                    min_band_count,
                    rows,
                });
            }
            None => log::trace!("words overflow {band_count} rows"),
        }
    }

    Err(BubbleError::RegionTooSmall)
}

/// Greedily fill `bands` from the top, returning [None] if we run out of bands
fn fill_rows(
    bands: &[BlockRow],
    words: &Arena<WordBox>,
    order: &[Id<WordBox>],
    space_width: Px,
) -> Option<Vec<AssignedRow>> {
    let mut bands = bands.iter();
    let mut band = bands.next()?;

    let mut rows: Vec<AssignedRow> = Vec::new();
    let mut line: Vec<Id<WordBox>> = Vec::new();
    let mut line_width = Px::ZERO;

    for &id in order {
        let word_width = words[id].width;
        let mut needed = if line.is_empty() {
            word_width
        } else {
            line_width + space_width + word_width
        };

        // overflowing! move on to the next band, which may need skipping too.
        // bands without any width never take a word, not even an empty one
        while band.width <= Px::ZERO || needed > band.width {
            if !line.is_empty() {
                rows.push(AssignedRow {
                    band: *band,
                    words: std::mem::take(&mut line),
                });
            }
            band = bands.next()?;
            needed = word_width;
        }

        line.push(id);
        line_width = needed;
    }

    if !line.is_empty() {
        rows.push(AssignedRow {
            band: *band,
            words: line,
        });
    }
    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::scan::PixelRows;
    use crate::layout::Margins;
    use crate::mask::MaskFn;
    use crate::rect::Rect;

    fn rectangle_families(width: i32, height: i32, row_height: i32) -> BandFamilies {
        let mask = MaskFn(|_: Px, _: Px| true);
        let rows = PixelRows::scan(&mask, Rect::new(0, 0, width, height));
        BandFamilies::decompose(&rows, Px(row_height), &Margins::empty()).unwrap()
    }

    fn words(widths: &[i32]) -> (Arena<WordBox>, Vec<Id<WordBox>>) {
        let mut arena = Arena::new();
        let order = widths
            .iter()
            .enumerate()
            .map(|(i, &w)| arena.alloc(WordBox::new(format!("w{i}"), Px(w), Px(20))))
            .collect();
        (arena, order)
    }

    #[test]
    fn min_band_count_rounds_up_to_the_family_parity() {
        let families = rectangle_families(200, 60, 20);
        assert_eq!(min_band_count(&families, Px(150)), Some(1));
        // odd family needs 2 rows' width so rounds up to 3; even needs 2
        assert_eq!(min_band_count(&families, Px(250)), Some(2));
        assert_eq!(min_band_count(&families, Px(400)), Some(2));
        assert_eq!(min_band_count(&families, Px(401)), Some(3));
        assert_eq!(min_band_count(&families, Px(601)), None);
    }

    #[test]
    fn short_words_share_the_central_row() {
        let families = rectangle_families(200, 60, 20);
        let (arena, order) = words(&[40, 40, 40]);
        let assignment = pack(&families, &arena, &order, Px(10)).unwrap();

        assert_eq!(assignment.band_count, 1);
        assert_eq!(assignment.rows.len(), 1);
        assert_eq!(assignment.rows[0].band.top, Px(20));
        assert_eq!(assignment.rows[0].words, order);
        assert_eq!(assignment.rows[0].occupied_width(&arena, Px(10)), Px(140));
    }

    #[test]
    fn overflowing_words_start_the_next_row() {
        let families = rectangle_families(200, 60, 20);
        let (arena, order) = words(&[50, 50, 50, 50, 50]);
        let assignment = pack(&families, &arena, &order, Px(10)).unwrap();

        assert_eq!(assignment.band_count, 2);
        assert_eq!(assignment.rows.len(), 2);
        assert_eq!(assignment.rows[0].band.top, Px(10));
        assert_eq!(assignment.rows[0].words, order[..3]);
        assert_eq!(assignment.rows[1].band.top, Px(30));
        assert_eq!(assignment.rows[1].words, order[3..]);
    }

    #[test]
    fn spaces_count_towards_overflow() {
        let families = rectangle_families(100, 20, 20);
        // 50 + 50 fits exactly, but not with a space between them
        let (arena, order) = words(&[50, 50]);
        assert!(matches!(
            pack(&families, &arena, &order, Px(1)),
            Err(BubbleError::RegionTooSmall)
        ));
        assert!(pack(&families, &arena, &order, Px(0)).is_ok());
    }

    #[test]
    fn words_wider_than_every_row_dont_fit() {
        let families = rectangle_families(200, 60, 20);
        let (arena, order) = words(&[300]);
        assert!(matches!(
            pack(&families, &arena, &order, Px(10)),
            Err(BubbleError::RegionTooSmall)
        ));
    }

    #[test]
    fn zero_width_rows_are_skipped() {
        // a gap in the selection cuts through the top row of the even family
        let mask = MaskFn(|_: Px, y: Px| *y != 25);
        let rows = PixelRows::scan(&mask, Rect::new(0, 0, 100, 100));
        let families = BandFamilies::decompose(&rows, Px(20), &Margins::empty()).unwrap();
        assert_eq!(families.ordered(4).unwrap()[0].width, Px(0));

        let (arena, order) = words(&[90, 90, 90]);
        let assignment = pack(&families, &arena, &order, Px(10)).unwrap();
        assert_eq!(assignment.band_count, 4);
        let tops: Vec<Px> = assignment.rows.iter().map(|row| row.band.top).collect();
        assert_eq!(tops, vec![Px(30), Px(50), Px(70)]);
    }

    #[test]
    fn empty_words_skip_rows_without_bounds() {
        // the central row crosses the gap and has no bounds
        let mask = MaskFn(|_: Px, y: Px| *y != 50);
        let rows = PixelRows::scan(&mask, Rect::new(0, 0, 100, 100));
        let families = BandFamilies::decompose(&rows, Px(20), &Margins::empty()).unwrap();
        assert_eq!(families.odd[0].left, None);

        let (arena, order) = words(&[0]);
        let assignment = pack(&families, &arena, &order, Px(10)).unwrap();
        assert_eq!(assignment.band_count, 2);
        assert_eq!(assignment.rows.len(), 1);
        assert_eq!(assignment.rows[0].band.top, Px(30));
        assert!(assignment.rows[0].band.width > Px::ZERO);
    }

    #[test]
    fn empty_words_skip_rows_collapsed_by_margins() {
        let mask = MaskFn(|_: Px, _: Px| true);
        let rows = PixelRows::scan(&mask, Rect::new(0, 0, 30, 40));
        let margins = Margins::symmetric(Px(0), Px(20));
        let families = BandFamilies::decompose(&rows, Px(20), &margins).unwrap();
        assert_eq!(families.odd[0].width, Px(0));

        let (arena, order) = words(&[0]);
        assert!(matches!(
            pack(&families, &arena, &order, Px(10)),
            Err(BubbleError::RegionTooSmall)
        ));
    }

    #[test]
    fn no_words_need_no_rows() {
        let families = rectangle_families(200, 60, 20);
        let assignment = pack(&families, &Arena::new(), &[], Px(10)).unwrap();
        assert_eq!(assignment, Assignment::default());
    }

    #[test]
    fn rows_never_overflow() {
        let mask = MaskFn(|x: Px, y: Px| (*x - 100).pow(2) * 4 + (*y - 100).pow(2) * 9 <= 90_000);
        let rows = PixelRows::scan(&mask, Rect::new(0, 0, 201, 201));
        let families = BandFamilies::decompose(&rows, Px(18), &Margins::all(Px(4))).unwrap();
        let (arena, order) = words(&[32, 71, 15, 48, 90, 23, 60, 12, 44, 38, 29, 55]);
        let assignment = pack(&families, &arena, &order, Px(8)).unwrap();

        assert!(assignment.band_count >= assignment.min_band_count);
        let placed: Vec<Id<WordBox>> = assignment
            .rows
            .iter()
            .flat_map(|row| row.words.iter().copied())
            .collect();
        assert_eq!(placed, order);
        for row in &assignment.rows {
            assert!(row.occupied_width(&arena, Px(8)) <= row.band.width);
        }
    }
}
