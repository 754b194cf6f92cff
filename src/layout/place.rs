use super::pack::Assignment;
use crate::units::Px;
use crate::word::WordBox;
use id_arena::Arena;

/// Move every assigned word into position: each row of words is centred
/// horizontally inside its block row and aligned to the block row's top.
pub fn place(assignment: &Assignment, words: &mut Arena<WordBox>, space_width: Px) {
    for row in assignment.rows.iter() {
        let Some(left) = row.band.left else {
            // unreachable, rows without bounds have no width and never take words
            continue;
        };

        let occupied = row.occupied_width(words, space_width);
        let mut x = left + (row.band.width - occupied).half_floor();
        for &id in row.words.iter() {
            let word = &mut words[id];
            word.move_to(x, row.band.top);
            x += word.width + space_width;
        }
    }
}
