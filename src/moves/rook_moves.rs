use crate::game_state::chess_types::{Square, SquareSet};

/// Squares a rook on `square` reaches, stopping on (and including) the first
/// occupied square of each ray.
#[inline]
pub fn rook_rays(square: Square, occupancy: u64) -> SquareSet {
    let mut reach = 0u64;

    reach |= trace_ray(square, 0, 1, occupancy);
    reach |= trace_ray(square, 0, -1, occupancy);
    reach |= trace_ray(square, 1, 0, occupancy);
    reach |= trace_ray(square, -1, 0, occupancy);

    SquareSet::from_bits(reach)
}

pub(crate) fn trace_ray(square: Square, row_step: i32, col_step: i32, occupancy: u64) -> u64 {
    let mut row = square.row() as i32 + row_step;
    let mut col = square.col() as i32 + col_step;
    let mut reach = 0u64;

    while (0..8).contains(&row) && (0..8).contains(&col) {
        let bit = 1u64 << (row * 8 + col);
        reach |= bit;

        if (occupancy & bit) != 0 {
            break;
        }

        row += row_step;
        col += col_step;
    }

    reach
}
