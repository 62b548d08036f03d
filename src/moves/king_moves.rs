//! King step patterns.
//!
//! Precomputed one-step neighbourhoods for every square. Castling is not a
//! geometric pattern and is handled by the movement generator.

use crate::game_state::chess_types::{Square, SquareSet};

pub const KING_STEPS: [u64; 64] = generate_king_steps();

#[inline]
pub const fn king_steps(square: Square) -> SquareSet {
    SquareSet::from_bits(KING_STEPS[square.index() as usize])
}

const fn generate_king_steps() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let col = (sq % 8) as i32;
        let row = (sq / 8) as i32;
        let mut steps = 0u64;

        steps |= set_if_valid(row - 1, col - 1);
        steps |= set_if_valid(row - 1, col);
        steps |= set_if_valid(row - 1, col + 1);
        steps |= set_if_valid(row, col - 1);
        steps |= set_if_valid(row, col + 1);
        steps |= set_if_valid(row + 1, col - 1);
        steps |= set_if_valid(row + 1, col);
        steps |= set_if_valid(row + 1, col + 1);

        table[sq] = steps;
        sq += 1;
    }

    table
}

const fn set_if_valid(row: i32, col: i32) -> u64 {
    if row < 0 || row > 7 || col < 0 || col > 7 {
        return 0;
    }

    1u64 << ((row as usize) * 8 + (col as usize))
}

#[cfg(test)]
mod tests {
    use super::{king_steps, KING_STEPS};
    use crate::game_state::chess_types::Square;

    #[test]
    fn king_in_corner_has_three_steps() {
        let a1 = Square::at(7, 0);
        assert_eq!(KING_STEPS[a1.index() as usize].count_ones(), 3);
        assert_eq!(king_steps(a1).len(), 3);
    }

    #[test]
    fn king_in_centre_has_eight_steps() {
        assert_eq!(king_steps(Square::at(4, 4)).len(), 8);
    }
}
