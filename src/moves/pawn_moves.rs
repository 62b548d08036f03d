//! Pawn capture patterns.
//!
//! White pawn movement heads towards row 0, Black towards row 7. Forward
//! pushes depend on occupancy and are produced by the movement generator;
//! these tables hold only the two diagonal capture squares.

use crate::game_state::chess_types::{Color, Square, SquareSet};

pub const WHITE_PAWN_CAPTURES: [u64; 64] = generate_white_pawn_captures();
pub const BLACK_PAWN_CAPTURES: [u64; 64] = generate_black_pawn_captures();

#[inline]
pub const fn pawn_captures(color: Color, square: Square) -> SquareSet {
    let bits = match color {
        Color::White => WHITE_PAWN_CAPTURES[square.index() as usize],
        Color::Black => BLACK_PAWN_CAPTURES[square.index() as usize],
    };
    SquareSet::from_bits(bits)
}

const fn generate_white_pawn_captures() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let col = sq % 8;
        let row = sq / 8;
        let mut captures = 0u64;

        if row > 0 {
            if col > 0 {
                captures |= 1u64 << (sq - 9);
            }
            if col < 7 {
                captures |= 1u64 << (sq - 7);
            }
        }

        table[sq] = captures;
        sq += 1;
    }

    table
}

const fn generate_black_pawn_captures() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let col = sq % 8;
        let row = sq / 8;
        let mut captures = 0u64;

        if row < 7 {
            if col > 0 {
                captures |= 1u64 << (sq + 7);
            }
            if col < 7 {
                captures |= 1u64 << (sq + 9);
            }
        }

        table[sq] = captures;
        sq += 1;
    }

    table
}
