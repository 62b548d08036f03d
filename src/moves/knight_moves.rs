use crate::game_state::chess_types::{Square, SquareSet};

pub const KNIGHT_JUMPS: [u64; 64] = generate_knight_jumps();

#[inline]
pub const fn knight_jumps(square: Square) -> SquareSet {
    SquareSet::from_bits(KNIGHT_JUMPS[square.index() as usize])
}

const fn generate_knight_jumps() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let col = (sq % 8) as i32;
        let row = (sq / 8) as i32;
        let mut jumps = 0u64;

        jumps |= set_if_valid(row + 2, col + 1);
        jumps |= set_if_valid(row + 1, col + 2);
        jumps |= set_if_valid(row - 1, col + 2);
        jumps |= set_if_valid(row - 2, col + 1);
        jumps |= set_if_valid(row - 2, col - 1);
        jumps |= set_if_valid(row - 1, col - 2);
        jumps |= set_if_valid(row + 1, col - 2);
        jumps |= set_if_valid(row + 2, col - 1);

        table[sq] = jumps;
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
    use super::knight_jumps;
    use crate::game_state::chess_types::Square;

    #[test]
    fn knight_in_centre_has_eight_jumps() {
        assert_eq!(knight_jumps(Square::at(4, 3)).len(), 8);
    }

    #[test]
    fn knight_on_b1_reaches_a3_c3_d2() {
        let jumps = knight_jumps(Square::at(7, 1));
        assert_eq!(jumps.len(), 3);
        assert!(jumps.contains(Square::at(5, 0)));
        assert!(jumps.contains(Square::at(5, 2)));
        assert!(jumps.contains(Square::at(6, 3)));
    }
}
