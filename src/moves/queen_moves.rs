use crate::game_state::chess_types::{Square, SquareSet};
use crate::moves::bishop_moves::bishop_rays;
use crate::moves::rook_moves::rook_rays;

#[inline]
pub fn queen_rays(square: Square, occupancy: u64) -> SquareSet {
    bishop_rays(square, occupancy) | rook_rays(square, occupancy)
}

#[cfg(test)]
mod tests {
    use super::queen_rays;
    use crate::game_state::chess_types::Square;

    #[test]
    fn queen_on_d4_reaches_twenty_seven_squares() {
        assert_eq!(queen_rays(Square::at(4, 3), 0).len(), 27);
    }

    #[test]
    fn queen_reach_matches_union_with_blockers() {
        let d4 = Square::at(4, 3);
        let d6 = Square::at(2, 3);
        let g4 = Square::at(4, 6);
        let reach = queen_rays(d4, d6.bit() | g4.bit());

        assert!(reach.contains(d6));
        assert!(reach.contains(g4));
        assert!(!reach.contains(Square::at(1, 3)));
        assert!(!reach.contains(Square::at(4, 7)));
    }
}
