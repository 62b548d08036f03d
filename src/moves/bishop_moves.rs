use crate::game_state::chess_types::{Square, SquareSet};
use crate::moves::rook_moves::trace_ray;

/// Diagonal reach of a bishop on `square`, including the first blocker of each ray.
#[inline]
pub fn bishop_rays(square: Square, occupancy: u64) -> SquareSet {
    let mut reach = 0u64;

    reach |= trace_ray(square, 1, 1, occupancy);
    reach |= trace_ray(square, -1, 1, occupancy);
    reach |= trace_ray(square, 1, -1, occupancy);
    reach |= trace_ray(square, -1, -1, occupancy);

    SquareSet::from_bits(reach)
}

#[cfg(test)]
mod tests {
    use super::bishop_rays;
    use crate::game_state::chess_types::Square;

    #[test]
    fn bishop_in_corner_sees_long_diagonal() {
        assert_eq!(bishop_rays(Square::at(7, 0), 0).len(), 7);
    }

    #[test]
    fn bishop_stops_on_blocker() {
        let c1 = Square::at(7, 2);
        let e3 = Square::at(5, 4);
        let reach = bishop_rays(c1, e3.bit());
        assert!(reach.contains(Square::at(6, 3)));
        assert!(reach.contains(e3));
        assert!(!reach.contains(Square::at(4, 5)));
    }
}
