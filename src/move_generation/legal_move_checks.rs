//! Attack and check detection.
//!
//! An attacker's reach is computed from the movement kind its resolver
//! assigns, so a joker attacks with its borrowed pattern, not its printed one.

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::movement_resolver::MovementResolver;
use crate::move_generation::pseudo_legal::attacks;

pub fn is_square_attacked<R: MovementResolver + ?Sized>(
    board: &Board,
    square: Square,
    attacker_color: Color,
    resolver: &R,
) -> bool {
    let occupancy = board.occupancy_all();
    board.occupied_by(attacker_color).any(|(from, piece)| {
        let kind = resolver.movement_kind(from, piece);
        attacks(kind, attacker_color, from, occupancy).contains(square)
    })
}

/// Pieces of `attacker_color` attacking `square`.
pub fn attackers_to_square<R: MovementResolver + ?Sized>(
    board: &Board,
    square: Square,
    attacker_color: Color,
    resolver: &R,
) -> Vec<(Square, Piece)> {
    let occupancy = board.occupancy_all();
    board
        .occupied_by(attacker_color)
        .filter(|&(from, piece)| {
            let kind = resolver.movement_kind(from, piece);
            attacks(kind, attacker_color, from, occupancy).contains(square)
        })
        .collect()
}

/// Whether `color`'s king is attacked. Fails when `color` does not have exactly one king.
pub fn is_in_check<R: MovementResolver + ?Sized>(
    board: &Board,
    color: Color,
    resolver: &R,
) -> ChessResult<bool> {
    let king = board.king_square(color)?;
    Ok(is_square_attacked(board, king, color.opposite(), resolver))
}
