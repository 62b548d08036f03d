//! Pseudo-legal destination generation.
//!
//! Purely geometric: occupancy decides where a movement pattern may land, but
//! king safety is never consulted here. Castling destinations are produced
//! when rights, rook and empty path allow it; the legality filter rejects the
//! ones that pass through attacked squares.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    castle_gap_cols, castling_side_for_destination, king_castle_col, rook_home_col,
    KING_HOME_COL,
};
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_rays;
use crate::moves::king_moves::king_steps;
use crate::moves::knight_moves::knight_jumps;
use crate::moves::pawn_moves::pawn_captures;
use crate::moves::queen_moves::queen_rays;
use crate::moves::rook_moves::rook_rays;

/// Destinations for a `color` piece on `square` moving with `kind` rules.
pub fn pseudo_legal_moves(
    kind: PieceKind,
    color: Color,
    square: Square,
    board: &Board,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
) -> SquareSet {
    let own = board.occupancy(color);

    match kind {
        PieceKind::Pawn => pawn_destinations(color, square, board, en_passant_target),
        PieceKind::King => {
            let steps = SquareSet::from_bits(king_steps(square).bits() & !own);
            steps | castling_destinations(color, square, board, castling_rights)
        }
        _ => {
            let reach = attacks(kind, color, square, board.occupancy_all());
            SquareSet::from_bits(reach.bits() & !own)
        }
    }
}

/// Squares a `color` piece on `square` moving with `kind` rules would capture on.
///
/// Pawn movement attacks both forward diagonals whatever stands there; castling
/// never attacks.
pub fn attacks(kind: PieceKind, color: Color, square: Square, occupancy: u64) -> SquareSet {
    match kind {
        PieceKind::Pawn => pawn_captures(color, square),
        PieceKind::Knight => knight_jumps(square),
        PieceKind::Bishop => bishop_rays(square, occupancy),
        PieceKind::Rook => rook_rays(square, occupancy),
        PieceKind::Queen => queen_rays(square, occupancy),
        PieceKind::King => king_steps(square),
    }
}

fn pawn_destinations(
    color: Color,
    square: Square,
    board: &Board,
    en_passant_target: Option<Square>,
) -> SquareSet {
    let mut out = SquareSet::EMPTY;
    let forward = color.forward();

    if let Some(one) = square.offset(forward, 0) {
        if board.get(one).is_none() {
            out.insert(one);

            if square.row() == color.pawn_row() {
                if let Some(two) = one.offset(forward, 0) {
                    if board.get(two).is_none() {
                        out.insert(two);
                    }
                }
            }
        }
    }

    let enemy = board.occupancy(color.opposite());
    for target in pawn_captures(color, square) {
        if (enemy & target.bit()) != 0 {
            out.insert(target);
        } else if en_passant_target == Some(target) && square.row() == color.en_passant_row() {
            out.insert(target);
        }
    }

    out
}

fn castling_destinations(
    color: Color,
    square: Square,
    board: &Board,
    castling_rights: CastlingRights,
) -> SquareSet {
    let row = color.home_row();
    let mut out = SquareSet::EMPTY;

    if square != Square::at(row, KING_HOME_COL)
        || board.get(square) != Some(Piece::new(PieceKind::King, color))
    {
        return out;
    }

    for side in CastlingSide::ALL {
        if !castling_rights.has(color, side) {
            continue;
        }
        let rook_home = Square::at(row, rook_home_col(side));
        if board.get(rook_home) != Some(Piece::new(PieceKind::Rook, color)) {
            continue;
        }
        let path_clear = castle_gap_cols(side)
            .iter()
            .all(|&col| board.get(Square::at(row, col)).is_none());
        if path_clear {
            out.insert(Square::at(row, king_castle_col(side)));
        }
    }

    out
}

/// Castling side when `piece` moving `from -> to` is a king castling.
pub fn castling_side_of(piece: Piece, from: Square, to: Square) -> Option<CastlingSide> {
    let home = Square::at(piece.color.home_row(), KING_HOME_COL);
    if piece.kind != PieceKind::King || from != home || to.row() != from.row() {
        return None;
    }
    if from.col().abs_diff(to.col()) != 2 {
        return None;
    }
    castling_side_for_destination(to.col())
}
