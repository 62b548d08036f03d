//! Canonical chess-rule constants.
//!
//! Static layout literals for the starting array, the columns eligible to
//! carry a joker identity and the castling geometry.

use crate::game_state::chess_types::{CastlingSide, PieceKind};

/// Back-rank layout from column 0 to column 7, identical for both colors.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_HOME_COL: u8 = 4;

/// Back-rank columns that may receive a joker identity (every column but the king's).
pub const JOKER_ELIGIBLE_COLS: [u8; 7] = [0, 1, 2, 3, 5, 6, 7];

/// Kinds that may receive a joker identity when jokers are drawn from the whole army.
pub const JOKER_ELIGIBLE_KINDS: [PieceKind; 5] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

/// Column the rook starts on for the given castling side.
#[inline]
pub const fn rook_home_col(side: CastlingSide) -> u8 {
    match side {
        CastlingSide::Kingside => 7,
        CastlingSide::Queenside => 0,
    }
}

/// Column the king lands on when castling.
#[inline]
pub const fn king_castle_col(side: CastlingSide) -> u8 {
    match side {
        CastlingSide::Kingside => 6,
        CastlingSide::Queenside => 2,
    }
}

/// Column the rook lands on when castling (the square the king passes over).
#[inline]
pub const fn rook_castle_col(side: CastlingSide) -> u8 {
    match side {
        CastlingSide::Kingside => 5,
        CastlingSide::Queenside => 3,
    }
}

/// Columns that must be empty between king and rook.
#[inline]
pub const fn castle_gap_cols(side: CastlingSide) -> &'static [u8] {
    match side {
        CastlingSide::Kingside => &[5, 6],
        CastlingSide::Queenside => &[1, 2, 3],
    }
}

/// Castling side implied by a king landing on `col` from its home square.
#[inline]
pub const fn castling_side_for_destination(col: u8) -> Option<CastlingSide> {
    match col {
        6 => Some(CastlingSide::Kingside),
        2 => Some(CastlingSide::Queenside),
        _ => None,
    }
}
