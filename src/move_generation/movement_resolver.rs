//! Seam between the legality engine and joker resolution.
//!
//! Every query that generates moves for a piece first asks a resolver which
//! kind's movement rules apply to it. The joker table implements this for
//! the variant; [`PrintedMovement`] gives orthodox chess and serves as a
//! reference for verification.

use crate::game_state::chess_types::{Piece, PieceKind, Square};

pub trait MovementResolver {
    /// Kind whose movement rules apply to `piece` standing on `square`.
    fn movement_kind(&self, square: Square, piece: Piece) -> PieceKind;
}

/// Every piece moves as printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintedMovement;

impl MovementResolver for PrintedMovement {
    #[inline]
    fn movement_kind(&self, _square: Square, piece: Piece) -> PieceKind {
        piece.kind
    }
}
