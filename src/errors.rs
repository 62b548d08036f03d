//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type returned by board queries, move
//! generation, legality filtering and the game session. Input problems
//! (`InvalidSquare`, `NoPieceAtSquare`, `WrongSideToMove`, `IllegalDestination`,
//! `NothingSelected`, `InvalidPromotion`, `GameOver`) are meant to be shown to
//! the player by the presentation layer. `MissingKing` signals a corrupted
//! position and should be treated as a logic error in whatever built that
//! position.

use thiserror::Error;

use crate::game_end::game_status::GameStatus;
use crate::game_state::chess_types::{Color, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChessError {
    /// Coordinates outside `0..8` were supplied. Never clamped.
    #[error("square (row {row}, col {col}) is off the board")]
    InvalidSquare { row: u8, col: u8 },

    #[error("no piece on {0}")]
    NoPieceAtSquare(Square),

    /// The piece on `square` belongs to `color`, which is not on move.
    #[error("piece on {square} belongs to {color}, who is not on move")]
    WrongSideToMove { square: Square, color: Color },

    #[error("{to} is not a legal destination for the piece on {from}")]
    IllegalDestination { from: Square, to: Square },

    /// The board does not hold exactly one king of this color.
    #[error("board does not hold exactly one {0} king")]
    MissingKing(Color),

    /// A joker swap named squares that cannot exchange movement.
    #[error("cannot swap movement between {first} and {second}")]
    InvalidJokerSwap { first: Square, second: Square },

    /// `move_selected` was called without a current selection.
    #[error("no piece is selected")]
    NothingSelected,

    #[error("cannot promote to {0}")]
    InvalidPromotion(PieceKind),

    #[error("game is over: {0}")]
    GameOver(GameStatus),
}

pub type ChessResult<T> = Result<T, ChessError>;
