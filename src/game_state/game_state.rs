//! Position state shared by move generation, legality filtering and move
//! application.
//!
//! `GameState` owns the board together with every piece of context a legal
//! move depends on: side to move, castling rights, the en-passant target and
//! the move that produced it. Joker bookkeeping lives beside it in the session
//! because it is per-game rather than per-position.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,

    /// `(from, to)` of the immediately preceding move.
    pub last_move: Option<(Square, Square)>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            last_move: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position with full castling rights, White to move.
    pub fn new_game() -> Self {
        Self {
            board: Board::standard(),
            castling_rights: CastlingRights::all(),
            ..Self::default()
        }
    }

    /// Arbitrary position; castling rights start revoked and are granted explicitly.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            ..Self::default()
        }
    }

    pub fn with_castling_rights(mut self, castling_rights: CastlingRights) -> Self {
        self.castling_rights = castling_rights;
        self
    }

    /// En-passant target for the side to move, valid only when `last_move`
    /// is the double advance that created it.
    pub fn live_en_passant_target(&self) -> Option<Square> {
        let target = self.en_passant_target?;
        let (from, to) = self.last_move?;
        let advanced_two = from.col() == to.col() && from.row().abs_diff(to.row()) == 2;
        let passed_over = target.col() == to.col() && target.row() == (from.row() + to.row()) / 2;
        if advanced_two && passed_over {
            Some(target)
        } else {
            None
        }
    }
}
