//! Game-end evaluation.
//!
//! Checkmate and stalemate are decided with the same legality filter used for
//! move selection. Insufficient material looks only at printed kinds: a knight
//! that moves like a queen still counts as a knight.
//!
//! Evaluation order for the side on move is checkmate, stalemate, then the
//! material rule. Threefold repetition and the fifty-move rule are not draws
//! in this variant.

use std::fmt;

use log::info;

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_filter::has_any_legal_move;
use crate::move_generation::movement_resolver::MovementResolver;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameStatus {
    #[default]
    InProgress,
    Checkmate {
        winner: Color,
    },
    Stalemate,
    DrawInsufficientMaterial,
}

impl GameStatus {
    #[inline]
    pub const fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::DrawInsufficientMaterial => write!(f, "draw by insufficient material"),
        }
    }
}

pub fn is_checkmate<R: MovementResolver + ?Sized>(
    state: &GameState,
    color: Color,
    resolver: &R,
) -> ChessResult<bool> {
    Ok(is_in_check(&state.board, color, resolver)?
        && !has_any_legal_move(state, color, resolver)?)
}

pub fn is_stalemate<R: MovementResolver + ?Sized>(
    state: &GameState,
    color: Color,
    resolver: &R,
) -> ChessResult<bool> {
    Ok(!is_in_check(&state.board, color, resolver)?
        && !has_any_legal_move(state, color, resolver)?)
}

/// Bare kings, or a lone king against king and a single knight or bishop.
pub fn has_insufficient_material(board: &Board) -> bool {
    let white: Vec<PieceKind> = board
        .occupied_by(Color::White)
        .map(|(_, piece)| piece.kind)
        .collect();
    let black: Vec<PieceKind> = board
        .occupied_by(Color::Black)
        .map(|(_, piece)| piece.kind)
        .collect();

    let minor_only = |army: &[PieceKind]| {
        army.len() == 2
            && army
                .iter()
                .any(|kind| matches!(kind, PieceKind::Knight | PieceKind::Bishop))
    };

    (white.len() == 1 && black.len() == 1)
        || (minor_only(&white) && black.len() == 1)
        || (minor_only(&black) && white.len() == 1)
}

/// Status of the game with `state.side_to_move` on move.
pub fn evaluate<R: MovementResolver + ?Sized>(
    state: &GameState,
    resolver: &R,
) -> ChessResult<GameStatus> {
    let color = state.side_to_move;
    let in_check = is_in_check(&state.board, color, resolver)?;
    let can_move = has_any_legal_move(state, color, resolver)?;

    let status = match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate {
            winner: color.opposite(),
        },
        (false, false) => GameStatus::Stalemate,
        _ if has_insufficient_material(&state.board) => GameStatus::DrawInsufficientMaterial,
        _ => GameStatus::InProgress,
    };

    if status.is_over() {
        info!("game over: {status}");
    }
    Ok(status)
}
