//! Move application with every side effect: captures (including en passant),
//! promotion, the castling rook shift, castling-right revocation, the
//! en-passant target, move counters and joker relocation/extinction.
//!
//! No king-safety check happens here; callers pass moves already taken from
//! the legal destination set. Inputs that cannot be applied at all (a bad
//! promotion kind, castling without the rook at home) are rejected before
//! the position is touched.

use crate::errors::{ChessError, ChessResult};
use crate::game_end::game_status::GameStatus;
use crate::game_state::chess_rules::{rook_castle_col, rook_home_col};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::jokers::joker_assignment::JokerAssignment;
use crate::jokers::joker_tracker::{JokerContext, JokerEvent, JokerTracker};
use crate::move_generation::legal_move_filter::en_passant_victim;
use crate::move_generation::movement_resolver::MovementResolver;
use crate::move_generation::pseudo_legal::castling_side_of;

/// What a completed move did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: Square,
    pub to: Square,
    pub moved: Piece,
    /// Movement kind the piece used for this move.
    pub moved_as: PieceKind,
    pub captured: Option<Piece>,
    pub promotion: Option<PieceKind>,
    pub castling: Option<CastlingSide>,
    /// Square of the pawn removed by an en-passant capture.
    pub en_passant_capture: Option<Square>,
    pub joker_events: Vec<JokerEvent>,
    /// Game status for the side now on move. Filled in by the session.
    pub status: GameStatus,
}

pub fn apply_move(
    state: &mut GameState,
    tracker: &mut JokerTracker,
    assignment: &JokerAssignment,
    from: Square,
    to: Square,
    promotion: PieceKind,
) -> ChessResult<MoveOutcome> {
    let piece = state
        .board
        .get(from)
        .ok_or(ChessError::NoPieceAtSquare(from))?;
    let color = piece.color;

    let promotes = piece.kind == PieceKind::Pawn && to.row() == color.promotion_row();
    if promotes && !promotion.is_promotion_target() {
        return Err(ChessError::InvalidPromotion(promotion));
    }

    let moved_as = JokerContext::new(assignment, tracker).movement_kind(from, piece);
    let castling = castling_side_of(piece, from, to);
    if let Some(side) = castling {
        let rook_home = Square::at(color.home_row(), rook_home_col(side));
        if state.board.get(rook_home) != Some(Piece::new(PieceKind::Rook, color)) {
            return Err(ChessError::IllegalDestination { from, to });
        }
    }
    let en_passant_capture = en_passant_victim(state, moved_as, from, to);

    let captured_on = en_passant_capture.unwrap_or(to);
    let captured = match en_passant_capture {
        Some(victim) => state.board.clear(victim),
        None => None,
    };
    let captured = state.board.relocate(from, to).or(captured);

    if promotes {
        state.board.place(to, Piece::new(promotion, color));
    }

    let mut joker_events = tracker.record_move(
        assignment,
        piece,
        from,
        to,
        captured.map(|victim| (captured_on, victim)),
        promotes,
    );

    if let Some(side) = castling {
        let row = color.home_row();
        let rook_from = Square::at(row, rook_home_col(side));
        let rook_to = Square::at(row, rook_castle_col(side));
        state.board.relocate(rook_from, rook_to);
        let rook = Piece::new(PieceKind::Rook, color);
        joker_events.extend(tracker.record_move(assignment, rook, rook_from, rook_to, None, false));
    }

    update_castling_rights(state, piece, from, to);

    let double_step = moved_as == PieceKind::Pawn
        && from.col() == to.col()
        && from.row().abs_diff(to.row()) == 2;
    state.en_passant_target = if double_step {
        Some(Square::at((from.row() + to.row()) / 2, from.col()))
    } else {
        None
    };
    state.last_move = Some((from, to));

    if moved_as == PieceKind::Pawn || piece.kind == PieceKind::Pawn || captured.is_some() {
        state.halfmove_clock = 0;
    } else {
        state.halfmove_clock = state.halfmove_clock.saturating_add(1);
    }
    if color == Color::Black {
        state.fullmove_number = state.fullmove_number.saturating_add(1);
    }
    state.side_to_move = color.opposite();

    Ok(MoveOutcome {
        from,
        to,
        moved: piece,
        moved_as,
        captured,
        promotion: promotes.then_some(promotion),
        castling,
        en_passant_capture,
        joker_events,
        status: GameStatus::InProgress,
    })
}

fn update_castling_rights(state: &mut GameState, moved: Piece, from: Square, to: Square) {
    if moved.kind == PieceKind::King {
        state.castling_rights.revoke_all(moved.color);
    }

    // Anything leaving or landing on a rook's home square ends that right.
    for color in Color::ALL {
        for side in CastlingSide::ALL {
            let rook_home = Square::at(color.home_row(), rook_home_col(side));
            if from == rook_home || to == rook_home {
                state.castling_rights.revoke(color, side);
            }
        }
    }
}
