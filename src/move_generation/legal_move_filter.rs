//! Legal move filtering.
//!
//! Each pseudo-legal destination is simulated on a cloned board and rejected
//! when it leaves the mover's king attacked. The simulation moves the piece
//! and removes an en-passant victim, nothing else: promotion and the castling
//! rook shift cannot change whether the mover's own king is attacked. Castling
//! additionally requires the king's start and transit squares to be safe.

use crate::errors::ChessResult;
use crate::game_state::chess_rules::{rook_castle_col, KING_HOME_COL};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::{is_in_check, is_square_attacked};
use crate::move_generation::movement_resolver::MovementResolver;
use crate::move_generation::pseudo_legal::{castling_side_of, pseudo_legal_moves};

/// Legal destinations for whatever piece stands on `square`, regardless of
/// whose turn it is. Empty when the square is empty.
pub fn legal_moves<R: MovementResolver + ?Sized>(
    state: &GameState,
    square: Square,
    resolver: &R,
) -> ChessResult<SquareSet> {
    let Some(piece) = state.board.get(square) else {
        return Ok(SquareSet::EMPTY);
    };
    let color = piece.color;
    state.board.king_square(color)?;

    let kind = resolver.movement_kind(square, piece);
    let en_passant_target = state.live_en_passant_target();
    let candidates = pseudo_legal_moves(
        kind,
        color,
        square,
        &state.board,
        state.castling_rights,
        en_passant_target,
    );

    let mut legal = SquareSet::EMPTY;
    for to in candidates {
        if let Some(side) = castling_side_of(piece, square, to) {
            if !castling_path_is_safe(state, color, side, resolver) {
                continue;
            }
        }

        let mut board = state.board.clone();
        board.relocate(square, to);
        if let Some(victim) = en_passant_victim(state, kind, square, to) {
            board.clear(victim);
        }

        if !is_in_check(&board, color, resolver)? {
            legal.insert(to);
        }
    }

    Ok(legal)
}

/// Square of the pawn removed when a `kind` mover goes `from -> to`, if that
/// move is an en-passant capture.
pub fn en_passant_victim(
    state: &GameState,
    kind: PieceKind,
    from: Square,
    to: Square,
) -> Option<Square> {
    if kind != PieceKind::Pawn || from.col() == to.col() || state.board.get(to).is_some() {
        return None;
    }
    if state.live_en_passant_target() != Some(to) {
        return None;
    }
    state.last_move.map(|(_, landed)| landed)
}

fn castling_path_is_safe<R: MovementResolver + ?Sized>(
    state: &GameState,
    color: Color,
    side: CastlingSide,
    resolver: &R,
) -> bool {
    let row = color.home_row();
    let enemy = color.opposite();
    [KING_HOME_COL, rook_castle_col(side)]
        .iter()
        .all(|&col| !is_square_attacked(&state.board, Square::at(row, col), enemy, resolver))
}

/// Every piece of `color` paired with its legal destinations, skipping pieces
/// without any.
pub fn legal_moves_for_color<R: MovementResolver + ?Sized>(
    state: &GameState,
    color: Color,
    resolver: &R,
) -> ChessResult<Vec<(Square, SquareSet)>> {
    let mut out = Vec::new();
    for (square, _) in state.board.occupied_by(color) {
        let destinations = legal_moves(state, square, resolver)?;
        if !destinations.is_empty() {
            out.push((square, destinations));
        }
    }
    Ok(out)
}

pub fn has_any_legal_move<R: MovementResolver + ?Sized>(
    state: &GameState,
    color: Color,
    resolver: &R,
) -> ChessResult<bool> {
    for (square, _) in state.board.occupied_by(color) {
        if !legal_moves(state, square, resolver)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ChessError;
    use crate::game_state::board::Board;
    use crate::jokers::joker_assignment::JokerAssignment;
    use crate::jokers::joker_tracker::{JokerContext, JokerTracker};
    use crate::move_generation::movement_resolver::PrintedMovement;
    use crate::test_support::{board_from_diagram, sq, squares};

    fn position(rows: [&str; 8], side_to_move: Color) -> GameState {
        GameState::from_board(board_from_diagram(rows), side_to_move)
    }

    #[test]
    fn start_position_has_twenty_moves() {
        let state = GameState::new_game();
        let total: usize = legal_moves_for_color(&state, Color::White, &PrintedMovement)
            .expect("kings present")
            .iter()
            .map(|(_, destinations)| destinations.len())
            .sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn pinned_piece_may_only_move_along_the_pin() {
        let state = position(
            [
                "....k...",
                "....r...",
                "........",
                "........",
                "........",
                "........",
                "....R...",
                "....K...",
            ],
            Color::White,
        );
        let moves = legal_moves(&state, sq("e2"), &PrintedMovement).expect("kings present");
        assert_eq!(moves, squares(&["e3", "e4", "e5", "e6", "e7"]));
    }

    #[test]
    fn king_may_not_step_into_attack() {
        let state = position(
            [
                "...rk...",
                "........",
                "........",
                "........",
                "........",
                "........",
                "........",
                "....K...",
            ],
            Color::White,
        );
        let moves = legal_moves(&state, sq("e1"), &PrintedMovement).expect("kings present");
        assert_eq!(moves, squares(&["e2", "f1", "f2"]));
    }

    #[test]
    fn castling_rejected_when_start_transit_or_end_attacked() {
        let rows_with_attacker = |attacker_row: &'static str| {
            [
                "....k...",
                attacker_row,
                "........",
                "........",
                "........",
                "........",
                "........",
                "R...K..R",
            ]
        };

        let free = position(rows_with_attacker("........"), Color::White)
            .with_castling_rights(CastlingRights::all());
        let moves = legal_moves(&free, sq("e1"), &PrintedMovement).expect("kings present");
        assert!(moves.contains(sq("g1")));
        assert!(moves.contains(sq("c1")));

        // Rook on e7 checks the king: no castling at all.
        let start = position(rows_with_attacker("....r..."), Color::White)
            .with_castling_rights(CastlingRights::all());
        let moves = legal_moves(&start, sq("e1"), &PrintedMovement).expect("kings present");
        assert!(!moves.contains(sq("g1")));
        assert!(!moves.contains(sq("c1")));

        // Rook on f7 covers the kingside transit square.
        let transit = position(rows_with_attacker(".....r.."), Color::White)
            .with_castling_rights(CastlingRights::all());
        let moves = legal_moves(&transit, sq("e1"), &PrintedMovement).expect("kings present");
        assert!(!moves.contains(sq("g1")));
        assert!(moves.contains(sq("c1")));

        // Rook on c7 covers the queenside landing square.
        let end = position(rows_with_attacker("..r....."), Color::White)
            .with_castling_rights(CastlingRights::all());
        let moves = legal_moves(&end, sq("e1"), &PrintedMovement).expect("kings present");
        assert!(moves.contains(sq("g1")));
        assert!(!moves.contains(sq("c1")));

        // Rook on b7 only covers b1, which the king never crosses.
        let b_file = position(rows_with_attacker(".r......"), Color::White)
            .with_castling_rights(CastlingRights::all());
        let moves = legal_moves(&b_file, sq("e1"), &PrintedMovement).expect("kings present");
        assert!(moves.contains(sq("c1")));
    }

    #[test]
    fn en_passant_that_exposes_the_king_is_rejected() {
        let mut state = position(
            [
                "........",
                "........",
                "........",
                "K..Pp..r",
                "........",
                "........",
                "........",
                "....k...",
            ],
            Color::White,
        );
        state.en_passant_target = Some(sq("e6"));
        state.last_move = Some((sq("e7"), sq("e5")));

        let moves = legal_moves(&state, sq("d5"), &PrintedMovement).expect("kings present");
        assert_eq!(moves, squares(&["d6"]));
    }

    #[test]
    fn en_passant_offered_only_with_matching_last_move() {
        let mut state = position(
            [
                "....k...",
                "........",
                "........",
                "...Pp...",
                "........",
                "........",
                "........",
                "....K...",
            ],
            Color::White,
        );
        state.en_passant_target = Some(sq("e6"));
        state.last_move = Some((sq("e7"), sq("e5")));
        let moves = legal_moves(&state, sq("d5"), &PrintedMovement).expect("kings present");
        assert_eq!(moves, squares(&["d6", "e6"]));

        state.last_move = Some((sq("e8"), sq("f8")));
        let moves = legal_moves(&state, sq("d5"), &PrintedMovement).expect("kings present");
        assert_eq!(moves, squares(&["d6"]));
    }

    #[test]
    fn joker_moves_with_borrowed_pattern_and_respects_pins() {
        // White's c1 bishop moves like the d1 queen and vice versa.
        let board = board_from_diagram([
            "....k...",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "..BQK...",
        ]);
        let assignment = JokerAssignment::none()
            .with_swap(&board, sq("c1"), sq("d1"))
            .expect("swap");
        let tracker = JokerTracker::new();
        let context = JokerContext::new(&assignment, &tracker);
        let state = GameState::from_board(board, Color::White);

        let bishop = legal_moves(&state, sq("c1"), &context).expect("kings present");
        assert!(bishop.contains(sq("c8")));
        assert!(bishop.contains(sq("a1")));
        assert!(bishop.contains(sq("h6")));

        let queen = legal_moves(&state, sq("d1"), &context).expect("kings present");
        assert!(queen.contains(sq("h5")));
        assert!(!queen.contains(sq("d2")));
        assert!(!queen.contains(sq("d8")));
    }

    #[test]
    fn legal_moves_surface_missing_king() {
        let mut board = Board::standard();
        board.clear(sq("e1"));
        let state = GameState::from_board(board, Color::White);
        assert_eq!(
            legal_moves(&state, sq("e2"), &PrintedMovement),
            Err(ChessError::MissingKing(Color::White))
        );
    }

    #[test]
    fn every_legal_destination_keeps_the_king_safe() {
        let state = position(
            [
                "r...k..r",
                "p.ppqpb.",
                "bn..pnp.",
                "...PN...",
                ".p..P...",
                "..N..Q.p",
                "PPPBBPPP",
                "R...K..R",
            ],
            Color::White,
        )
        .with_castling_rights(CastlingRights::all());

        for (from, destinations) in
            legal_moves_for_color(&state, Color::White, &PrintedMovement).expect("kings present")
        {
            for to in destinations {
                let mut board = state.board.clone();
                board.relocate(from, to);
                assert_eq!(
                    is_in_check(&board, Color::White, &PrintedMovement),
                    Ok(false),
                    "{from}->{to} leaves the king attacked"
                );
            }
        }
    }
}
