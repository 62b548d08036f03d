//! Move-path enumeration for validating move generation.
//!
//! Every node is expanded through the same legality filter and move
//! application the session uses. Pawns reaching the last row promote to a
//! queen only, so counts match the orthodox tables up to the first promotion.

use std::thread;

use crate::errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::jokers::joker_assignment::JokerAssignment;
use crate::jokers::joker_tracker::{JokerContext, JokerTracker};
use crate::move_generation::legal_move_apply::{apply_move, MoveOutcome};
use crate::move_generation::legal_move_checks::attackers_to_square;
use crate::move_generation::legal_move_filter::{has_any_legal_move, legal_moves_for_color};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub double_checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.double_checks += rhs.double_checks;
        self.checkmates += rhs.checkmates;
    }
}

/// A position reached by one move, with the joker locations after it.
struct Child {
    state: GameState,
    tracker: JokerTracker,
    outcome: MoveOutcome,
}

pub fn perft(
    state: &GameState,
    assignment: &JokerAssignment,
    tracker: &JokerTracker,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for child in children(state, assignment, tracker)? {
        perft_recurse(&child, assignment, depth, 1, &mut total)?;
    }
    Ok(total)
}

/// Same counts as [`perft`], with one scoped worker per root move.
pub fn perft_multi_threaded(
    state: &GameState,
    assignment: &JokerAssignment,
    tracker: &JokerTracker,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return perft(state, assignment, tracker, depth);
    }

    let roots = children(state, assignment, tracker)?;
    let results: Vec<ChessResult<PerftCounts>> = thread::scope(|scope| {
        let handles: Vec<_> = roots
            .iter()
            .map(|child| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    perft_recurse(child, assignment, depth, 1, &mut local).map(|_| local)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    });

    let mut total = PerftCounts::default();
    for result in results {
        total.merge(result?);
    }
    Ok(total)
}

fn children(
    state: &GameState,
    assignment: &JokerAssignment,
    tracker: &JokerTracker,
) -> ChessResult<Vec<Child>> {
    let context = JokerContext::new(assignment, tracker);
    let mut out = Vec::new();

    for (from, destinations) in legal_moves_for_color(state, state.side_to_move, &context)? {
        for to in destinations {
            let mut next_state = state.clone();
            let mut next_tracker = tracker.clone();
            let outcome = apply_move(
                &mut next_state,
                &mut next_tracker,
                assignment,
                from,
                to,
                PieceKind::Queen,
            )?;
            out.push(Child {
                state: next_state,
                tracker: next_tracker,
                outcome,
            });
        }
    }

    Ok(out)
}

fn perft_recurse(
    child: &Child,
    assignment: &JokerAssignment,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    if current_depth == search_depth {
        count_leaf(child, assignment, counts)?;
        return Ok(());
    }

    for grandchild in children(&child.state, assignment, &child.tracker)? {
        perft_recurse(&grandchild, assignment, search_depth, current_depth + 1, counts)?;
    }
    Ok(())
}

fn count_leaf(
    child: &Child,
    assignment: &JokerAssignment,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    let outcome = &child.outcome;
    counts.nodes += 1;
    if outcome.captured.is_some() {
        counts.captures += 1;
    }
    if outcome.en_passant_capture.is_some() {
        counts.en_passant += 1;
    }
    if outcome.castling.is_some() {
        counts.castles += 1;
    }
    if outcome.promotion.is_some() {
        counts.promotions += 1;
    }

    let context = JokerContext::new(assignment, &child.tracker);
    let defender = child.state.side_to_move;
    let king = child.state.board.king_square(defender)?;
    let checkers = attackers_to_square(&child.state.board, king, defender.opposite(), &context);
    if !checkers.is_empty() {
        counts.checks += 1;
        if checkers.len() > 1 {
            counts.double_checks += 1;
        }
        if !has_any_legal_move(&child.state, defender, &context)? {
            counts.checkmates += 1;
        }
    }
    Ok(())
}
