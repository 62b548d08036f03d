//! Terminal-oriented Unicode board renderer.
//!
//! Row 0 (rank 8) is printed first. A `*` after a piece marks one that moves
//! with a borrowed pattern under the given resolver.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::movement_resolver::MovementResolver;

const FILES: &str = "  a b c d e f g h";

/// Render the board to a Unicode string for terminal output.
pub fn render_game_state<R: MovementResolver + ?Sized>(
    game_state: &GameState,
    resolver: &R,
) -> String {
    let mut out = String::new();

    out.push_str(FILES);
    out.push('\n');

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            let square = Square::at(row, col);
            match game_state.board.get(square) {
                Some(piece) => {
                    out.push(piece.symbol());
                    if resolver.movement_kind(square, piece) != piece.kind {
                        out.push('*');
                    } else {
                        out.push(' ');
                    }
                }
                None => {
                    out.push('·');
                    out.push(' ');
                }
            }
        }

        out.push(rank);
        out.push('\n');
    }

    out.push_str(FILES);
    out
}
