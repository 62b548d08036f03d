//! Position builders for unit tests.
//!
//! Diagrams list rows from row 0 (Black's back rank) to row 7. Upper-case
//! letters are White, lower-case Black, `.` is empty.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub(crate) fn board_from_diagram(rows: [&str; 8]) -> Board {
    let mut board = Board::empty();
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), 8, "diagram row {row} must have 8 cells");
        for (col, ch) in line.chars().enumerate() {
            let kind = match ch.to_ascii_lowercase() {
                '.' => continue,
                'p' => PieceKind::Pawn,
                'n' => PieceKind::Knight,
                'b' => PieceKind::Bishop,
                'r' => PieceKind::Rook,
                'q' => PieceKind::Queen,
                'k' => PieceKind::King,
                other => panic!("unknown diagram cell {other:?}"),
            };
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            board.place(Square::at(row as u8, col as u8), Piece::new(kind, color));
        }
    }
    board
}

/// Square from its conventional name, e.g. `sq("e4")`.
pub(crate) fn sq(name: &str) -> Square {
    let bytes = name.as_bytes();
    assert_eq!(bytes.len(), 2, "square name {name:?}");
    let col = bytes[0] - b'a';
    let row = 8 - (bytes[1] - b'0');
    Square::at(row, col)
}

pub(crate) fn squares(names: &[&str]) -> SquareSet {
    names.iter().map(|name| sq(name)).collect()
}
