//! Board model: a 64-cell mailbox of optional pieces.
//!
//! The board has no notion of legality. It answers occupancy questions for
//! the movement generator and the check detector and is cloned freely when a
//! candidate move has to be simulated.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self { cells: [None; 64] }
    }

    /// Standard starting array: Black on rows 0-1, White on rows 6-7.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            for color in Color::ALL {
                board.place(Square::at(color.home_row(), col), Piece::new(*kind, color));
                board.place(
                    Square::at(color.pawn_row(), col),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.index() as usize]
    }

    /// Put `piece` on `square`, returning whatever stood there before.
    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.cells[square.index() as usize].replace(piece)
    }

    #[inline]
    pub fn clear(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.index() as usize].take()
    }

    /// Move whatever stands on `from` to `to`, returning the piece that was on `to`.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        match self.clear(from) {
            Some(piece) => self.place(to, piece),
            None => None,
        }
    }

    /// First king of `color` in index order, if any.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.occupied_by(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    /// The square of `color`'s king, failing unless exactly one king exists.
    pub fn king_square(&self, color: Color) -> ChessResult<Square> {
        let mut kings = self
            .occupied_by(color)
            .filter(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square);
        match (kings.next(), kings.next()) {
            (Some(square), None) => Ok(square),
            _ => Err(ChessError::MissingKing(color)),
        }
    }

    /// Iterate every occupied square with its piece in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells.iter().enumerate().filter_map(|(index, cell)| {
            cell.map(|piece| (Square::at(index as u8 / 8, index as u8 % 8), piece))
        })
    }

    pub fn occupied_by(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    /// Bitmask of squares occupied by `color`.
    pub fn occupancy(&self, color: Color) -> u64 {
        self.occupied_by(color)
            .fold(0u64, |acc, (square, _)| acc | square.bit())
    }

    pub fn occupancy_all(&self) -> u64 {
        self.occupied().fold(0u64, |acc, (square, _)| acc | square.bit())
    }

    pub fn piece_count(&self, color: Color) -> usize {
        self.occupied_by(color).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_board_has_thirty_two_pieces_and_one_king_each() {
        let board = Board::standard();
        assert_eq!(board.piece_count(Color::White), 16);
        assert_eq!(board.piece_count(Color::Black), 16);
        assert_eq!(board.king_square(Color::White), Ok(Square::at(7, 4)));
        assert_eq!(board.king_square(Color::Black), Ok(Square::at(0, 4)));
        assert_eq!(
            board.get(Square::at(0, 3)),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
    }

    #[test]
    fn place_clear_and_get_round_trip() {
        let mut board = Board::empty();
        let e4 = Square::at(4, 4);
        let knight = Piece::new(PieceKind::Knight, Color::White);
        assert_eq!(board.place(e4, knight), None);
        assert_eq!(board.get(e4), Some(knight));
        assert_eq!(board.clear(e4), Some(knight));
        assert_eq!(board.get(e4), None);
    }

    #[test]
    fn king_square_reports_missing_and_duplicate_kings() {
        let mut board = Board::empty();
        assert_eq!(
            board.king_square(Color::White),
            Err(ChessError::MissingKing(Color::White))
        );
        assert_eq!(board.find_king(Color::White), None);

        let king = Piece::new(PieceKind::King, Color::White);
        board.place(Square::at(7, 4), king);
        board.place(Square::at(5, 5), king);
        assert_eq!(
            board.king_square(Color::White),
            Err(ChessError::MissingKing(Color::White))
        );
        assert!(board.find_king(Color::White).is_some());
    }

    #[test]
    fn occupancy_masks_split_by_color() {
        let board = Board::standard();
        assert_eq!(board.occupancy(Color::Black), 0x0000_0000_0000_FFFF);
        assert_eq!(board.occupancy(Color::White), 0xFFFF_0000_0000_0000);
        assert_eq!(board.occupancy_all().count_ones(), 32);
    }
}
