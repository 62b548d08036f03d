//! Joker assignment: the per-game table of swapped movement identities.
//!
//! For each color two pieces exchange movement rules with each other while
//! keeping their printed kind. The table is drawn once when a game starts and
//! never changes afterwards; where each identity currently stands is tracked
//! separately by [`JokerTracker`](crate::jokers::joker_tracker::JokerTracker).

use log::warn;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{JOKER_ELIGIBLE_COLS, JOKER_ELIGIBLE_KINDS};
use crate::game_state::chess_types::*;

/// Names one joker identity: its owner and whether it was the first or second
/// half of that owner's swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JokerId {
    pub color: Color,
    pub slot: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JokerIdentity {
    pub id: JokerId,
    /// Square the carrying piece stood on when the game started.
    pub origin: Square,
    /// Kind the piece looks like, is captured as and counts as for material.
    pub printed: PieceKind,
    /// Kind whose movement rules the piece uses.
    pub movement: PieceKind,
}

/// Where joker identities may be drawn from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JokerPool {
    /// Two of the seven non-king back-rank pieces with different printed kinds.
    #[default]
    BackRank,
    /// Two distinct kinds among pawn, knight, bishop, rook and queen, then one
    /// random piece of each kind.
    AnyNonKing,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JokerAssignment {
    identities: Vec<JokerIdentity>,
}

impl JokerAssignment {
    /// An assignment without jokers: every piece moves as printed.
    pub fn none() -> Self {
        Self::default()
    }

    /// Draw both colors' swaps from `pool` using `rng`.
    ///
    /// With `mirror_black` and the back-rank pool Black reuses White's columns.
    pub fn draw<R: Rng + ?Sized>(
        board: &Board,
        pool: JokerPool,
        mirror_black: bool,
        rng: &mut R,
    ) -> ChessResult<Self> {
        let mut assignment = Self::none();
        let mut white_pair: Option<(Square, Square)> = None;

        for color in Color::ALL {
            let pair = match (pool, color, white_pair) {
                (JokerPool::BackRank, Color::Black, Some((a, b))) if mirror_black => {
                    let row = Color::Black.home_row();
                    Some((Square::at(row, a.col()), Square::at(row, b.col())))
                }
                (JokerPool::BackRank, _, _) => draw_back_rank_pair(board, color, rng),
                (JokerPool::AnyNonKing, _, _) => draw_army_pair(board, color, rng),
            };

            let Some((first, second)) = pair else {
                warn!("no joker candidates for {color}; its pieces keep printed movement");
                continue;
            };
            if color == Color::White {
                white_pair = Some((first, second));
            }
            assignment = assignment.with_swap(board, first, second)?;
        }

        Ok(assignment)
    }

    /// Add a swap between the pieces on `first` and `second`.
    ///
    /// Both squares must hold non-king pieces of the same color with different
    /// printed kinds, and that color must not have a swap yet.
    pub fn with_swap(mut self, board: &Board, first: Square, second: Square) -> ChessResult<Self> {
        let invalid = ChessError::InvalidJokerSwap { first, second };
        let (Some(a), Some(b)) = (board.get(first), board.get(second)) else {
            return Err(invalid);
        };
        if first == second
            || a.color != b.color
            || a.kind == b.kind
            || a.kind == PieceKind::King
            || b.kind == PieceKind::King
            || self.for_color(a.color).next().is_some()
        {
            return Err(invalid);
        }

        let color = a.color;
        self.identities.push(JokerIdentity {
            id: JokerId { color, slot: 0 },
            origin: first,
            printed: a.kind,
            movement: b.kind,
        });
        self.identities.push(JokerIdentity {
            id: JokerId { color, slot: 1 },
            origin: second,
            printed: b.kind,
            movement: a.kind,
        });
        self.identities.sort_by_key(|identity| identity.id);
        Ok(self)
    }

    /// All identities, White first, each color in slot order.
    pub fn identities(&self) -> &[JokerIdentity] {
        &self.identities
    }

    pub fn for_color(&self, color: Color) -> impl Iterator<Item = &JokerIdentity> + '_ {
        self.identities.iter().filter(move |identity| identity.id.color == color)
    }

    pub fn get(&self, id: JokerId) -> Option<&JokerIdentity> {
        self.identities.iter().find(|identity| identity.id == id)
    }

    /// Identity of `color` whose starting square is `square`.
    pub fn originating_at(&self, square: Square, color: Color) -> Option<&JokerIdentity> {
        self.for_color(color).find(|identity| identity.origin == square)
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}

fn draw_back_rank_pair<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    rng: &mut R,
) -> Option<(Square, Square)> {
    let row = color.home_row();
    let candidates: Vec<(Square, PieceKind)> = JOKER_ELIGIBLE_COLS
        .iter()
        .map(|&col| Square::at(row, col))
        .filter_map(|square| match board.get(square) {
            Some(piece) if piece.color == color && piece.kind != PieceKind::King => {
                Some((square, piece.kind))
            }
            _ => None,
        })
        .collect();

    let pairs: Vec<(Square, Square)> = candidates
        .iter()
        .enumerate()
        .flat_map(|(i, &(a, kind_a))| {
            candidates[i + 1..]
                .iter()
                .filter(move |&&(_, kind_b)| kind_b != kind_a)
                .map(move |&(b, _)| (a, b))
        })
        .collect();

    pairs.choose(rng).copied()
}

fn draw_army_pair<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    rng: &mut R,
) -> Option<(Square, Square)> {
    let squares_of = |kind: PieceKind| -> Vec<Square> {
        board
            .occupied_by(color)
            .filter(|(_, piece)| piece.kind == kind)
            .map(|(square, _)| square)
            .collect()
    };

    let present: Vec<PieceKind> = JOKER_ELIGIBLE_KINDS
        .iter()
        .copied()
        .filter(|&kind| !squares_of(kind).is_empty())
        .collect();
    let kinds: Vec<PieceKind> = present.choose_multiple(rng, 2).copied().collect();
    if kinds.len() < 2 {
        return None;
    }

    let first = *squares_of(kinds[0]).choose(rng)?;
    let second = *squares_of(kinds[1]).choose(rng)?;
    Some((first, second))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn back_rank_draw_swaps_two_distinct_kinds_per_color() {
        let board = Board::standard();
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let assignment = JokerAssignment::draw(&board, JokerPool::BackRank, false, &mut rng)
                .expect("standard board always has joker candidates");

            for color in Color::ALL {
                let pair: Vec<&JokerIdentity> = assignment.for_color(color).collect();
                assert_eq!(pair.len(), 2);
                for identity in &pair {
                    assert_eq!(identity.origin.row(), color.home_row());
                    assert!(JOKER_ELIGIBLE_COLS.contains(&identity.origin.col()));
                    assert_ne!(identity.movement, identity.printed);
                }
                assert_eq!(pair[0].movement, pair[1].printed);
                assert_eq!(pair[1].movement, pair[0].printed);
            }
        }
    }

    #[test]
    fn same_seed_gives_same_assignment() {
        let board = Board::standard();
        let a = JokerAssignment::draw(
            &board,
            JokerPool::BackRank,
            false,
            &mut StdRng::seed_from_u64(99),
        )
        .expect("draw");
        let b = JokerAssignment::draw(
            &board,
            JokerPool::BackRank,
            false,
            &mut StdRng::seed_from_u64(99),
        )
        .expect("draw");
        assert_eq!(a, b);
    }

    #[test]
    fn mirrored_draw_reuses_white_columns() {
        let board = Board::standard();
        let mut rng = StdRng::seed_from_u64(5);
        let assignment =
            JokerAssignment::draw(&board, JokerPool::BackRank, true, &mut rng).expect("draw");
        let white: Vec<u8> = assignment
            .for_color(Color::White)
            .map(|identity| identity.origin.col())
            .collect();
        let black: Vec<u8> = assignment
            .for_color(Color::Black)
            .map(|identity| identity.origin.col())
            .collect();
        assert_eq!(white, black);
    }

    #[test]
    fn army_draw_picks_two_distinct_non_king_kinds() {
        let board = Board::standard();
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let assignment =
                JokerAssignment::draw(&board, JokerPool::AnyNonKing, false, &mut rng)
                    .expect("draw");
            for color in Color::ALL {
                let pair: Vec<&JokerIdentity> = assignment.for_color(color).collect();
                assert_eq!(pair.len(), 2);
                assert_ne!(pair[0].printed, pair[1].printed);
                assert!(pair.iter().all(|identity| identity.printed != PieceKind::King));
            }
        }
    }

    #[test]
    fn swap_rejects_kings_same_kinds_and_mixed_colors() {
        let board = Board::standard();
        let a1 = Square::at(7, 0);
        let h1 = Square::at(7, 7);
        let e1 = Square::at(7, 4);
        let b8 = Square::at(0, 1);
        let e4 = Square::at(4, 4);

        assert!(JokerAssignment::none().with_swap(&board, a1, h1).is_err());
        assert!(JokerAssignment::none().with_swap(&board, a1, e1).is_err());
        assert!(JokerAssignment::none().with_swap(&board, a1, b8).is_err());
        assert!(JokerAssignment::none().with_swap(&board, a1, e4).is_err());

        let once = JokerAssignment::none()
            .with_swap(&board, a1, Square::at(7, 1))
            .expect("rook and knight swap");
        assert!(once
            .with_swap(&board, Square::at(7, 2), Square::at(7, 3))
            .is_err());
    }
}
