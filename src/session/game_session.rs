//! A running joker-chess game.
//!
//! `GameSession` owns the position, the joker table drawn at creation, the
//! tracker that follows joker identities around the board and the turn phase
//! a presentation layer drives: select a piece, then move it or clear the
//! selection. Every rejected request comes back as a `ChessError`; the session
//! is never left half-updated.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::{ChessError, ChessResult};
use crate::game_end::game_status::{evaluate, GameStatus};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::jokers::joker_assignment::JokerAssignment;
use crate::jokers::joker_tracker::{JokerContext, JokerTracker};
use crate::move_generation::legal_move_apply::{apply_move, MoveOutcome};
use crate::move_generation::legal_move_filter::legal_moves;
use crate::session::game_config::GameConfig;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingSelection,
    Selected {
        square: Square,
        destinations: SquareSet,
    },
    /// Reached after a game-ending move, or at once for a terminal custom position.
    Finished(GameStatus),
}

#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    assignment: JokerAssignment,
    tracker: JokerTracker,
    config: GameConfig,
    seed: Option<u64>,
    phase: TurnPhase,
    history: Vec<MoveOutcome>,
}

impl GameSession {
    /// Standard start with jokers drawn from `seed`, or from a fresh seed.
    pub fn new_game(seed: Option<u64>) -> ChessResult<Self> {
        Self::with_config(GameConfig {
            seed,
            ..GameConfig::default()
        })
    }

    pub fn with_config(config: GameConfig) -> ChessResult<Self> {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);
        let state = GameState::new_game();
        let assignment = JokerAssignment::draw(
            &state.board,
            config.joker_pool,
            config.mirror_black,
            &mut rng,
        )?;

        let session = Self {
            state,
            assignment,
            tracker: JokerTracker::new(),
            config,
            seed: Some(seed),
            phase: TurnPhase::AwaitingSelection,
            history: Vec::new(),
        };
        info!("new joker chess game, seed {seed}");
        for line in session.describe_jokers() {
            debug!("{line}");
        }
        Ok(session)
    }

    /// Session over an arbitrary position and joker table, with no seed.
    ///
    /// Fails with `MissingKing` unless both colors have exactly one king.
    pub fn from_parts(state: GameState, assignment: JokerAssignment) -> ChessResult<Self> {
        for color in Color::ALL {
            state.board.king_square(color)?;
        }

        let tracker = JokerTracker::new();
        let status = evaluate(&state, &JokerContext::new(&assignment, &tracker))?;
        let phase = if status.is_over() {
            TurnPhase::Finished(status)
        } else {
            TurnPhase::AwaitingSelection
        };

        Ok(Self {
            state,
            assignment,
            tracker,
            config: GameConfig::default(),
            seed: None,
            phase,
            history: Vec::new(),
        })
    }

    fn context(&self) -> JokerContext<'_> {
        JokerContext::new(&self.assignment, &self.tracker)
    }

    /// Legal destinations of the piece on `square`.
    ///
    /// Empty when the square is empty, holds a piece of the side not on move,
    /// or the game is over.
    pub fn legal_moves(&self, square: Square) -> ChessResult<SquareSet> {
        if matches!(self.phase, TurnPhase::Finished(_)) {
            return Ok(SquareSet::EMPTY);
        }
        match self.state.board.get(square) {
            Some(piece) if piece.color == self.state.side_to_move => {
                legal_moves(&self.state, square, &self.context())
            }
            _ => Ok(SquareSet::EMPTY),
        }
    }

    /// Select the piece on `square` and return where it may go.
    pub fn select(&mut self, square: Square) -> ChessResult<SquareSet> {
        if let TurnPhase::Finished(status) = self.phase {
            return Err(ChessError::GameOver(status));
        }
        let piece = self
            .state
            .board
            .get(square)
            .ok_or(ChessError::NoPieceAtSquare(square))?;
        if piece.color != self.state.side_to_move {
            return Err(ChessError::WrongSideToMove {
                square,
                color: piece.color,
            });
        }

        let destinations = legal_moves(&self.state, square, &self.context())?;
        self.phase = TurnPhase::Selected {
            square,
            destinations,
        };
        Ok(destinations)
    }

    pub fn clear_selection(&mut self) {
        if matches!(self.phase, TurnPhase::Selected { .. }) {
            self.phase = TurnPhase::AwaitingSelection;
        }
    }

    /// Move the selected piece to `destination`, promoting to the configured default.
    pub fn move_selected(&mut self, destination: Square) -> ChessResult<MoveOutcome> {
        let from = match self.phase {
            TurnPhase::Selected { square, .. } => square,
            TurnPhase::Finished(status) => return Err(ChessError::GameOver(status)),
            TurnPhase::AwaitingSelection => return Err(ChessError::NothingSelected),
        };
        self.apply_move(from, destination)
    }

    /// Play `start -> end`, promoting to the configured default kind.
    pub fn apply_move(&mut self, start: Square, end: Square) -> ChessResult<MoveOutcome> {
        self.apply_move_with_promotion(start, end, self.config.default_promotion)
    }

    pub fn apply_move_with_promotion(
        &mut self,
        start: Square,
        end: Square,
        promotion: PieceKind,
    ) -> ChessResult<MoveOutcome> {
        self.check_move(start, end).map_err(|err| {
            warn!("rejected move {start} -> {end}: {err}");
            err
        })?;

        let mut outcome = apply_move(
            &mut self.state,
            &mut self.tracker,
            &self.assignment,
            start,
            end,
            promotion,
        )
        .map_err(|err| {
            warn!("rejected move {start} -> {end}: {err}");
            err
        })?;

        let status = evaluate(&self.state, &self.context())?;
        outcome.status = status;
        self.phase = if status.is_over() {
            TurnPhase::Finished(status)
        } else {
            TurnPhase::AwaitingSelection
        };
        debug!("{} {start} -> {end}", outcome.moved);
        self.history.push(outcome.clone());
        Ok(outcome)
    }

    fn check_move(&self, start: Square, end: Square) -> ChessResult<()> {
        if let TurnPhase::Finished(status) = self.phase {
            return Err(ChessError::GameOver(status));
        }
        let piece = self
            .state
            .board
            .get(start)
            .ok_or(ChessError::NoPieceAtSquare(start))?;
        if piece.color != self.state.side_to_move {
            return Err(ChessError::WrongSideToMove {
                square: start,
                color: piece.color,
            });
        }
        if !legal_moves(&self.state, start, &self.context())?.contains(end) {
            return Err(ChessError::IllegalDestination {
                from: start,
                to: end,
            });
        }
        Ok(())
    }

    /// One line per joker identity, White first, e.g.
    /// `White joker #1: Knight on b1 moves like a Bishop (now on c3)`.
    pub fn describe_jokers(&self) -> Vec<String> {
        self.assignment
            .identities()
            .iter()
            .map(|identity| {
                let whereabouts = match self.tracker.location_of(&self.assignment, identity.id) {
                    Some(square) if square == identity.origin => "at home".to_owned(),
                    Some(square) => format!("now on {square}"),
                    None => "out of play".to_owned(),
                };
                format!(
                    "{} joker #{}: {} on {} moves like a {} ({whereabouts})",
                    identity.id.color,
                    identity.id.slot + 1,
                    identity.printed,
                    identity.origin,
                    identity.movement,
                )
            })
            .collect()
    }

    /// Movement kind the piece on `square` uses, if any piece stands there.
    pub fn effective_movement_type(&self, square: Square) -> Option<PieceKind> {
        let piece = self.state.board.get(square)?;
        Some(
            self.context()
                .effective_movement_type(square, piece.color)
                .unwrap_or(piece.kind),
        )
    }

    pub fn snapshot(&self) -> &Board {
        &self.state.board
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        match self.phase {
            TurnPhase::Finished(status) => status,
            _ => GameStatus::InProgress,
        }
    }

    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    /// Seed the jokers were drawn from; `None` for sessions built from parts.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn assignment(&self) -> &JokerAssignment {
        &self.assignment
    }

    pub fn tracker(&self) -> &JokerTracker {
        &self.tracker
    }

    /// Completed moves, oldest first.
    pub fn history(&self) -> &[MoveOutcome] {
        &self.history
    }

    pub fn render(&self) -> String {
        render_game_state(&self.state, &self.context())
    }
}
