//! Per-game settings.

use crate::game_state::chess_types::PieceKind;
use crate::jokers::joker_assignment::JokerPool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the joker draw. `None` draws a fresh seed, which the session
    /// records so the game can be replayed.
    pub seed: Option<u64>,

    pub joker_pool: JokerPool,

    /// Black reuses White's back-rank columns instead of drawing its own.
    pub mirror_black: bool,

    /// Kind a pawn becomes when `apply_move` is called without an explicit choice.
    pub default_promotion: PieceKind,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            joker_pool: JokerPool::BackRank,
            mirror_black: false,
            default_promotion: PieceKind::Queen,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_joker_pool(mut self, joker_pool: JokerPool) -> Self {
        self.joker_pool = joker_pool;
        self
    }

    pub fn with_mirror_black(mut self, mirror_black: bool) -> Self {
        self.mirror_black = mirror_black;
        self
    }

    pub fn with_default_promotion(mut self, kind: PieceKind) -> Self {
        self.default_promotion = kind;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_draw_from_back_rank_and_promote_to_queen() {
        let config = GameConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.joker_pool, JokerPool::BackRank);
        assert!(!config.mirror_black);
        assert_eq!(config.default_promotion, PieceKind::Queen);
    }

    #[test]
    fn builders_override_single_fields() {
        let config = GameConfig::default()
            .with_seed(7)
            .with_joker_pool(JokerPool::AnyNonKing)
            .with_mirror_black(true)
            .with_default_promotion(PieceKind::Knight);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.joker_pool, JokerPool::AnyNonKing);
        assert!(config.mirror_black);
        assert_eq!(config.default_promotion, PieceKind::Knight);
    }
}
