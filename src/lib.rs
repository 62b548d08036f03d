//! Crate root module declarations for the joker chess rules engine.
//!
//! This file exposes the board model, movement generation, joker identity
//! tracking, legality filtering, game-end evaluation and the game session so
//! front ends and tooling can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod jokers {
    pub mod joker_assignment;
    pub mod joker_tracker;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_filter;
    pub mod movement_resolver;
    pub mod perft;
    pub mod pseudo_legal;
}

pub mod game_end {
    pub mod game_status;
}

pub mod session {
    pub mod game_config;
    pub mod game_session;
}

pub mod utils {
    pub mod render_game_state;
}

#[cfg(test)]
mod test_support;
