//! Crate root module declarations for the Plum Board game project.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! scoring, engines, the interactive session and utility helpers) so the
//! terminal binary, tests, and benches can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod piece;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod ray_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod pseudo_legal;
}

pub mod search {
    pub mod board_scoring;
}

pub mod engines {
    pub mod difficulty;
    pub mod engine_greedy;
    pub mod engine_one_ply;
    pub mod engine_random;
    pub mod engine_tiered;
    pub mod engine_trait;
}

pub mod session {
    pub mod ai_worker;
    pub mod game_session;
    pub mod session_config;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
}
