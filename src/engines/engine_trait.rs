//! Engine abstraction layer used by the game session and its AI worker.
//!
//! Defines the common output payload so the random, capture-greedy,
//! one-ply and tiered strategies can be selected at runtime behind a single
//! trait interface.

use crate::errors::GameResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineOutput {
    /// `None` means `side` has no legal move at all.
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Picks a move for `side` on `board`. The board is never modified.
    fn choose_move(&mut self, board: &Board, side: Color) -> GameResult<EngineOutput>;
}
