//! Uniform random-move engine.
//!
//! Selects uniformly from legal moves; the tiered engine reuses
//! `pick_random` for its "random move" roll and as the capture fallback.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::GameResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move};
use crate::move_generation::legal_move_generator::all_legal_moves;

/// Uniform choice among `candidates`; `None` only when there are none.
#[inline]
pub fn pick_random<R: Rng + ?Sized>(candidates: &[Move], rng: &mut R) -> Option<Move> {
    candidates.choose(rng).copied()
}

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, board: &Board, side: Color) -> GameResult<EngineOutput> {
        let legal_moves = all_legal_moves(board, side)?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));
        out.best_move = pick_random(&legal_moves, &mut self.rng);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind, Square};
    use crate::move_generation::legal_move_generator::all_legal_moves;

    #[test]
    fn random_engine_only_returns_legal_moves() {
        let board = Board::standard();
        let legal = all_legal_moves(&board, Color::Black).expect("kings present");
        let mut engine = RandomEngine::with_seed(11);
        for _ in 0..32 {
            let out = engine
                .choose_move(&board, Color::Black)
                .expect("kings present");
            let mv = out.best_move.expect("black has moves");
            assert!(legal.contains(&mv));
        }
    }

    #[test]
    fn random_engine_reports_no_move_when_stuck() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::Black, Square { row: 0, col: 0 });
        board.place(PieceKind::Queen, Color::White, Square { row: 2, col: 1 });
        board.place(PieceKind::King, Color::White, Square { row: 7, col: 7 });

        let out = RandomEngine::with_seed(3)
            .choose_move(&board, Color::Black)
            .expect("kings present");
        assert_eq!(out.best_move, None);
        assert_eq!(out.info_lines, vec!["info string random_engine legal_moves 0"]);
    }
}
