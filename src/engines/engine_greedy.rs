//! Capture-greedy engine ("basic" policy).
//!
//! Takes the most valuable piece it can; with nothing to capture it plays a
//! uniformly random legal move.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_random::pick_random;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::GameResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move};
use crate::move_generation::legal_move_generator::all_legal_moves;

/// The capture of the highest-valued occupant, first in scan order on ties.
///
/// `None` when no candidate lands on an occupied square.
pub fn pick_best_capture(board: &Board, candidates: &[Move]) -> Option<(Move, u32)> {
    let mut best: Option<(Move, u32)> = None;
    for mv in candidates {
        let Some(victim) = board.get(mv.to) else {
            continue;
        };
        let value = victim.kind.value();
        if best.map_or(true, |(_, best_value)| value > best_value) {
            best = Some((*mv, value));
        }
    }
    best
}

/// Basic policy over a prepared candidate list.
pub fn choose_basic<R: Rng + ?Sized>(
    board: &Board,
    candidates: &[Move],
    rng: &mut R,
    info_lines: &mut Vec<String>,
) -> Option<Move> {
    match pick_best_capture(board, candidates) {
        Some((mv, value)) => {
            info_lines.push(format!("info string greedy_engine capture_value {value}"));
            Some(mv)
        }
        None => {
            info_lines.push("info string greedy_engine no_capture fallback random".to_owned());
            pick_random(candidates, rng)
        }
    }
}

pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
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

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn choose_move(&mut self, board: &Board, side: Color) -> GameResult<EngineOutput> {
        let legal_moves = all_legal_moves(board, side)?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string greedy_engine legal_moves {}",
            legal_moves.len()
        ));
        if legal_moves.is_empty() {
            return Ok(out);
        }

        out.best_move = choose_basic(board, &legal_moves, &mut self.rng, &mut out.info_lines);
        Ok(out)
    }
}
