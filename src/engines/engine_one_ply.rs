//! Single-ply evaluation engine ("advanced" policy).
//!
//! Plays each candidate on a scratch board, scores the result with a
//! `BoardScorer` from the mover's perspective, takes the move back, and keeps
//! the strictly best score seen so far. There is no reply search: the
//! opponent's answer is never considered.

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::GameResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move};
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::search::board_scoring::{BoardScorer, PositionalScorer};

/// Best candidate by post-move score. The first candidate wins ties because
/// replacement needs a strictly higher score.
pub fn pick_best_evaluated<S: BoardScorer + ?Sized>(
    board: &Board,
    side: Color,
    candidates: &[Move],
    scorer: &S,
) -> Option<(Move, f64)> {
    let mut scratch = board.clone();
    let mut best: Option<(Move, f64)> = None;

    for mv in candidates {
        let Some(undo) = scratch.make_temporary(mv.from, mv.to) else {
            continue;
        };
        let score = scorer.score(&scratch, side);
        scratch.undo_temporary(undo);

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((*mv, score));
        }
    }
    best
}

pub struct OnePlyEngine<S: BoardScorer = PositionalScorer> {
    scorer: S,
}

impl OnePlyEngine<PositionalScorer> {
    pub fn new() -> Self {
        Self {
            scorer: PositionalScorer,
        }
    }
}

impl Default for OnePlyEngine<PositionalScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BoardScorer> OnePlyEngine<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }
}

impl<S: BoardScorer> Engine for OnePlyEngine<S> {
    fn name(&self) -> &str {
        "One-ply evaluator"
    }

    fn choose_move(&mut self, board: &Board, side: Color) -> GameResult<EngineOutput> {
        let legal_moves = all_legal_moves(board, side)?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string one_ply_engine legal_moves {}",
            legal_moves.len()
        ));

        if let Some((mv, score)) = pick_best_evaluated(board, side, &legal_moves, &self.scorer) {
            out.info_lines
                .push(format!("info string one_ply_engine score {score:.2}"));
            out.best_move = Some(mv);
        }
        Ok(out)
    }
}
