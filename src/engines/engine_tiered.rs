//! Difficulty-tiered engine.
//!
//! Enumerates every legal move for the side, rolls the tier's random-move
//! probability, and otherwise defers to the tier's policy: capture-greedy
//! for Easy/Medium, one-ply evaluation for Hard/Expert.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::difficulty::{DifficultyTier, SelectionPolicy, ThinkTime};
use crate::engines::engine_greedy::choose_basic;
use crate::engines::engine_one_ply::pick_best_evaluated;
use crate::engines::engine_random::pick_random;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::GameResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::search::board_scoring::PositionalScorer;

pub struct TieredEngine {
    tier: DifficultyTier,
    rng: StdRng,
    scorer: PositionalScorer,
}

impl TieredEngine {
    pub fn new(tier: DifficultyTier) -> Self {
        Self::with_rng(tier, StdRng::from_os_rng())
    }

    pub fn with_seed(tier: DifficultyTier, seed: u64) -> Self {
        Self::with_rng(tier, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(tier: DifficultyTier, rng: StdRng) -> Self {
        Self {
            tier,
            rng,
            scorer: PositionalScorer,
        }
    }

    #[inline]
    pub fn tier(&self) -> DifficultyTier {
        self.tier
    }

    pub fn set_tier(&mut self, tier: DifficultyTier) {
        self.tier = tier;
    }

    /// A pause drawn uniformly from the tier's think-time bounds, scaled by
    /// `scale` (0.0 disables the pause). A NaN or negative product gives no
    /// pause; one too large for a `Duration` falls back to the upper bound.
    pub fn sample_think_time(&mut self, scale: f64) -> Duration {
        let ThinkTime { min, max } = self.tier.think_time();
        let seconds = self.rng.random_range(min.as_secs_f64()..=max.as_secs_f64());
        Duration::try_from_secs_f64((seconds * scale).max(0.0)).unwrap_or(max)
    }
}

impl Engine for TieredEngine {
    fn name(&self) -> &str {
        "Tiered"
    }

    fn choose_move(&mut self, board: &Board, side: Color) -> GameResult<EngineOutput> {
        let candidates = all_legal_moves(board, side)?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string tiered_engine tier {} legal_moves {}",
            self.tier,
            candidates.len()
        ));
        if candidates.is_empty() {
            out.info_lines
                .push("info string tiered_engine no_move".to_owned());
            return Ok(out);
        }

        let p = self.tier.random_move_probability();
        if p > 0.0 && self.rng.random_bool(p) {
            out.info_lines
                .push("info string tiered_engine policy random".to_owned());
            out.best_move = pick_random(&candidates, &mut self.rng);
            return Ok(out);
        }

        out.best_move = match self.tier.policy() {
            SelectionPolicy::Basic => {
                out.info_lines
                    .push("info string tiered_engine policy basic".to_owned());
                choose_basic(board, &candidates, &mut self.rng, &mut out.info_lines)
            }
            SelectionPolicy::Advanced => {
                out.info_lines
                    .push("info string tiered_engine policy advanced".to_owned());
                pick_best_evaluated(board, side, &candidates, &self.scorer).map(|(mv, score)| {
                    out.info_lines
                        .push(format!("info string tiered_engine score {score:.2}"));
                    mv
                })
            }
        };
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::TieredEngine;
    use crate::engines::difficulty::DifficultyTier;
    use crate::engines::engine_one_ply::pick_best_evaluated;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Move, PieceKind, Square};
    use crate::move_generation::legal_move_generator::all_legal_moves;
    use crate::search::board_scoring::PositionalScorer;
    use std::time::Duration;

    fn sq(row: u8, col: u8) -> Square {
        Square { row, col }
    }

    fn hanging_queen_board() -> Board {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::Black, sq(0, 4));
        board.place(PieceKind::King, Color::White, sq(7, 4));
        board.place(PieceKind::Bishop, Color::Black, sq(2, 2));
        board.place(PieceKind::Queen, Color::White, sq(5, 5));
        board.place(PieceKind::Pawn, Color::White, sq(6, 0));
        board
    }

    #[test]
    fn expert_always_plays_the_best_evaluated_move() {
        let board = hanging_queen_board();
        let candidates = all_legal_moves(&board, Color::Black).expect("kings present");
        let (best, _) = pick_best_evaluated(&board, Color::Black, &candidates, &PositionalScorer)
            .expect("black has moves");
        assert_eq!(best, Move::new(sq(2, 2), sq(5, 5)));

        for seed in 0..16 {
            let out = TieredEngine::with_seed(DifficultyTier::Expert, seed)
                .choose_move(&board, Color::Black)
                .expect("kings present");
            assert_eq!(out.best_move, Some(best));
            assert!(out.info_lines.iter().all(|l| !l.contains("policy random")));
        }
    }

    #[test]
    fn every_tier_returns_a_legal_move() {
        let board = Board::standard();
        let legal = all_legal_moves(&board, Color::Black).expect("kings present");
        for tier in DifficultyTier::ALL {
            let mut engine = TieredEngine::with_seed(tier, 99);
            for _ in 0..8 {
                let mv = engine
                    .choose_move(&board, Color::Black)
                    .expect("kings present")
                    .best_move
                    .expect("black has moves");
                assert!(legal.contains(&mv), "{tier}: {mv:?}");
            }
        }
    }

    #[test]
    fn easy_mostly_rolls_random_and_sometimes_captures() {
        let board = hanging_queen_board();
        let mut engine = TieredEngine::with_seed(DifficultyTier::Easy, 2024);
        let mut random_rolls = 0;
        for _ in 0..200 {
            let out = engine
                .choose_move(&board, Color::Black)
                .expect("kings present");
            if out.info_lines.iter().any(|l| l.contains("policy random")) {
                random_rolls += 1;
            } else {
                assert_eq!(out.best_move, Some(Move::new(sq(2, 2), sq(5, 5))));
            }
        }
        assert!((120..=190).contains(&random_rolls), "{random_rolls}");
    }

    #[test]
    fn stuck_side_gets_no_move() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::Black, sq(0, 0));
        board.place(PieceKind::Queen, Color::White, sq(2, 1));
        board.place(PieceKind::King, Color::White, sq(7, 7));

        let out = TieredEngine::with_seed(DifficultyTier::Hard, 0)
            .choose_move(&board, Color::Black)
            .expect("kings present");
        assert_eq!(out.best_move, None);
    }

    #[test]
    fn think_time_respects_bounds_and_scale() {
        let mut engine = TieredEngine::with_seed(DifficultyTier::Medium, 7);
        for _ in 0..20 {
            let pause = engine.sample_think_time(1.0);
            assert!(pause >= Duration::from_millis(999) && pause <= Duration::from_millis(2_001));
        }
        assert_eq!(engine.sample_think_time(0.0), Duration::ZERO);
    }

    #[test]
    fn think_time_survives_degenerate_scales() {
        let mut engine = TieredEngine::with_seed(DifficultyTier::Expert, 1);
        let max = DifficultyTier::Expert.think_time().max;
        assert_eq!(engine.sample_think_time(f64::INFINITY), max);
        assert_eq!(engine.sample_think_time(f64::MAX), max);
        assert_eq!(engine.sample_think_time(f64::NAN), Duration::ZERO);
        assert_eq!(engine.sample_think_time(-3.0), Duration::ZERO);
    }
}
