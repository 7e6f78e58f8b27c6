//! Pluggable board evaluation.
//!
//! Engines depend on `BoardScorer` rather than a concrete heuristic, so
//! alternate scorers can be swapped in without touching move selection.
//! Scores are real numbers from an explicit perspective: positive favors
//! `perspective`.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{pawn_start_rank, CENTER_SQUARES};
use crate::game_state::chess_types::{Color, PieceKind, Square};

pub const CENTER_BONUS: f64 = 0.5;
pub const DEVELOPMENT_BONUS: f64 = 0.2;

pub trait BoardScorer: Send + Sync {
    fn score(&self, board: &Board, perspective: Color) -> f64;
}

/// Material sum: own piece values minus opposing piece values.
pub fn material_balance(board: &Board, perspective: Color) -> f64 {
    board
        .pieces()
        .map(|piece| {
            let value = f64::from(piece.kind.value());
            if piece.color == perspective {
                value
            } else {
                -value
            }
        })
        .sum()
}

/// +0.5 per center square held by `perspective`, -0.5 per one held by the opponent.
pub fn center_control(board: &Board, perspective: Color) -> f64 {
    CENTER_SQUARES
        .iter()
        .filter_map(|square| board.get(*square))
        .map(|piece| {
            if piece.color == perspective {
                CENTER_BONUS
            } else {
                -CENTER_BONUS
            }
        })
        .sum()
}

/// Crude development proxy: +0.2 for each file whose start-rank square no
/// longer holds one of `perspective`'s pawns, -0.2 per file for the opponent.
pub fn pawn_development(board: &Board, perspective: Color) -> f64 {
    let vacated = |color: Color| -> f64 {
        let row = pawn_start_rank(color);
        (0..8u8)
            .filter(|&col| {
                !board
                    .get(Square { row, col })
                    .is_some_and(|p| p.kind == PieceKind::Pawn && p.color == color)
            })
            .count() as f64
    };
    DEVELOPMENT_BONUS * (vacated(perspective) - vacated(perspective.opposite()))
}

/// Material plus center control plus pawn development; no tables, no king safety.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer;

impl BoardScorer for PositionalScorer {
    fn score(&self, board: &Board, perspective: Color) -> f64 {
        material_balance(board, perspective)
            + center_control(board, perspective)
            + pawn_development(board, perspective)
    }
}

/// Material only. Exactly antisymmetric between the two perspectives.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board, perspective: Color) -> f64 {
        material_balance(board, perspective)
    }
}
