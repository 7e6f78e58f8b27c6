//! Whole-game state: the board plus turn, check and result bookkeeping.
//!
//! `GameState` is mutated only through `commit`, which applies a validated
//! move, flips the side to move and re-derives check and game-over status.

use crate::errors::GameResult;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::NoMovePolicy;
use crate::game_state::chess_types::{CheckStatus, Color, Move, PieceKind};
use crate::move_generation::legal_move_apply::{apply_move, AppliedMove};
use crate::move_generation::legal_move_checks::check_for_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    /// The side to move had no legal move without being in check.
    NoLegalMoves { stuck: Color, winner: Option<Color> },
    /// The AI found nothing to play and concedes.
    AiConceded { winner: Color },
    /// A king was taken; only reachable when moves are not legality-filtered.
    KingCaptured { winner: Color },
}

impl GameOutcome {
    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::Checkmate { winner }
            | GameOutcome::AiConceded { winner }
            | GameOutcome::KingCaptured { winner } => Some(winner),
            GameOutcome::NoLegalMoves { winner, .. } => winner,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub check: CheckStatus,
    pub outcome: Option<GameOutcome>,
    pub ply: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard initial placement, White to move.
    pub fn new_game() -> Self {
        Self::from_board(Board::standard(), Color::White)
    }

    /// Wraps an arbitrary board. Check flags start cleared; call
    /// `refresh_status` to derive them.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            check: CheckStatus::default(),
            outcome: None,
            ply: 0,
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.outcome.and_then(GameOutcome::winner)
    }

    /// Applies an already validated move, flips the turn and refreshes status.
    ///
    /// Returns `Ok(None)` if `mv.from` is empty. On `Ok(None)` or `Err` the
    /// state is untouched.
    pub fn commit(&mut self, mv: Move, policy: NoMovePolicy) -> GameResult<Option<AppliedMove>> {
        let mut next = self.clone();
        let Some(applied) = apply_move(&mut next.board, mv) else {
            return Ok(None);
        };
        next.side_to_move = next.side_to_move.opposite();
        next.ply = next.ply.saturating_add(1);

        if applied
            .captured
            .is_some_and(|piece| piece.kind == PieceKind::King)
        {
            next.check = CheckStatus::default();
            if next.outcome.is_none() {
                next.outcome = Some(GameOutcome::KingCaptured {
                    winner: applied.color,
                });
            }
        } else {
            next.refresh_status(policy)?;
        }

        *self = next;
        Ok(Some(applied))
    }

    /// Re-derives check flags and, for the side to move, mate or a dead end.
    pub fn refresh_status(&mut self, policy: NoMovePolicy) -> GameResult<()> {
        self.check = check_for_check(&self.board)?;
        if self.outcome.is_some() {
            return Ok(());
        }

        let side = self.side_to_move;
        if has_any_legal_move(&self.board, side)? {
            return Ok(());
        }

        self.outcome = Some(if self.check.for_color(side) {
            GameOutcome::Checkmate {
                winner: side.opposite(),
            }
        } else {
            GameOutcome::NoLegalMoves {
                stuck: side,
                winner: match policy {
                    NoMovePolicy::LossForStuckSide => Some(side.opposite()),
                    NoMovePolicy::Draw => None,
                },
            }
        });
        Ok(())
    }

    /// Ends the game because `side`'s AI had no move to offer.
    pub fn concede(&mut self, side: Color) {
        if self.outcome.is_none() {
            self.outcome = Some(GameOutcome::AiConceded {
                winner: side.opposite(),
            });
        }
    }
}
