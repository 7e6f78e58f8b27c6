//! Session configuration owned by a `GameSession`.

use crate::engines::difficulty::DifficultyTier;
use crate::game_state::chess_rules::NoMovePolicy;
use crate::game_state::chess_types::Color;

/// The computer-controlled side and its strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiOpponent {
    pub side: Color,
    pub tier: DifficultyTier,
}

/// Which destinations are offered and accepted for human moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MoveValidation {
    /// Moves that do not leave the mover's king attacked.
    #[default]
    Legal,
    /// Free play: piece shape and occupancy only. Check still ends the game
    /// through the usual mate detection.
    PseudoLegal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// `None` is a two-player game.
    pub ai: Option<AiOpponent>,
    pub move_validation: MoveValidation,
    pub no_move_policy: NoMovePolicy,
    /// Multiplier on the tier's think-time bounds. 0.0 answers immediately.
    pub think_time_scale: f64,
    /// Seed for the AI's random choices; `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ai: Some(AiOpponent {
                side: Color::Black,
                tier: DifficultyTier::default(),
            }),
            move_validation: MoveValidation::default(),
            no_move_policy: NoMovePolicy::default(),
            think_time_scale: 1.0,
            rng_seed: None,
        }
    }
}

impl SessionConfig {
    pub fn two_player() -> Self {
        Self {
            ai: None,
            ..Self::default()
        }
    }

    pub fn against_ai(side: Color, tier: DifficultyTier) -> Self {
        Self {
            ai: Some(AiOpponent { side, tier }),
            ..Self::default()
        }
    }

    /// No thinking pause and a fixed seed; used by tests and `--instant`.
    pub fn instant(mut self, seed: u64) -> Self {
        self.think_time_scale = 0.0;
        self.rng_seed = Some(seed);
        self
    }

    #[inline]
    pub fn ai_side(&self) -> Option<Color> {
        self.ai.map(|ai| ai.side)
    }
}
