//! AI difficulty tiers.
//!
//! A tier fixes three things: how often the AI throws in a uniformly random
//! move, which selection policy it uses otherwise, and how long it pretends
//! to think before answering.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::GameError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DifficultyTier {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

/// Move-selection policy applied when the random roll does not fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Highest-value capture, else random.
    Basic,
    /// Greedy one-ply board evaluation.
    Advanced,
}

/// Bounds of the simulated thinking pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinkTime {
    pub min: Duration,
    pub max: Duration,
}

impl DifficultyTier {
    pub const ALL: [DifficultyTier; 4] = [
        DifficultyTier::Easy,
        DifficultyTier::Medium,
        DifficultyTier::Hard,
        DifficultyTier::Expert,
    ];

    #[inline]
    pub const fn random_move_probability(self) -> f64 {
        match self {
            DifficultyTier::Easy => 0.8,
            DifficultyTier::Medium => 0.4,
            DifficultyTier::Hard => 0.1,
            DifficultyTier::Expert => 0.0,
        }
    }

    #[inline]
    pub const fn policy(self) -> SelectionPolicy {
        match self {
            DifficultyTier::Easy | DifficultyTier::Medium => SelectionPolicy::Basic,
            DifficultyTier::Hard | DifficultyTier::Expert => SelectionPolicy::Advanced,
        }
    }

    pub const fn think_time(self) -> ThinkTime {
        let (min_ms, max_ms) = match self {
            DifficultyTier::Easy => (500, 1_500),
            DifficultyTier::Medium => (1_000, 2_000),
            DifficultyTier::Hard => (1_500, 3_000),
            DifficultyTier::Expert => (2_000, 4_000),
        };
        ThinkTime {
            min: Duration::from_millis(min_ms),
            max: Duration::from_millis(max_ms),
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            DifficultyTier::Easy => "easy",
            DifficultyTier::Medium => "medium",
            DifficultyTier::Hard => "hard",
            DifficultyTier::Expert => "expert",
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DifficultyTier {
    type Err = GameError;

    /// Accepts the English names and their French labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "facile" => Ok(DifficultyTier::Easy),
            "medium" | "moyen" => Ok(DifficultyTier::Medium),
            "hard" | "difficile" => Ok(DifficultyTier::Hard),
            "expert" => Ok(DifficultyTier::Expert),
            _ => Err(GameError::InvalidDifficulty(s.to_owned())),
        }
    }
}
