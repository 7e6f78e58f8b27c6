//! Errors used throughout the board engine.
//!
//! `GameError` is the single error type returned by rule-engine, engine and
//! session operations. Rejected user moves are *not* errors: they come back
//! as `CommitResult { accepted: false, .. }`. Variants here are either bad
//! external input (unparseable squares or tier names), misuse of the AI
//! request API, or a corrupted board.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Color;

pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The board has no king for this side.
    ///
    /// Boards built by `Board::standard` always carry both kings and legal
    /// play can never remove one, so this indicates a programming error in
    /// whoever assembled the board.
    MissingKing(Color),

    /// A coordinate string (for example `"i9"`) could not be parsed.
    InvalidSquare(String),

    /// A difficulty name could not be parsed.
    InvalidDifficulty(String),

    /// The game already ended; no further moves are accepted.
    GameOver,

    /// An AI move request is already in flight.
    AiAlreadyThinking,

    /// The AI was asked to move for a side that is not to move.
    NotSidesTurn(Color),

    /// The background AI worker is gone.
    WorkerUnavailable,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::MissingKing(color) => write!(f, "malformed board: no {color} king"),
            GameError::InvalidSquare(text) => write!(f, "invalid square: {text}"),
            GameError::InvalidDifficulty(text) => write!(f, "invalid difficulty: {text}"),
            GameError::GameOver => write!(f, "the game is over"),
            GameError::AiAlreadyThinking => write!(f, "the AI is already thinking"),
            GameError::NotSidesTurn(color) => write!(f, "it is not {color}'s turn"),
            GameError::WorkerUnavailable => write!(f, "the AI worker is unavailable"),
        }
    }
}

impl Error for GameError {}
