//! Square and move conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`, `e2e4`) and the
//! row/column squares used on the board, where row 0 is rank 8.

use crate::errors::{GameError, GameResult};
use crate::game_state::chess_types::{Move, Square};

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(text: &str) -> GameResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(GameError::InvalidSquare(text.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(GameError::InvalidSquare(text.to_owned()));
    }

    Ok(Square {
        row: b'8' - rank,
        col: file - b'a',
    })
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file = char::from(b'a' + square.col);
    let rank = char::from(b'8' - square.row);
    format!("{file}{rank}")
}

/// Parse a coordinate move such as `e2e4`. Surrounding whitespace and an
/// optional separator (`e2-e4`, `e2 e4`) are accepted.
pub fn parse_coordinate_move(text: &str) -> GameResult<Move> {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(GameError::InvalidSquare(text.trim().to_owned()));
    }
    let from = algebraic_to_square(&compact[..2])?;
    let to = algebraic_to_square(&compact[2..])?;
    Ok(Move::new(from, to))
}

pub fn move_to_algebraic(mv: Move) -> String {
    format!(
        "{}{}",
        square_to_algebraic(mv.from),
        square_to_algebraic(mv.to)
    )
}
