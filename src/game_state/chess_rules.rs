//! Canonical rule constants for the 8x8 board.
//!
//! Row 0 is Black's back rank and row 7 is White's; pawns of each side start
//! one row in front of their back rank and promote on the opposite back rank.

use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Back-rank order from column 0 to column 7.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The four center squares that earn a positional bonus.
pub const CENTER_SQUARES: [Square; 4] = [
    Square { row: 3, col: 3 },
    Square { row: 3, col: 4 },
    Square { row: 4, col: 3 },
    Square { row: 4, col: 4 },
];

/// Message shown when a pawn is queened.
pub const PROMOTION_MESSAGE: &str = "Pawn promoted to queen!";

/// Number of display frames the promotion message stays up.
pub const PROMOTION_NOTICE_FRAMES: u32 = 100;

#[inline]
pub const fn back_rank(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

#[inline]
pub const fn pawn_start_rank(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// The rank farthest from the side's own starting edge.
#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    back_rank(color.opposite())
}

/// How a side with no legal move and no check is scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoMovePolicy {
    /// The stuck side loses, exactly as if it had been mated.
    #[default]
    LossForStuckSide,
    /// Standard stalemate: the game ends without a winner.
    Draw,
}
