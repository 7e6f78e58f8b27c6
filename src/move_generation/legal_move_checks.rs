//! Attack and check detection.

use crate::errors::{GameError, GameResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{CheckStatus, Color, PieceKind, Square};
use crate::move_generation::pseudo_legal::generate_pseudo_legal_moves;
use crate::moves::king_moves::king_touches;

/// Square of `color`'s king.
///
/// A missing king means the board was assembled incorrectly; it surfaces as
/// `GameError::MissingKing` instead of being treated as "not in check".
pub fn find_king(board: &Board, color: Color) -> GameResult<Square> {
    board
        .pieces_of(color)
        .find(|piece| piece.kind == PieceKind::King)
        .map(|king| king.square)
        .ok_or(GameError::MissingKing(color))
}

/// Whether any piece of `attacker_color` could move onto `square`.
///
/// Kings are tested by adjacency directly; every other piece by membership
/// of `square` in its pseudo-legal destinations.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let mut scratch = Vec::with_capacity(28);
    for piece in board.pieces_of(attacker_color) {
        if piece.kind == PieceKind::King {
            if king_touches(piece.square, square) {
                return true;
            }
            continue;
        }

        scratch.clear();
        generate_pseudo_legal_moves(piece, board, &mut scratch);
        if scratch.contains(&square) {
            return true;
        }
    }
    false
}

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> GameResult<bool> {
    let king_sq = find_king(board, color)?;
    Ok(is_square_attacked(board, king_sq, color.opposite()))
}

/// Check flags for both sides.
pub fn check_for_check(board: &Board) -> GameResult<CheckStatus> {
    Ok(CheckStatus {
        white: is_king_in_check(board, Color::White)?,
        black: is_king_in_check(board, Color::Black)?,
    })
}
