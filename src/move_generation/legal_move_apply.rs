//! Committed move application.
//!
//! Relocates the piece, discards any captured occupant, marks the mover as
//! moved and queens pawns that reach the far back rank. Turn bookkeeping
//! lives on `GameState`.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::promotion_rank;
use crate::game_state::chess_types::{Color, Move, PieceKind};
use crate::game_state::piece::Piece;

/// What a committed move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub mv: Move,
    pub color: Color,
    pub moved_kind: PieceKind,
    pub captured: Option<Piece>,
    pub promoted: bool,
}

/// Applies `mv` to `board`. Returns `None` when `mv.from` is empty.
///
/// No legality checking happens here; callers validate first.
pub fn apply_move(board: &mut Board, mv: Move) -> Option<AppliedMove> {
    let mut piece = board.take(mv.from)?;
    piece.has_moved = true;
    let color = piece.color;
    let moved_kind = piece.kind;
    let captured = board.set(mv.to, Some(piece));

    let promoted = moved_kind == PieceKind::Pawn && mv.to.row == promotion_rank(color);
    if promoted {
        board.place(PieceKind::Queen, color, mv.to);
    }

    Some(AppliedMove {
        mv,
        color,
        moved_kind,
        captured,
        promoted,
    })
}
