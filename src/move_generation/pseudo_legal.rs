//! Pseudo-legal destination generation.
//!
//! Dispatches on `PieceKind` to the per-shape generators in `moves`. The
//! result depends only on the piece and board occupancy; whether the move
//! would leave the mover's king attacked is the legality filter's concern.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::piece::Piece;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

pub fn pseudo_legal_moves(piece: &Piece, board: &Board) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    generate_pseudo_legal_moves(piece, board, &mut out);
    out
}

pub fn generate_pseudo_legal_moves(piece: &Piece, board: &Board, out: &mut Vec<Square>) {
    match piece.kind {
        PieceKind::Pawn => pawn_moves(piece, board, out),
        PieceKind::Knight => knight_moves(piece, board, out),
        PieceKind::Bishop => bishop_moves(piece, board, out),
        PieceKind::Rook => rook_moves(piece, board, out),
        PieceKind::Queen => queen_moves(piece, board, out),
        PieceKind::King => king_moves(piece, board, out),
    }
}

/// Pseudo-legal moves for whatever stands on `square`; empty when nothing does.
pub fn pseudo_legal_moves_from(board: &Board, square: Square) -> Vec<Square> {
    match board.get(square) {
        Some(piece) => pseudo_legal_moves(piece, board),
        None => Vec::new(),
    }
}
