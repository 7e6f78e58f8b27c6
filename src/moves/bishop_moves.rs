use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;
use crate::moves::ray_moves::{trace_ray, DIAGONAL_DIRECTIONS};

#[inline]
pub fn bishop_moves(piece: &Piece, board: &Board, out: &mut Vec<Square>) {
    for (d_row, d_col) in DIAGONAL_DIRECTIONS {
        trace_ray(piece, board, d_row, d_col, out);
    }
}
