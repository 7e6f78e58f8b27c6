//! Shared stepping and ray-casting helpers for piece move shapes.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Walks from the piece along `(d_row, d_col)`, adding empty squares and
/// stopping at the first occupied one, which is kept only if it is an enemy.
pub fn trace_ray(piece: &Piece, board: &Board, d_row: i8, d_col: i8, out: &mut Vec<Square>) {
    let mut cursor = piece.square.offset(d_row, d_col);
    while let Some(square) = cursor {
        match board.get(square) {
            None => out.push(square),
            Some(occupant) => {
                if occupant.is_enemy_of(piece) {
                    out.push(square);
                }
                break;
            }
        }
        cursor = square.offset(d_row, d_col);
    }
}

/// Single-step targets: on board and not holding a friendly piece.
pub fn step_targets(piece: &Piece, board: &Board, offsets: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(d_row, d_col) in offsets {
        let Some(square) = piece.square.offset(d_row, d_col) else {
            continue;
        };
        match board.get(square) {
            Some(occupant) if !occupant.is_enemy_of(piece) => {}
            _ => out.push(square),
        }
    }
}
