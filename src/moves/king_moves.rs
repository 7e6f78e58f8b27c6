use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;
use crate::moves::ray_moves::step_targets;

/// Orthogonal steps first, then diagonal ones.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// One step in any direction. No castling.
#[inline]
pub fn king_moves(piece: &Piece, board: &Board, out: &mut Vec<Square>) {
    step_targets(piece, board, &KING_OFFSETS, out);
}

/// Whether a king on `king` touches `target`.
#[inline]
pub fn king_touches(king: Square, target: Square) -> bool {
    king.row.abs_diff(target.row) <= 1 && king.col.abs_diff(target.col) <= 1
}

#[cfg(test)]
mod tests {
    use super::{king_moves, king_touches};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind, Square};

    #[test]
    fn corner_king_has_three_steps() {
        let mut board = Board::empty();
        let corner = Square { row: 0, col: 0 };
        board.place(PieceKind::King, Color::Black, corner);
        let king = *board.get(corner).expect("king placed");

        let mut out = Vec::new();
        king_moves(&king, &board, &mut out);
        out.sort();
        assert_eq!(
            out,
            vec![
                Square { row: 0, col: 1 },
                Square { row: 1, col: 0 },
                Square { row: 1, col: 1 },
            ]
        );
    }

    #[test]
    fn adjacency_is_chebyshev_distance_one() {
        let e4 = Square { row: 4, col: 4 };
        assert!(king_touches(e4, Square { row: 3, col: 5 }));
        assert!(!king_touches(e4, Square { row: 2, col: 4 }));
    }
}
