use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;
use crate::moves::ray_moves::step_targets;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[inline]
pub fn knight_moves(piece: &Piece, board: &Board, out: &mut Vec<Square>) {
    step_targets(piece, board, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::knight_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind, Square};

    #[test]
    fn knight_in_the_middle_has_eight_targets() {
        let mut board = Board::empty();
        let d4 = Square { row: 4, col: 3 };
        board.place(PieceKind::Knight, Color::White, d4);
        let knight = *board.get(d4).expect("knight placed");

        let mut out = Vec::new();
        knight_moves(&knight, &board, &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn knight_in_the_corner_skips_off_board_and_friendly_targets() {
        let mut board = Board::empty();
        let corner = Square { row: 7, col: 7 };
        board.place(PieceKind::Knight, Color::White, corner);
        board.place(PieceKind::Pawn, Color::White, Square { row: 6, col: 5 });
        board.place(PieceKind::Pawn, Color::Black, Square { row: 5, col: 6 });
        let knight = *board.get(corner).expect("knight placed");

        let mut out = Vec::new();
        knight_moves(&knight, &board, &mut out);
        assert_eq!(out, vec![Square { row: 5, col: 6 }]);
    }
}
