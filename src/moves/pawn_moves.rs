use crate::game_state::board::Board;
use crate::game_state::chess_rules::pawn_start_rank;
use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;

/// Single push, double push from the start rank, diagonal captures.
///
/// No en passant. Promotion is applied when the move is executed.
pub fn pawn_moves(piece: &Piece, board: &Board, out: &mut Vec<Square>) {
    let forward = piece.color.forward();

    if let Some(one_step) = piece.square.offset(forward, 0) {
        if board.is_empty(one_step) {
            out.push(one_step);

            if piece.square.row == pawn_start_rank(piece.color) {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(target) = piece.square.offset(forward, d_col) else {
            continue;
        };
        if board
            .get(target)
            .is_some_and(|occupant| occupant.is_enemy_of(piece))
        {
            out.push(target);
        }
    }
}
