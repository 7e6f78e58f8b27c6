//! Legal move filtering and terminal-position detection.
//!
//! Each pseudo-legal destination is tried on the board itself via
//! `Board::make_temporary`, the mover's king is tested for attack, and the
//! board is rolled back before the verdict is acted on. The caller's board
//! is therefore bit-for-bit unchanged after every call here.

use crate::errors::GameResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move, Square};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::pseudo_legal::pseudo_legal_moves;

/// Legal destinations for the piece on `from`, simulating on `board` in place.
///
/// Empty when `from` holds no piece.
pub fn legal_moves_in_place(board: &mut Board, from: Square) -> GameResult<Vec<Square>> {
    let Some(piece) = board.get(from).copied() else {
        return Ok(Vec::new());
    };

    let candidates = pseudo_legal_moves(&piece, board);
    let mut legal = Vec::with_capacity(candidates.len());
    for to in candidates {
        let Some(undo) = board.make_temporary(from, to) else {
            continue;
        };
        let leaves_king_attacked = is_king_in_check(board, piece.color);
        board.undo_temporary(undo);

        if !leaves_king_attacked? {
            legal.push(to);
        }
    }
    Ok(legal)
}

/// Legal destinations for the piece on `from`.
pub fn legal_moves(board: &Board, from: Square) -> GameResult<Vec<Square>> {
    let mut scratch = board.clone();
    legal_moves_in_place(&mut scratch, from)
}

/// Every legal move of `color`, pieces in row-major scan order and each
/// piece's destinations in generation order.
pub fn all_legal_moves(board: &Board, color: Color) -> GameResult<Vec<Move>> {
    let mut scratch = board.clone();
    let origins: Vec<Square> = board.pieces_of(color).map(|piece| piece.square).collect();

    let mut out = Vec::with_capacity(64);
    for from in origins {
        for to in legal_moves_in_place(&mut scratch, from)? {
            out.push(Move::new(from, to));
        }
    }
    Ok(out)
}

/// Whether `color` has at least one legal move. Stops at the first one found.
pub fn has_any_legal_move(board: &Board, color: Color) -> GameResult<bool> {
    let mut scratch = board.clone();
    let origins: Vec<Square> = board.pieces_of(color).map(|piece| piece.square).collect();

    for from in origins {
        if !legal_moves_in_place(&mut scratch, from)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// In check with no legal move for any piece.
pub fn is_checkmate(board: &Board, color: Color) -> GameResult<bool> {
    if !is_king_in_check(board, color)? {
        return Ok(false);
    }
    Ok(!has_any_legal_move(board, color)?)
}

/// Not in check but with no legal move.
pub fn is_stalemate(board: &Board, color: Color) -> GameResult<bool> {
    if is_king_in_check(board, color)? {
        return Ok(false);
    }
    Ok(!has_any_legal_move(board, color)?)
}

#[cfg(test)]
mod tests {
    use super::{
        all_legal_moves, has_any_legal_move, is_checkmate, is_stalemate, legal_moves,
        legal_moves_in_place,
    };
    use crate::errors::GameError;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind, Square};

    fn sq(row: u8, col: u8) -> Square {
        Square { row, col }
    }

    #[test]
    fn standard_position_has_twenty_white_moves() {
        let board = Board::standard();
        let moves = all_legal_moves(&board, Color::White).expect("standard board is well formed");
        assert_eq!(moves.len(), 20);

        let pawn_moves = moves
            .iter()
            .filter(|mv| board.get(mv.from).map(|p| p.kind) == Some(PieceKind::Pawn))
            .count();
        assert_eq!(pawn_moves, 16);
        assert_eq!(
            all_legal_moves(&board, Color::Black)
                .expect("standard board is well formed")
                .len(),
            20
        );
    }

    #[test]
    fn lone_rook_in_corner_covers_its_file_and_rank() {
        let mut board = Board::empty();
        board.place(PieceKind::Rook, Color::White, sq(7, 0));
        board.place(PieceKind::King, Color::White, sq(3, 5));
        board.place(PieceKind::King, Color::Black, sq(1, 3));

        let moves = legal_moves(&board, sq(7, 0)).expect("kings present");
        assert_eq!(moves.len(), 14);
        for row in 0..7 {
            assert!(moves.contains(&sq(row, 0)));
        }
        for col in 1..8 {
            assert!(moves.contains(&sq(7, col)));
        }
    }

    #[test]
    fn simulation_leaves_board_untouched() {
        let mut board = Board::standard();
        board.place(PieceKind::Queen, Color::Black, sq(4, 7));
        board.take(sq(6, 5));
        let before = board.clone();

        for from in Square::all() {
            legal_moves_in_place(&mut board, from).expect("kings present");
            assert_eq!(board, before);
        }
    }

    #[test]
    fn pinned_piece_cannot_leave_the_pin_line() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::White, sq(7, 4));
        board.place(PieceKind::Bishop, Color::White, sq(6, 4));
        board.place(PieceKind::Rook, Color::Black, sq(0, 4));
        board.place(PieceKind::King, Color::Black, sq(0, 0));

        assert!(legal_moves(&board, sq(6, 4)).expect("kings present").is_empty());
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::White, sq(7, 4));
        board.place(PieceKind::Rook, Color::Black, sq(0, 3));
        board.place(PieceKind::King, Color::Black, sq(0, 7));

        let moves = legal_moves(&board, sq(7, 4)).expect("kings present");
        assert!(moves.iter().all(|mv| mv.col != 3));
        assert!(moves.contains(&sq(7, 5)));
    }

    #[test]
    fn cornered_king_against_queen_and_rook_is_mated() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::White, sq(0, 0));
        board.place(PieceKind::Queen, Color::Black, sq(0, 7));
        board.place(PieceKind::Rook, Color::Black, sq(1, 6));
        board.place(PieceKind::King, Color::Black, sq(7, 7));

        for piece in board.pieces_of(Color::White) {
            assert!(legal_moves(&board, piece.square)
                .expect("kings present")
                .is_empty());
        }
        assert!(is_checkmate(&board, Color::White).expect("kings present"));
        assert!(!is_stalemate(&board, Color::White).expect("kings present"));
    }

    #[test]
    fn capture_of_the_checker_escapes_mate() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::White, sq(0, 0));
        board.place(PieceKind::Queen, Color::Black, sq(0, 7));
        board.place(PieceKind::Rook, Color::Black, sq(1, 6));
        board.place(PieceKind::King, Color::Black, sq(7, 7));
        board.place(PieceKind::Rook, Color::White, sq(4, 7));

        assert!(!is_checkmate(&board, Color::White).expect("kings present"));
        assert_eq!(
            legal_moves(&board, sq(4, 7)).expect("kings present"),
            vec![sq(0, 7)]
        );
    }

    #[test]
    fn stalemate_is_no_moves_without_check() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::Black, sq(0, 0));
        board.place(PieceKind::Queen, Color::White, sq(2, 1));
        board.place(PieceKind::King, Color::White, sq(7, 7));

        assert!(!has_any_legal_move(&board, Color::Black).expect("kings present"));
        assert!(is_stalemate(&board, Color::Black).expect("kings present"));
        assert!(!is_checkmate(&board, Color::Black).expect("kings present"));
    }

    #[test]
    fn missing_own_king_propagates() {
        let mut board = Board::empty();
        board.place(PieceKind::Rook, Color::White, sq(7, 0));
        board.place(PieceKind::King, Color::Black, sq(0, 4));
        assert_eq!(
            legal_moves(&board, sq(7, 0)),
            Err(GameError::MissingKing(Color::White))
        );
    }
}
