//! The 8x8 grid of optional occupants.
//!
//! The board exclusively owns every piece. Each occupied slot holds a `Piece`
//! whose `square` field equals the slot's coordinate; all mutation goes
//! through methods here so that invariant cannot drift.

use crate::game_state::chess_rules::{back_rank, pawn_start_rank, BACK_RANK_ORDER};
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::piece::{Piece, PieceId};
use crate::game_state::undo_state::UndoState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    slots: [[Option<Piece>; 8]; 8],
    next_id: PieceId,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            slots: [[None; 8]; 8],
            next_id: 0,
        }
    }

    /// Standard initial placement.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in Color::BOTH {
            let back = back_rank(color);
            let pawns = pawn_start_rank(color);
            for (col, kind) in BACK_RANK_ORDER.iter().enumerate() {
                let col = col as u8;
                board.place(*kind, color, Square { row: back, col });
                board.place(PieceKind::Pawn, color, Square { row: pawns, col });
            }
        }
        board
    }

    /// Puts a freshly constructed piece on `square`, replacing any occupant.
    pub fn place(&mut self, kind: PieceKind, color: Color, square: Square) -> PieceId {
        let id = self.allocate_id();
        self.slots[square.row as usize][square.col as usize] =
            Some(Piece::new(id, kind, color, square));
        id
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<&Piece> {
        self.slots[square.row as usize][square.col as usize].as_ref()
    }

    /// Like `get`, but accepts raw indices and returns `None` off the board.
    #[inline]
    pub fn get_at(&self, row: u8, col: u8) -> Option<&Piece> {
        Square::new(row, col).and_then(|square| self.get(square))
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Stores `piece` at `square` and returns the previous occupant.
    ///
    /// The stored piece's `square` is rewritten to match the slot.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        let piece = piece.map(|mut p| {
            p.square = square;
            p
        });
        std::mem::replace(&mut self.slots[square.row as usize][square.col as usize], piece)
    }

    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.slots[square.row as usize][square.col as usize].take()
    }

    /// Occupied slots in row-major scan order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.slots.iter().flatten().flatten()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |piece| piece.color == color)
    }

    /// Hands out an id for a piece created mid-game (promotion).
    pub fn allocate_id(&mut self) -> PieceId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Relocates the piece on `from` to `to` without touching `has_moved`,
    /// returning what is needed to put everything back.
    ///
    /// Returns `None` when `from` is empty.
    pub fn make_temporary(&mut self, from: Square, to: Square) -> Option<UndoState> {
        let moved_piece = self.take(from)?;
        let captured_piece = self.set(to, Some(moved_piece));
        Some(UndoState {
            from,
            to,
            moved_piece,
            captured_piece,
        })
    }

    /// Restores both slots touched by `make_temporary`, capture included.
    pub fn undo_temporary(&mut self, undo: UndoState) {
        self.slots[undo.to.row as usize][undo.to.col as usize] = undo.captured_piece;
        self.slots[undo.from.row as usize][undo.from.col as usize] = Some(undo.moved_piece);
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::chess_types::{Color, PieceKind, Square};

    #[test]
    fn standard_board_has_thirty_two_pieces_in_place() {
        let board = Board::standard();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.pieces_of(Color::White).count(), 16);

        let white_king = board.get_at(7, 4).expect("white king on e1");
        assert_eq!(white_king.kind, PieceKind::King);
        assert_eq!(white_king.color, Color::White);

        let black_queen = board.get_at(0, 3).expect("black queen on d8");
        assert_eq!(black_queen.kind, PieceKind::Queen);
        assert_eq!(black_queen.color, Color::Black);

        for piece in board.pieces() {
            assert_eq!(board.get(piece.square), Some(piece));
        }
    }

    #[test]
    fn temporary_capture_is_rolled_back_exactly() {
        let mut board = Board::empty();
        let rook_sq = Square { row: 4, col: 0 };
        let victim_sq = Square { row: 4, col: 6 };
        board.place(PieceKind::Rook, Color::White, rook_sq);
        board.place(PieceKind::Knight, Color::Black, victim_sq);
        let before = board.clone();

        let undo = board
            .make_temporary(rook_sq, victim_sq)
            .expect("rook square is occupied");
        assert!(board.is_empty(rook_sq));
        let moved = board.get(victim_sq).expect("rook landed");
        assert_eq!(moved.kind, PieceKind::Rook);
        assert_eq!(moved.square, victim_sq);

        board.undo_temporary(undo);
        assert_eq!(board, before);
    }

    #[test]
    fn temporary_move_from_empty_square_is_none() {
        let mut board = Board::empty();
        assert!(board
            .make_temporary(Square { row: 0, col: 0 }, Square { row: 1, col: 1 })
            .is_none());
        assert_eq!(board.get_at(9, 0), None);
    }
}
