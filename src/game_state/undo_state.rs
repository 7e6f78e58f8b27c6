use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;

/// Single undo record for `Board::make_temporary` / `Board::undo_temporary`.
///
/// Holds full copies of the mover and of whatever stood on the destination,
/// so rollback restores both slots exactly, capture included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub from: Square,
    pub to: Square,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
}
