use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Stable identity of a piece across moves.
pub type PieceId = u16;

/// A piece as stored in a board slot.
///
/// `square` always mirrors the slot holding the piece. Moving a piece keeps
/// its `id`; a promoting pawn is replaced by a fresh queen with a new id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(id: PieceId, kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            id,
            kind,
            color,
            square,
            has_moved: false,
        }
    }

    #[inline]
    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.color != other.color
    }
}
