//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the terminal front end, tests,
//! and diagnostics in text environments.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Render the board to a Unicode string for terminal output, White at the
/// bottom. Squares in `highlights` are drawn as `*` when empty and `x` when
/// occupied.
pub fn render_board(board: &Board, highlights: &[Square]) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            let square = Square { row, col };
            let highlighted = highlights.contains(&square);
            let ch = match (board.get(square), highlighted) {
                (Some(_), true) => 'x',
                (Some(piece), false) => piece_to_unicode(piece.color, piece.kind),
                (None, true) => '*',
                (None, false) => '·',
            };
            out.push(ch);

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
