//! Terminal-oriented Unicode board renderer.
//!
//! Row 0 (rank 8) is printed first so White sits at the bottom.

use crate::game_state::chess_types::*;

pub fn render_board(board: &Board) -> String {
    render_board_with_selection(board, None)
}

/// Same as `render_board`, with the held square wrapped in brackets.
pub fn render_board_with_selection(board: &Board, selection: Option<Square>) -> String {
    let mut out = String::new();
    out.push_str("   a  b  c  d  e  f  g  h\n");

    for row in 0..8 {
        let rank = char::from(b'8' - row as u8);
        out.push(rank);
        out.push(' ');

        for col in 0..8 {
            let Ok(square) = Square::new(row, col) else {
                continue;
            };
            let glyph = board.get(square).map_or('·', piece_to_unicode);
            if selection == Some(square) {
                out.push('[');
                out.push(glyph);
                out.push(']');
            } else {
                out.push(' ');
                out.push(glyph);
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h");
    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_board_renders_black_on_top() {
        let text = render_board(&Board::standard());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[1].starts_with("8  ♜  ♞  ♝  ♛  ♚"));
        assert!(lines[8].starts_with("1  ♖  ♘  ♗  ♕  ♔"));
        assert!(lines[4].contains('·'));
    }

    #[test]
    fn selection_is_bracketed() {
        let e2 = Square::new(6, 4).expect("e2");
        let text = render_board_with_selection(&Board::standard(), Some(e2));
        assert!(text.contains("[♙]"));
        assert_eq!(text.matches('[').count(), 1);
    }
}
