//! Exhaustive enumeration of geometry-legal moves for one side.

use crate::game_state::chess_types::*;
use crate::move_generation::move_validator::is_legal;

/// Every `(from, to)` pair where `from` holds a `color` piece and the
/// validator accepts the move, in row-major order of `from` then `to`.
pub fn generate_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::new();
    generate_legal_moves_in_place(board, color, &mut out);
    out
}

pub fn generate_legal_moves_in_place(board: &Board, color: Color, out: &mut Vec<Move>) {
    out.clear();
    for (from, piece) in board.occupied() {
        if piece.color != color {
            continue;
        }
        for to in Square::all() {
            if !is_legal(board, from, to, color) {
                continue;
            }
            out.push(Move {
                from,
                to,
                moved_kind: piece.kind,
                moved_color: color,
                captured_piece: board.get(to).filter(|target| target.color != color),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_legal_moves;
    use crate::game_state::chess_types::*;
    use crate::move_generation::move_validator::is_legal;

    #[test]
    fn every_generated_move_is_validated_and_owned() {
        let board = Board::standard();
        for color in [Color::White, Color::Black] {
            let moves = generate_legal_moves(&board, color);
            assert!(!moves.is_empty());
            for mv in moves {
                let piece = board.get(mv.from).expect("origin should be occupied");
                assert_eq!(piece.color, color);
                assert!(is_legal(&board, mv.from, mv.to, color));
            }
        }
    }

    #[test]
    fn opening_count_includes_friendly_overwrites() {
        // 16 pawn pushes, 4 knight jumps onto empty squares, plus every
        // adjacent/short move onto a friendly piece that the validator accepts.
        let board = Board::standard();
        let moves = generate_legal_moves(&board, Color::White);
        let quiet = moves
            .iter()
            .filter(|mv| board.is_empty(mv.to))
            .count();
        assert_eq!(quiet, 20);
        assert!(moves.len() > quiet);
    }

    #[test]
    fn empty_board_side_has_no_moves() {
        let board = Board::empty();
        assert!(generate_legal_moves(&board, Color::Black).is_empty());
    }
}
