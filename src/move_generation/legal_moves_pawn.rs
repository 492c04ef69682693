//! Pawn pushes and diagonal captures.

use crate::game_state::chess_rules::{pawn_direction, pawn_start_rank};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::delta;

/// Forward single step onto an empty square, double step from the start rank
/// over two empty squares, or a diagonal step onto an enemy piece.
pub fn is_legal_pawn_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let direction = pawn_direction(color);
    let (d_row, d_col) = delta(from, to);

    if d_col == 0 {
        if d_row == direction {
            return board.is_empty(to);
        }
        if d_row == 2 * direction && from.row() == pawn_start_rank(color) {
            return match from.offset(direction, 0) {
                Some(between) => board.is_empty(between) && board.is_empty(to),
                None => false,
            };
        }
        return false;
    }

    if d_col.abs() == 1 && d_row == direction {
        return board.is_enemy_piece(to, color);
    }

    false
}

#[cfg(test)]
mod tests {
    use super::is_legal_pawn_move;
    use crate::game_state::chess_types::*;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn white_pawn_single_and_double_step_from_start() {
        let board = Board::standard();
        assert!(is_legal_pawn_move(&board, sq(6, 4), sq(5, 4), Color::White));
        assert!(is_legal_pawn_move(&board, sq(6, 4), sq(4, 4), Color::White));
        assert!(!is_legal_pawn_move(&board, sq(6, 4), sq(3, 4), Color::White));
        assert!(!is_legal_pawn_move(&board, sq(6, 4), sq(7, 4), Color::White));
    }

    #[test]
    fn black_pawn_moves_toward_higher_rows() {
        let board = Board::standard();
        assert!(is_legal_pawn_move(&board, sq(1, 2), sq(2, 2), Color::Black));
        assert!(is_legal_pawn_move(&board, sq(1, 2), sq(3, 2), Color::Black));
        assert!(!is_legal_pawn_move(&board, sq(1, 2), sq(0, 2), Color::Black));
    }

    #[test]
    fn double_step_only_from_start_rank() {
        let mut board = Board::empty();
        board.place(sq(5, 4), Piece::new(PieceKind::Pawn, Color::White));
        assert!(!is_legal_pawn_move(&board, sq(5, 4), sq(3, 4), Color::White));
        assert!(is_legal_pawn_move(&board, sq(5, 4), sq(4, 4), Color::White));
    }

    #[test]
    fn double_step_needs_both_squares_empty() {
        let mut board = Board::standard();
        board.place(sq(5, 4), Piece::new(PieceKind::Knight, Color::Black));
        assert!(!is_legal_pawn_move(&board, sq(6, 4), sq(4, 4), Color::White));

        let mut board = Board::standard();
        board.place(sq(4, 4), Piece::new(PieceKind::Knight, Color::Black));
        assert!(!is_legal_pawn_move(&board, sq(6, 4), sq(4, 4), Color::White));
        assert!(is_legal_pawn_move(&board, sq(6, 4), sq(5, 4), Color::White));
    }

    #[test]
    fn forward_step_cannot_capture() {
        let mut board = Board::standard();
        board.place(sq(5, 4), Piece::new(PieceKind::Pawn, Color::Black));
        assert!(!is_legal_pawn_move(&board, sq(6, 4), sq(5, 4), Color::White));
    }

    #[test]
    fn diagonal_only_onto_enemy() {
        let mut board = Board::standard();
        assert!(!is_legal_pawn_move(&board, sq(6, 4), sq(5, 5), Color::White));

        board.place(sq(5, 5), Piece::new(PieceKind::Pawn, Color::White));
        assert!(!is_legal_pawn_move(&board, sq(6, 4), sq(5, 5), Color::White));

        board.place(sq(5, 5), Piece::new(PieceKind::Pawn, Color::Black));
        assert!(is_legal_pawn_move(&board, sq(6, 4), sq(5, 5), Color::White));
        assert!(!is_legal_pawn_move(&board, sq(6, 4), sq(4, 6), Color::White));
    }
}
