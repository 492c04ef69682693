//! Bishop move geometry.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{delta, path_is_clear};

/// Diagonal with |Δrow| == |Δcol| ≠ 0 and nothing strictly in between.
pub fn is_legal_bishop_move(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = delta(from, to);
    if d_row == 0 || d_row.abs() != d_col.abs() {
        return false;
    }
    path_is_clear(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::is_legal_bishop_move;
    use crate::game_state::chess_types::*;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn bishop_moves_on_open_diagonals() {
        let board = Board::empty();
        assert!(is_legal_bishop_move(&board, sq(4, 4), sq(0, 0)));
        assert!(is_legal_bishop_move(&board, sq(4, 4), sq(7, 1)));
        assert!(!is_legal_bishop_move(&board, sq(4, 4), sq(4, 7)));
        assert!(!is_legal_bishop_move(&board, sq(4, 4), sq(6, 5)));
    }

    #[test]
    fn bishop_blocked_on_diagonal() {
        let mut board = Board::empty();
        board.place(sq(2, 2), Piece::new(PieceKind::Knight, Color::Black));
        assert!(!is_legal_bishop_move(&board, sq(4, 4), sq(0, 0)));
        assert!(is_legal_bishop_move(&board, sq(4, 4), sq(2, 2)));
    }

    #[test]
    fn bishop_opens_after_pawn_moves() {
        let mut board = Board::standard();
        assert!(!is_legal_bishop_move(&board, sq(7, 5), sq(4, 2)));
        let pawn = board.remove(sq(6, 4)).expect("e2 pawn should be present");
        board.place(sq(4, 4), pawn);
        assert!(is_legal_bishop_move(&board, sq(7, 5), sq(4, 2)));
    }
}
