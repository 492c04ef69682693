//! Queen moves: the union of rook and bishop geometry.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::is_legal_bishop_move;
use crate::move_generation::legal_moves_rook::is_legal_rook_move;

#[inline]
pub fn is_legal_queen_move(board: &Board, from: Square, to: Square) -> bool {
    is_legal_rook_move(board, from, to) || is_legal_bishop_move(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::is_legal_queen_move;
    use crate::game_state::chess_types::*;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn queen_combines_rook_and_bishop_lines() {
        let board = Board::empty();
        let from = sq(3, 3);
        let targets = Square::all()
            .filter(|to| *to != from && is_legal_queen_move(&board, from, *to))
            .count();
        assert_eq!(targets, 27);
        assert!(!is_legal_queen_move(&board, from, sq(5, 4)));
    }

    #[test]
    fn queen_blocked_in_opening() {
        let board = Board::standard();
        assert!(!is_legal_queen_move(&board, sq(7, 3), sq(4, 3)));
        assert!(!is_legal_queen_move(&board, sq(7, 3), sq(4, 6)));
    }
}
