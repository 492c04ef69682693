//! Rook move geometry.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{delta, path_is_clear};

/// Same row or same column with nothing strictly in between. The destination
/// occupant is not inspected.
pub fn is_legal_rook_move(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = delta(from, to);
    if d_row != 0 && d_col != 0 {
        return false;
    }
    path_is_clear(board, from, to)
}
