//! King move geometry.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::delta;

/// One step in any direction. No castling.
#[inline]
pub fn is_legal_king_move(from: Square, to: Square) -> bool {
    let (d_row, d_col) = delta(from, to);
    d_row.abs() <= 1 && d_col.abs() <= 1
}

#[cfg(test)]
mod tests {
    use super::is_legal_king_move;
    use crate::game_state::chess_types::*;

    #[test]
    fn king_reaches_all_eight_neighbours_and_nothing_else() {
        let from = Square::new(4, 4).expect("e4");
        for to in Square::all() {
            let d_row = (to.row() as i32 - 4).abs();
            let d_col = (to.col() as i32 - 4).abs();
            let adjacent = d_row <= 1 && d_col <= 1 && (d_row, d_col) != (0, 0);
            if to != from {
                assert_eq!(is_legal_king_move(from, to), adjacent, "target {to}");
            }
        }
    }
}
