//! Knight move geometry.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::delta;

/// L-shape: |Δrow|,|Δcol| is a permutation of (1,2). Intervening squares are
/// never looked at.
pub fn is_legal_knight_move(from: Square, to: Square) -> bool {
    let (d_row, d_col) = delta(from, to);
    matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1))
}
