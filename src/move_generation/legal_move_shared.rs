//! Helpers shared by the per-piece move rules.

use crate::game_state::chess_types::*;

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
];

/// Signed (row, col) displacement from `from` to `to`.
#[inline]
pub fn delta(from: Square, to: Square) -> (i32, i32) {
    (
        to.row() as i32 - from.row() as i32,
        to.col() as i32 - from.col() as i32,
    )
}

/// Walks from `from` toward `to` one unit step at a time and reports whether
/// every square strictly between them is empty. The endpoints are not checked.
///
/// Callers must only pass straight or diagonal lines.
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = delta(from, to);
    let step_row = d_row.signum();
    let step_col = d_col.signum();

    let mut current = from.offset(step_row, step_col);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if !board.is_empty(square) {
            return false;
        }
        current = square.offset(step_row, step_col);
    }
    true
}
