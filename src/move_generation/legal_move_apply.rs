//! Board mutation for applying and reverting a single move.

use crate::game_state::chess_types::*;

/// Moves the occupant of `from` to `to` and returns the resulting record.
///
/// An enemy occupant of `to` is captured and recorded. A friendly occupant is
/// overwritten and not recorded. Returns `None` when `from` is empty.
/// Legality is the caller's concern.
pub fn apply_move(board: &mut Board, from: Square, to: Square) -> Option<Move> {
    let mover = board.get(from)?;

    let captured_piece = if board.is_enemy_piece(to, mover.color) {
        board.remove(to)
    } else {
        None
    };

    board.remove(from);
    board.place(to, mover);

    Some(Move {
        from,
        to,
        moved_kind: mover.kind,
        moved_color: mover.color,
        captured_piece,
    })
}

/// Moves the piece back from `mv.to` to `mv.from`.
///
/// The captured piece is not put back; the destination is left empty.
pub fn revert_move(board: &mut Board, mv: &Move) {
    let piece = board
        .remove(mv.to)
        .unwrap_or(Piece::new(mv.moved_kind, mv.moved_color));
    board.place(mv.from, piece);
}
