//! Per-piece geometric legality, dispatched on the occupant of the origin.
//!
//! `is_legal` is a pure function of the board contents, the two squares and
//! the moving color. It does not know whose turn it is and never considers
//! check. Only pawns look at the destination occupant; every other piece
//! accepts a friendly destination, which the controller then overwrites.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::is_legal_bishop_move;
use crate::move_generation::legal_moves_king::is_legal_king_move;
use crate::move_generation::legal_moves_knight::is_legal_knight_move;
use crate::move_generation::legal_moves_pawn::is_legal_pawn_move;
use crate::move_generation::legal_moves_queen::is_legal_queen_move;
use crate::move_generation::legal_moves_rook::is_legal_rook_move;

pub fn is_legal(board: &Board, from: Square, to: Square, color: Color) -> bool {
    if from == to {
        return false;
    }
    let Some(piece) = board.get(from) else {
        return false;
    };

    match piece.kind {
        PieceKind::Pawn => is_legal_pawn_move(board, from, to, color),
        PieceKind::Rook => is_legal_rook_move(board, from, to),
        PieceKind::Knight => is_legal_knight_move(from, to),
        PieceKind::Bishop => is_legal_bishop_move(board, from, to),
        PieceKind::Queen => is_legal_queen_move(board, from, to),
        PieceKind::King => is_legal_king_move(from, to),
    }
}
