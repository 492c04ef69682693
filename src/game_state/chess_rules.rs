//! Canonical rule constants.
//!
//! Board geometry, pawn ranks and the standard opening layout used by
//! `Board::standard` and by the reset path of the controller.

use crate::game_state::chess_types::{Color, PieceKind};

pub const BOARD_SIZE: usize = 8;

/// Side played by the built-in opponent in `GameMode::HumanVsAi`.
pub const AI_COLOR: Color = Color::Black;

/// Back-rank layout from column 0 to column 7, identical for both colors.
pub const BACK_RANK_LAYOUT: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[inline]
pub const fn back_rank(color: Color) -> usize {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

#[inline]
pub const fn pawn_start_rank(color: Color) -> usize {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Row delta of a forward pawn step. White moves toward row 0.
#[inline]
pub const fn pawn_direction(color: Color) -> i32 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}
