//! 8×8 storage of optional occupants.
//!
//! `Board` is a plain container: it never checks chess semantics. The
//! validator and the controller decide what may be placed where.

use crate::game_state::chess_rules::{back_rank, pawn_start_rank, BACK_RANK_LAYOUT, BOARD_SIZE};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard opening position: pawns on rows 6/1, back ranks on rows 7/0.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let back = back_rank(color);
            let pawns = pawn_start_rank(color);
            for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                board.squares[back][col] = Some(Piece::new(*kind, color));
                board.squares[pawns][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row()][square.col()]
    }

    /// Puts `piece` on `square`, replacing whatever was there.
    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.squares[square.row()][square.col()] = Some(piece);
    }

    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row()][square.col()].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// True when `square` holds a piece of the color opposing `color`.
    #[inline]
    pub fn is_enemy_piece(&self, square: Square, color: Color) -> bool {
        matches!(self.get(square), Some(piece) if piece.color != color)
    }

    /// Occupied squares in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }

    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.occupied()
            .filter(|(_, piece)| piece.color == color && piece.kind == kind)
            .count()
    }
}
