//! Core value types shared by the board, the validator and the controller.
//!
//! Pieces are explicit `{kind, color}` values; the board owns placement and a
//! square's occupant is only ever looked up by coordinate.

use std::fmt;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::utils::algebraic::square_to_algebraic;

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Rook => "Rook",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

/// Board coordinate. Row 0 is Black's back rank, row 7 is White's.
///
/// Fields are private so that every `Square` in circulation is on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: i32, col: i32) -> ChessResult<Self> {
        let size = BOARD_SIZE as i32;
        if !(0..size).contains(&row) || !(0..size).contains(&col) {
            return Err(ChessErrors::InvalidSquare((row, col)));
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Square displaced by `(d_row, d_col)`, or `None` when that leaves the board.
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        Self::new(self.row as i32 + d_row, self.col as i32 + d_col).ok()
    }

    /// All 64 squares, row-major from (0,0).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

/// One applied move, as stored in both the history and the undo stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub moved_kind: PieceKind,
    pub moved_color: Color,
    /// Enemy occupant of `to` before the move. A friendly occupant that got
    /// overwritten is not recorded here.
    pub captured_piece: Option<Piece>,
}

impl Move {
    /// Human-readable descriptor, e.g. `White Pawn e2-e4` or
    /// `Black Queen d8xd2 (White Pawn)`.
    pub fn describe(&self) -> String {
        match self.captured_piece {
            Some(captured) => format!(
                "{} {} {}x{} ({})",
                self.moved_color, self.moved_kind, self.from, self.to, captured
            ),
            None => format!(
                "{} {} {}-{}",
                self.moved_color, self.moved_kind, self.from, self.to
            ),
        }
    }
}

/// Whether Black's turns are resolved by the built-in opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    HumanVsHuman,
    HumanVsAi,
}

impl GameMode {
    /// Parses the short tokens used by shells and game records.
    pub fn from_token(token: &str) -> ChessResult<Self> {
        match token.to_ascii_lowercase().as_str() {
            "hvh" | "humanvshuman" => Ok(GameMode::HumanVsHuman),
            "ai" | "hvai" | "humanvsai" => Ok(GameMode::HumanVsAi),
            _ => Err(ChessErrors::InvalidOptionValue((
                "Mode".to_owned(),
                token.to_owned(),
            ))),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::HumanVsHuman => write!(f, "HumanVsHuman"),
            GameMode::HumanVsAi => write!(f, "HumanVsAI"),
        }
    }
}
