//! Square conversions for algebraic coordinates.
//!
//! Column 0..=7 maps to files `a`..=`h`. Row 0 (Black's back rank) is rank
//! `8` and row 7 (White's back rank) is rank `1`.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let col = i32::from(file - b'a');
    let row = 7 - i32::from(rank - b'1');
    Square::new(row, col)
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col() as u8);
    let rank_char = char::from(b'8' - square.row() as u8);
    format!("{file_char}{rank_char}")
}

/// `e2e4`-style origin/destination pair.
pub fn move_to_long_algebraic(from: Square, to: Square) -> String {
    let mut out = square_to_algebraic(from);
    out.push_str(&square_to_algebraic(to));
    out
}

pub fn long_algebraic_to_squares(long_algebraic: &str) -> ChessResult<(Square, Square)> {
    if long_algebraic.len() != 4 || !long_algebraic.is_ascii() {
        return Err(ChessErrors::InvalidAlgebraicString(
            long_algebraic.to_owned(),
        ));
    }
    let from = algebraic_to_square(&long_algebraic[0..2])?;
    let to = algebraic_to_square(&long_algebraic[2..4])?;
    Ok((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_squares_convert() {
        let a8 = Square::new(0, 0).expect("a8");
        let h1 = Square::new(7, 7).expect("h1");
        assert_eq!(square_to_algebraic(a8), "a8");
        assert_eq!(square_to_algebraic(h1), "h1");
        assert_eq!(algebraic_to_square("a8").expect("a8 should parse"), a8);
        assert_eq!(algebraic_to_square("H1").expect("H1 should parse"), h1);
    }

    #[test]
    fn white_king_pawn_is_e2() {
        let e2 = algebraic_to_square("e2").expect("e2 should parse");
        assert_eq!((e2.row(), e2.col()), (6, 4));
    }

    #[test]
    fn malformed_coordinates_fail() {
        for bad in ["", "e", "e9", "i1", "e22", "é2"] {
            assert!(algebraic_to_square(bad).is_err(), "{bad} should fail");
        }
    }

    #[test]
    fn long_algebraic_pairs() {
        let (from, to) = long_algebraic_to_squares("g1f3").expect("g1f3 should parse");
        assert_eq!(move_to_long_algebraic(from, to), "g1f3");
        assert!(long_algebraic_to_squares("g1f").is_err());
        assert!(long_algebraic_to_squares("e7e8q").is_err());
    }
}
