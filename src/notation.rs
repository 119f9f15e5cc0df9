//! Parse moves typed by a player.
//!
//! A move is written as two square names separated by `>`. A square name
//! is the uppercase row letter followed by the lowercase column letter, as
//! printed around the board, e.g. `Fc>Ed`.
//!
//! # Examples
//!
//! ```
//! use checkers::{notation, BoardSize, Move, Square};
//!
//! let m = notation::parse_move("Fc>Ed", BoardSize::Eight)?;
//! assert_eq!(m, Move::new(Square::new(5, 2), Square::new(4, 3)));
//! assert_eq!(m.to_string(), "Fc>Ed");
//!
//! assert_eq!(
//!     notation::parse_move("Ic>Hd", BoardSize::Eight),
//!     Err(notation::ParseMoveError::OutOfRange)
//! );
//! # Ok::<_, notation::ParseMoveError>(())
//! ```

use core::{error::Error, fmt};

use crate::{
    m::Move,
    square::{BoardSize, Square},
};

/// Error when parsing a move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseMoveError {
    /// Not of the form `Rc>Rc`.
    Malformed,
    /// Well-formed, but names a row or column beyond the board.
    OutOfRange,
}

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            ParseMoveError::Malformed => {
                "invalid move format, expected ROWcol>ROWcol (for example Fc>Ed)"
            }
            ParseMoveError::OutOfRange => "move leaves the board",
        })
    }
}

impl Error for ParseMoveError {}

fn parse_square(s: &[u8], size: BoardSize) -> Result<Square, ParseMoveError> {
    let &[row, col] = s else {
        return Err(ParseMoveError::Malformed);
    };
    if !row.is_ascii_uppercase() || !col.is_ascii_lowercase() {
        return Err(ParseMoveError::Malformed);
    }
    let (row, col) = (u32::from(row - b'A'), u32::from(col - b'a'));
    if row >= size.len() || col >= size.len() {
        return Err(ParseMoveError::OutOfRange);
    }
    Ok(Square::new(row, col))
}

/// Parses a move from ASCII bytes. Surrounding whitespace is not allowed.
pub fn parse_move_ascii(s: &[u8], size: BoardSize) -> Result<Move, ParseMoveError> {
    match s {
        [from @ .., b'>', _, _] if from.len() == 2 => {
            let from = parse_square(&s[..2], size)?;
            let to = parse_square(&s[3..], size)?;
            Ok(Move::new(from, to))
        }
        _ => Err(ParseMoveError::Malformed),
    }
}

/// Parses a move like `Fc>Ed` for a board of the given size. Leading and
/// trailing whitespace is ignored.
///
/// Only the syntax is checked. Whether the move is legal is decided by
/// [`Position::validate()`](crate::Position::validate).
pub fn parse_move(s: &str, size: BoardSize) -> Result<Move, ParseMoveError> {
    parse_move_ascii(s.trim().as_bytes(), size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed() {
        for s in ["", "Fc", "FcEd", "Fc-Ed", "fc>Ed", "FC>Ed", "F3>E4", "Fc>Ed>Cf", "Fc >Ed"] {
            assert_eq!(
                parse_move(s, BoardSize::Ten),
                Err(ParseMoveError::Malformed),
                "{s}"
            );
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(parse_move("Gg>Ff", BoardSize::Six), Err(ParseMoveError::OutOfRange));
        assert_eq!(parse_move("Aa>Bz", BoardSize::Ten), Err(ParseMoveError::OutOfRange));
        assert!(parse_move("Gg>Ff", BoardSize::Eight).is_ok());
    }

    #[test]
    fn test_round_trip() {
        for size in BoardSize::ALL {
            let len = size.len();
            let m = Move::new(Square::new(len - 1, 0), Square::new(len - 2, 1));
            assert_eq!(parse_move(&m.to_string(), size), Ok(m));
        }
        assert_eq!(
            parse_move("  Jj>Ii\n", BoardSize::Ten),
            Ok(Move::new(Square::new(9, 9), Square::new(8, 8)))
        );
    }
}
