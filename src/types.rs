use core::fmt;

use crate::{role::Role, side::Side};

/// A piece with [`Side`] and [`Role`].
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub side: Side,
    pub role: Role,
}

impl Piece {
    /// Gets the board symbol: `X` and `K` for player one, `O` and `U` for
    /// player two.
    pub const fn char(self) -> char {
        match self {
            Piece { side: Side::One, role: Role::Regular } => 'X',
            Piece { side: Side::One, role: Role::King } => 'K',
            Piece { side: Side::Two, role: Role::Regular } => 'O',
            Piece { side: Side::Two, role: Role::King } => 'U',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_chars() {
        assert_eq!(Side::One.regular().char(), 'X');
        assert_eq!(Side::One.king().char(), 'K');
        assert_eq!(Side::Two.regular().char(), 'O');
        assert_eq!(Side::Two.king().to_string(), "U");
    }
}
