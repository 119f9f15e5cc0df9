use crate::{side::Side, types::Piece};

/// Piece ranks: `Regular` and `King`.
///
/// # Examples
///
/// ```
/// use checkers::{Role, Side};
///
/// assert!(Role::King.is_king());
/// assert_eq!(Role::Regular.of(Side::One).char(), 'X');
/// ```
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Role {
    Regular = 1,
    King = 2,
}

impl Role {
    /// Gets a [`Piece`] of the given side.
    #[inline]
    pub const fn of(self, side: Side) -> Piece {
        Piece { side, role: self }
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, Role::King)
    }

    /// Whether a piece of this rank may move or jump in the row direction
    /// `dr` (either `-1` or `1`) when owned by `side`.
    #[inline]
    pub const fn may_advance(self, side: Side, dr: i8) -> bool {
        match self {
            Role::King => true,
            Role::Regular => dr == side.forward(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_may_advance() {
        assert!(Role::Regular.may_advance(Side::One, -1));
        assert!(!Role::Regular.may_advance(Side::One, 1));
        assert!(Role::Regular.may_advance(Side::Two, 1));
        assert!(Role::King.may_advance(Side::One, 1));
        assert!(Role::King.may_advance(Side::Two, -1));
    }
}
