use core::{fmt, ops};

use crate::{role::Role, types::Piece};

/// The two seats at the board: `One` moves first and starts at the bottom,
/// `Two` starts at the top.
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Side {
    One = 1,
    Two = 2,
}

impl Side {
    #[inline]
    pub fn fold<T>(self, one: T, two: T) -> T {
        match self {
            Side::One => one,
            Side::Two => two,
        }
    }

    #[inline]
    pub const fn other(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// Row delta of a forward step: player one moves up the board (toward
    /// row 0), player two moves down.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::One => -1,
            Side::Two => 1,
        }
    }

    #[inline]
    pub const fn regular(self) -> Piece {
        Role::Regular.of(self)
    }

    #[inline]
    pub const fn king(self) -> Piece {
        Role::King.of(self)
    }

    /// `One` and `Two`, in this order.
    pub const ALL: [Side; 2] = [Side::One, Side::Two];
}

impl ops::Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.other()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fold("player 1", "player 2"))
    }
}

/// Container with values for each [`Side`].
#[derive(Clone, Default, Eq, PartialEq, Debug, Hash)]
pub struct BySide<T> {
    pub one: T,
    pub two: T,
}

impl<T> BySide<T> {
    #[inline]
    pub fn new_with<F>(mut init: F) -> BySide<T>
    where
        F: FnMut(Side) -> T,
    {
        BySide {
            one: init(Side::One),
            two: init(Side::Two),
        }
    }

    #[inline]
    pub const fn get(&self, side: Side) -> &T {
        match side {
            Side::One => &self.one,
            Side::Two => &self.two,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::One => &mut self.one,
            Side::Two => &mut self.two,
        }
    }

    #[inline]
    pub fn find<F>(&self, mut predicate: F) -> Option<Side>
    where
        F: FnMut(&T) -> bool,
    {
        if predicate(&self.one) {
            Some(Side::One)
        } else if predicate(&self.two) {
            Some(Side::Two)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other() {
        assert_eq!(!Side::One, Side::Two);
        assert_eq!(Side::Two.other(), Side::One);
    }

    #[test]
    fn test_forward_points_at_opponent() {
        assert_eq!(Side::One.forward(), -1);
        assert_eq!(Side::Two.forward(), 1);
    }

    #[test]
    fn test_by_side() {
        let mut counts = BySide::new_with(|side| side as u8);
        assert_eq!(*counts.get(Side::One), 1);
        *counts.get_mut(Side::Two) += 10;
        assert_eq!(counts.two, 12);
        assert_eq!(counts, BySide { one: 1, two: 12 });
        assert_eq!(counts.find(|&n| n == 12), Some(Side::Two));
        assert_eq!(counts.find(|&n| n == 0), None);
    }
}
