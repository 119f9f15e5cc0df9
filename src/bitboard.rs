//! Sets of squares.

use core::{fmt, fmt::Write as _, iter::FusedIterator, ops};

use crate::square::{BoardSize, Square};

/// A set of [squares](super::Square) represented by a 128 bit integer mask.
///
/// Bit `n` is set if the square with index `n` (row-major, stride
/// [`Square::STRIDE`]) is in the set, so iteration yields squares in
/// row-major order.
///
/// # Examples
///
/// ```
/// use checkers::{Bitboard, BoardSize, Square};
///
/// let playable = Bitboard::playable(BoardSize::Six);
/// assert_eq!(playable.count(), 18);
/// assert!(playable.contains(Square::new(0, 1)));
/// assert!(!playable.contains(Square::new(0, 0)));
/// ```
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Bitboard(pub u128);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    #[inline]
    pub const fn from_square(sq: Square) -> Bitboard {
        Bitboard(1 << sq.index())
    }

    /// All playable squares of a board of the given size.
    pub const fn playable(size: BoardSize) -> Bitboard {
        let mut bb = 0;
        let mut row = 0;
        while row < size.len() {
            let mut col = (row + 1) % 2;
            while col < size.len() {
                bb |= 1 << Square::new(row, col).index();
                col += 2;
            }
            row += 1;
        }
        Bitboard(bb)
    }

    /// All squares of the given row.
    pub const fn row(size: BoardSize, row: u32) -> Bitboard {
        if row >= size.len() {
            return Bitboard::EMPTY;
        }
        let mask = (1u128 << size.len()) - 1;
        Bitboard(mask << (row * Square::STRIDE))
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & Bitboard::from_square(sq).0 != 0
    }

    #[inline]
    pub fn add(&mut self, sq: Square) {
        self.0 |= Bitboard::from_square(sq).0;
    }

    #[inline]
    pub fn discard(&mut self, sq: Square) {
        self.0 &= !Bitboard::from_square(sq).0;
    }

    #[inline]
    pub fn set(&mut self, sq: Square, v: bool) {
        if v {
            self.add(sq);
        } else {
            self.discard(sq);
        }
    }

    #[inline]
    pub const fn intersects(self, other: Bitboard) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub const fn first(self) -> Option<Square> {
        if self.is_empty() {
            None
        } else {
            Some(Square::from_index(self.0.trailing_zeros()))
        }
    }

    #[inline]
    pub const fn count(self) -> usize {
        self.0.count_ones() as usize
    }

}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..Square::STRIDE {
            for col in 0..Square::STRIDE {
                f.write_char(if self.contains(Square::new(row, col)) {
                    '1'
                } else {
                    '.'
                })?;
                f.write_char(if col + 1 < Square::STRIDE { ' ' } else { '\n' })?;
            }
        }
        Ok(())
    }
}

impl From<Square> for Bitboard {
    #[inline]
    fn from(sq: Square) -> Bitboard {
        Bitboard::from_square(sq)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<T>(iter: T) -> Bitboard
    where
        T: IntoIterator<Item = Square>,
    {
        let mut result = Bitboard::EMPTY;
        for sq in iter {
            result.add(sq);
        }
        result
    }
}

impl ops::BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, Bitboard(rhs): Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs)
    }
}

impl ops::BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, Bitboard(rhs): Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs)
    }
}

impl ops::BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, Bitboard(rhs): Bitboard) {
        self.0 |= rhs;
    }
}

impl ops::Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = IntoIter;

    #[inline]
    fn into_iter(self) -> IntoIter {
        IntoIter(self)
    }
}

/// Iterator over the squares of a [`Bitboard`], in row-major order.
#[derive(Debug, Clone)]
pub struct IntoIter(Bitboard);

impl Iterator for IntoIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let square = self.0.first();
        self.0 .0 &= self.0 .0.wrapping_sub(1);
        square
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count();
        (len, Some(len))
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}
