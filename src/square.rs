use core::{error::Error, fmt, str::FromStr};

use crate::side::Side;

/// Error when parsing or converting an unsupported board size.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidBoardSize;

impl fmt::Display for InvalidBoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("board size must be 6, 8 or 10")
    }
}

impl Error for InvalidBoardSize {}

/// The supported board dimensions.
///
/// # Examples
///
/// ```
/// use checkers::BoardSize;
///
/// let size: BoardSize = "8".parse()?;
/// assert_eq!(size, BoardSize::Eight);
/// assert_eq!(size.pieces_per_side(), 12);
///
/// assert!("7".parse::<BoardSize>().is_err());
/// assert!(BoardSize::try_from(12).is_err());
/// # Ok::<_, checkers::InvalidBoardSize>(())
/// ```
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Default)]
pub enum BoardSize {
    Six = 6,
    #[default]
    Eight = 8,
    Ten = 10,
}

impl BoardSize {
    /// Number of rows (and columns).
    #[inline]
    pub const fn len(self) -> u32 {
        self as u32
    }

    /// Number of rows each side fills in the starting layout.
    #[inline]
    pub const fn rows_per_side(self) -> u32 {
        self.len() / 2 - 1
    }

    #[inline]
    pub const fn pieces_per_side(self) -> usize {
        (self.rows_per_side() * self.len() / 2) as usize
    }

    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        sq.row() < self.len() && sq.col() < self.len()
    }

    /// The row on which regular pieces of `side` are promoted, i.e. the
    /// opponent's back row.
    #[inline]
    pub const fn promotion_row(self, side: Side) -> u32 {
        match side {
            Side::One => 0,
            Side::Two => self.len() - 1,
        }
    }

    /// Whether `row` belongs to the starting area of `side`.
    #[inline]
    pub const fn is_home_row(self, side: Side, row: u32) -> bool {
        match side {
            Side::One => row >= self.len() - self.rows_per_side(),
            Side::Two => row < self.rows_per_side(),
        }
    }

    pub fn from_ascii(s: &[u8]) -> Result<BoardSize, InvalidBoardSize> {
        btoi::btou::<u32>(s)
            .map_err(|_| InvalidBoardSize)
            .and_then(BoardSize::try_from)
    }

    /// `Six`, `Eight` and `Ten`, in this order.
    pub const ALL: [BoardSize; 3] = [BoardSize::Six, BoardSize::Eight, BoardSize::Ten];
}

impl TryFrom<u32> for BoardSize {
    type Error = InvalidBoardSize;

    fn try_from(size: u32) -> Result<BoardSize, InvalidBoardSize> {
        Ok(match size {
            6 => BoardSize::Six,
            8 => BoardSize::Eight,
            10 => BoardSize::Ten,
            _ => return Err(InvalidBoardSize),
        })
    }
}

impl From<BoardSize> for u32 {
    #[inline]
    fn from(size: BoardSize) -> u32 {
        size.len()
    }
}

impl FromStr for BoardSize {
    type Err = InvalidBoardSize;

    fn from_str(s: &str) -> Result<BoardSize, InvalidBoardSize> {
        BoardSize::from_ascii(s.trim().as_bytes())
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.len())
    }
}

/// Error when parsing an invalid square name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square name")
    }
}

impl Error for ParseSquareError {}

/// A cell of the largest supported board, addressed by row and column.
///
/// Row 0 is the top row and is named `A`. Column 0 is the leftmost column
/// and is named `a`. The name of a square is the row letter followed by the
/// column letter, e.g. `Fc` for row 5, column 2.
///
/// Whether a square lies on a particular board is checked with
/// [`BoardSize::contains()`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

impl Square {
    /// Side length of the coordinate space shared by all board sizes.
    pub const STRIDE: u32 = 10;

    /// Creates a square from row and column.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below [`Square::STRIDE`].
    #[track_caller]
    pub const fn new(row: u32, col: u32) -> Square {
        assert!(row < Square::STRIDE && col < Square::STRIDE);
        Square((row * Square::STRIDE + col) as u8)
    }

    #[inline]
    pub const fn from_coords(row: i32, col: i32) -> Option<Square> {
        if 0 <= row && row < Square::STRIDE as i32 && 0 <= col && col < Square::STRIDE as i32 {
            Some(Square::new(row as u32, col as u32))
        } else {
            None
        }
    }

    pub(crate) const fn from_index(index: u32) -> Square {
        debug_assert!(index < Square::STRIDE * Square::STRIDE);
        Square(index as u8)
    }

    #[inline]
    pub const fn index(self) -> u32 {
        self.0 as u32
    }

    #[inline]
    pub const fn row(self) -> u32 {
        self.0 as u32 / Square::STRIDE
    }

    #[inline]
    pub const fn col(self) -> u32 {
        self.0 as u32 % Square::STRIDE
    }

    /// Playable (dark) squares are those where `row + col` is odd.
    #[inline]
    pub const fn is_playable(self) -> bool {
        (self.row() + self.col()) % 2 == 1
    }

    /// Gets the square `dr` rows and `dc` columns away.
    #[inline]
    pub const fn offset(self, dr: i32, dc: i32) -> Option<Square> {
        Square::from_coords(self.row() as i32 + dr, self.col() as i32 + dc)
    }

    /// Signed row and column distance from `self` to `other`.
    #[inline]
    pub const fn delta(self, other: Square) -> (i32, i32) {
        (
            other.row() as i32 - self.row() as i32,
            other.col() as i32 - self.col() as i32,
        )
    }

    /// The square halfway between `self` and `other`, if both are an even
    /// number of rows and columns apart.
    pub const fn midpoint(self, other: Square) -> Option<Square> {
        let (dr, dc) = self.delta(other);
        if dr % 2 != 0 || dc % 2 != 0 {
            return None;
        }
        self.offset(dr / 2, dc / 2)
    }

    #[inline]
    pub const fn row_char(self) -> char {
        (b'A' + self.row() as u8) as char
    }

    #[inline]
    pub const fn col_char(self) -> char {
        (b'a' + self.col() as u8) as char
    }

    pub fn from_ascii(s: &[u8]) -> Result<Square, ParseSquareError> {
        match *s {
            [row @ b'A'..=b'J', col @ b'a'..=b'j'] => {
                Ok(Square::new(u32::from(row - b'A'), u32::from(col - b'a')))
            }
            _ => Err(ParseSquareError),
        }
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_char(), self.col_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_char(), self.col_char())
    }
}

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for Square {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Square> {
        u.int_in_range(0..=(Square::STRIDE * Square::STRIDE - 1))
            .map(Square::from_index)
    }

    #[inline]
    fn size_hint(_depth: usize) -> (usize, Option<usize>) {
        (1, Some(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square() {
        for row in 0..Square::STRIDE {
            for col in 0..Square::STRIDE {
                let sq = Square::new(row, col);
                assert_eq!(sq.row(), row);
                assert_eq!(sq.col(), col);
            }
        }
    }

    #[test]
    fn test_square_names() {
        assert_eq!(Square::new(5, 2).to_string(), "Fc");
        assert_eq!("Fc".parse::<Square>(), Ok(Square::new(5, 2)));
        assert_eq!("Jj".parse::<Square>(), Ok(Square::new(9, 9)));
        assert_eq!("fC".parse::<Square>(), Err(ParseSquareError));
        assert_eq!("Ka".parse::<Square>(), Err(ParseSquareError));
        assert_eq!("A".parse::<Square>(), Err(ParseSquareError));
    }

    #[test]
    fn test_midpoint() {
        let from = Square::new(5, 2);
        assert_eq!(from.midpoint(Square::new(3, 4)), Some(Square::new(4, 3)));
        assert_eq!(from.midpoint(Square::new(4, 3)), None);
    }

    #[test]
    fn test_board_size() {
        assert_eq!("10".parse::<BoardSize>(), Ok(BoardSize::Ten));
        assert_eq!(" 6 ".parse::<BoardSize>(), Ok(BoardSize::Six));
        assert_eq!("9".parse::<BoardSize>(), Err(InvalidBoardSize));
        assert_eq!("eight".parse::<BoardSize>(), Err(InvalidBoardSize));
        assert_eq!(BoardSize::Six.pieces_per_side(), 6);
        assert_eq!(BoardSize::Ten.pieces_per_side(), 20);
        assert!(!BoardSize::Six.contains(Square::new(6, 1)));
        assert!(BoardSize::Eight.is_home_row(Side::One, 5));
        assert!(!BoardSize::Eight.is_home_row(Side::One, 4));
        assert!(BoardSize::Eight.is_home_row(Side::Two, 2));
    }
}
