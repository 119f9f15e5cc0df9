use core::fmt;

/// Points for each surviving regular piece.
pub const REGULAR_POINTS: u32 = 1;

/// Default points for each surviving king. See
/// [`Settings::king_points`](crate::Settings::king_points).
pub const DEFAULT_KING_POINTS: u32 = 4;

/// The material of one side.
///
/// # Examples
///
/// ```
/// use checkers::{Board, BoardSize, Side};
///
/// let material = Board::new(BoardSize::Eight).material_side(Side::One);
/// assert_eq!(material.count(), 12);
/// assert_eq!(material.points(4), 12);
/// ```
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug, Hash)]
pub struct Material {
    pub regulars: usize,
    pub kings: usize,
}

impl Material {
    #[inline]
    pub const fn count(&self) -> usize {
        self.regulars + self.kings
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Sums the value of the pieces, with regular pieces worth
    /// [`REGULAR_POINTS`] and kings worth `king_points`.
    pub const fn points(&self, king_points: u32) -> u32 {
        self.regulars as u32 * REGULAR_POINTS + self.kings as u32 * king_points
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} regular, {} king", self.regulars, self.kings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points() {
        let material = Material {
            regulars: 3,
            kings: 2,
        };
        assert_eq!(material.count(), 5);
        assert_eq!(material.points(DEFAULT_KING_POINTS), 11);
        assert_eq!(material.points(2), 7);
        assert!(Material::default().is_empty());
    }
}
