use core::fmt;

use arrayvec::ArrayVec;

use crate::square::Square;

/// A single step or a single jump of one piece.
///
/// A move between diagonal neighbours is a step. A move two diagonal
/// squares away is a jump over the square in between. Capture chains are
/// played one jump at a time, see [`Chain`].
///
/// # Display
///
/// `Move` is displayed as origin and destination separated by `>`, e.g.
/// `Fc>Ed`. See [`notation`](crate::notation) for parsing.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    /// Whether `from` and `to` lie on a common diagonal at distance 1 or 2.
    pub const fn is_diagonal(self) -> bool {
        let (dr, dc) = self.from.delta(self.to);
        dr.abs() == dc.abs() && (dr.abs() == 1 || dr.abs() == 2)
    }

    #[inline]
    pub const fn is_step(self) -> bool {
        self.is_diagonal() && self.from.delta(self.to).0.abs() == 1
    }

    #[inline]
    pub const fn is_jump(self) -> bool {
        self.is_diagonal() && self.from.delta(self.to).0.abs() == 2
    }

    /// The square jumped over, or `None` if this is not a jump.
    pub const fn captured(self) -> Option<Square> {
        if self.is_jump() {
            self.from.midpoint(self.to)
        } else {
            None
        }
    }

    /// Row direction of the move: `-1` up the board, `1` down.
    #[inline]
    pub const fn row_direction(self) -> i8 {
        self.from.delta(self.to).0.signum() as i8
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}>{}", self.from, self.to)
    }
}

/// A container for moves that can be stored inline on the stack.
///
/// There is enough space to hold the legal moves of any position on any of
/// the supported board sizes.
///
/// # Example
///
/// ```
/// use checkers::{BoardSize, Position};
///
/// let pos = Position::new(BoardSize::Eight);
/// let moves = pos.legal_moves();
/// assert_eq!(moves.len(), 7);
/// assert!(moves.iter().all(|m| m.is_step()));
/// ```
pub type MoveList = ArrayVec<Move, 128>;

/// Maximum number of jumps in one turn: every jump removes one of at most
/// 20 opposing pieces.
pub const MAX_CHAIN: usize = 20;

/// The moves one piece made during a single turn.
///
/// This is a single step, or one or more connected jumps.
///
/// # Display
///
/// Displayed as the path of the piece, e.g. `Fa>Dc>Be`.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct Chain {
    moves: ArrayVec<Move, MAX_CHAIN>,
}

impl Chain {
    pub fn new() -> Chain {
        Chain::default()
    }

    /// Appends a move.
    ///
    /// # Panics
    ///
    /// Panics if the chain is full or `m` does not start where the previous
    /// move ended.
    #[track_caller]
    pub fn push(&mut self, m: Move) {
        assert!(self.to().is_none_or(|to| to == m.from), "disconnected chain");
        self.moves.push(m);
    }

    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn from(&self) -> Option<Square> {
        self.moves.first().map(|m| m.from)
    }

    pub fn to(&self) -> Option<Square> {
        self.moves.last().map(|m| m.to)
    }

    /// Squares of the captured pieces, in the order they were jumped.
    pub fn captures(&self) -> impl Iterator<Item = Square> + '_ {
        self.moves.iter().filter_map(|m| m.captured())
    }

    pub fn is_capture(&self) -> bool {
        self.moves.first().is_some_and(|m| m.is_jump())
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(from) = self.from() {
            write!(f, "{from}")?;
        }
        for m in &self.moves {
            write!(f, ">{}", m.to)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::mem;

    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().expect("valid square")
    }

    #[test]
    fn test_move_size() {
        assert!(mem::size_of::<Move>() <= 2);
    }

    #[test]
    fn test_move_kinds() {
        let step = Move::new(sq("Fc"), sq("Ed"));
        assert!(step.is_step() && !step.is_jump());
        assert_eq!(step.captured(), None);
        assert_eq!(step.row_direction(), -1);

        let jump = Move::new(sq("Cd"), sq("Ef"));
        assert!(jump.is_jump());
        assert_eq!(jump.captured(), Some(sq("De")));
        assert_eq!(jump.row_direction(), 1);

        assert!(!Move::new(sq("Fc"), sq("Fe")).is_diagonal());
        assert!(!Move::new(sq("Fa"), sq("Cd")).is_diagonal());
        assert!(!Move::new(sq("Fa"), sq("Fa")).is_diagonal());
    }

    #[test]
    fn test_chain_display() {
        let mut chain = Chain::new();
        assert_eq!(chain.to_string(), "");
        chain.push(Move::new(sq("Fa"), sq("Dc")));
        chain.push(Move::new(sq("Dc"), sq("Be")));
        assert_eq!(chain.to_string(), "Fa>Dc>Be");
        assert_eq!(chain.captures().collect::<Vec<_>>(), [sq("Eb"), sq("Cd")]);
        assert!(chain.is_capture());
        assert_eq!(chain.len(), 2);
    }

    #[test]
    #[should_panic(expected = "disconnected chain")]
    fn test_chain_must_connect() {
        let mut chain = Chain::new();
        chain.push(Move::new(sq("Fa"), sq("Dc")));
        chain.push(Move::new(sq("Fe"), sq("Dg")));
    }
}
