//! Baseline computer opponent.
//!
//! Selectors pick one move from [`Position::legal_moves()`] without looking
//! ahead. Since captures are mandatory, a capture is chosen whenever one is
//! available. Capture chains are continued by asking the selector again,
//! see [`Game::make_computer_move()`](crate::Game::make_computer_move).

use core::fmt;

use rand::{seq::SliceRandom as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::{m::Move, position::Position};

/// Picks a move for the side to move.
pub trait Selector: fmt::Debug {
    /// Returns `None` only if there is no legal move.
    fn select(&mut self, pos: &Position) -> Option<Move>;
}

/// Always plays the first legal move: the piece with the lowest square in
/// row-major order, and of its moves the lowest destination.
///
/// # Examples
///
/// ```
/// use checkers::{computer::{FirstLegal, Selector}, BoardSize, Position};
///
/// let pos = Position::new(BoardSize::Eight);
/// let m = FirstLegal.select(&pos).expect("has moves");
/// assert_eq!(m.to_string(), "Fa>Eb");
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FirstLegal;

impl Selector for FirstLegal {
    fn select(&mut self, pos: &Position) -> Option<Move> {
        select_move(pos)
    }
}

/// Picks uniformly among the legal moves using a seeded generator, so that
/// games are reproducible.
#[derive(Clone, Debug)]
pub struct Seeded {
    rng: Pcg32,
}

impl Seeded {
    pub fn new(seed: u64) -> Seeded {
        Seeded {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl Selector for Seeded {
    fn select(&mut self, pos: &Position) -> Option<Move> {
        pos.legal_moves().choose(&mut self.rng).copied()
    }
}

/// The move [`FirstLegal`] would play.
pub fn select_move(pos: &Position) -> Option<Move> {
    pos.legal_moves().first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        position::Setup,
        side::Side,
        square::{BoardSize, Square},
    };

    #[test]
    fn test_prefers_capture() {
        let mut setup = Setup::empty(BoardSize::Eight);
        setup.board.set_piece_at(Square::new(7, 0), Side::One.regular());
        setup.board.set_piece_at(Square::new(5, 6), Side::One.regular());
        setup.board.set_piece_at(Square::new(4, 5), Side::Two.regular());
        let pos = Position::from_setup(setup).expect("valid setup");

        let m = select_move(&pos).expect("has moves");
        assert_eq!(m.to_string(), "Fg>De");
        assert!(m.is_jump());
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let pos = Position::new(BoardSize::Ten);
        let a: Vec<Move> = {
            let mut selector = Seeded::new(7);
            (0..8).filter_map(|_| selector.select(&pos)).collect()
        };
        let b: Vec<Move> = {
            let mut selector = Seeded::new(7);
            (0..8).filter_map(|_| selector.select(&pos)).collect()
        };
        assert_eq!(a, b);
        assert!(a.iter().all(|&m| pos.is_legal(m)));
    }

    #[test]
    fn test_no_moves() {
        let mut setup = Setup::empty(BoardSize::Six);
        setup.turn = Side::Two;
        setup.board.set_piece_at(Square::new(4, 1), Side::One.regular());
        let pos = Position::from_setup(setup).expect("valid setup");
        assert_eq!(select_move(&pos), None);
        assert_eq!(Seeded::new(1).select(&pos), None);
    }
}
