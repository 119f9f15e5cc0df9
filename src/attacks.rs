//! Diagonal step and jump targets.
//!
//! These functions only know about geometry and direction. They do not look
//! at occupancy. Legality is decided by [`Position`](crate::Position).

use crate::{bitboard::Bitboard, square::BoardSize, square::Square, types::Piece};

/// Diagonal directions as `(row, column)` deltas, ordered so that targets
/// of a single origin come out in row-major order.
pub const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

fn targets(size: BoardSize, piece: Piece, from: Square, distance: i32) -> Bitboard {
    let mut bb = Bitboard::EMPTY;
    for (dr, dc) in DIAGONALS {
        if !piece.role.may_advance(piece.side, dr as i8) {
            continue;
        }
        if let Some(to) = from.offset(dr * distance, dc * distance) {
            if size.contains(to) {
                bb.add(to);
            }
        }
    }
    bb
}

/// Squares a piece on `from` may step to on an empty board.
///
/// # Examples
///
/// ```
/// use checkers::{attacks, BoardSize, Side, Square};
///
/// let from: Square = "Fc".parse()?;
/// let steps = attacks::step_targets(BoardSize::Eight, Side::One.regular(), from);
/// assert_eq!(steps.into_iter().map(|sq| sq.to_string()).collect::<Vec<_>>(), ["Eb", "Ed"]);
/// # Ok::<_, checkers::ParseSquareError>(())
/// ```
pub fn step_targets(size: BoardSize, piece: Piece, from: Square) -> Bitboard {
    targets(size, piece, from, 1)
}

/// Landing squares of jumps a piece on `from` could make, ignoring whether
/// there is anything to jump over.
pub fn jump_targets(size: BoardSize, piece: Piece, from: Square) -> Bitboard {
    targets(size, piece, from, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::side::Side;

    #[test]
    fn test_regular_steps_forward_only() {
        let from = Square::new(4, 3);
        let one = step_targets(BoardSize::Eight, Side::One.regular(), from);
        assert_eq!(one, Bitboard::from(Square::new(3, 2)) | Bitboard::from(Square::new(3, 4)));
        let two = step_targets(BoardSize::Eight, Side::Two.regular(), from);
        assert_eq!(two, Bitboard::from(Square::new(5, 2)) | Bitboard::from(Square::new(5, 4)));
    }

    #[test]
    fn test_king_steps_all_directions() {
        let from = Square::new(4, 3);
        assert_eq!(step_targets(BoardSize::Eight, Side::Two.king(), from).count(), 4);
        assert_eq!(jump_targets(BoardSize::Eight, Side::One.king(), from).count(), 4);
    }

    #[test]
    fn test_targets_stay_on_board() {
        let corner = Square::new(5, 0);
        let jumps = jump_targets(BoardSize::Six, Side::Two.king(), corner);
        assert_eq!(jumps, Bitboard::from_square(Square::new(3, 2)));
        assert!(step_targets(BoardSize::Six, Side::Two.regular(), corner).is_empty());
    }
}
