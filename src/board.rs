use core::fmt::{self, Write as _};

use crate::{
    bitboard::Bitboard,
    material::Material,
    role::Role,
    side::{BySide, Side},
    square::{BoardSize, Square},
    types::Piece,
};

/// [`Piece`] positions on a board.
///
/// # Examples
///
/// ```
/// use checkers::{Board, BoardSize, Side, Square};
///
/// let board = Board::new(BoardSize::Eight);
/// assert_eq!(board.piece_at(Square::new(5, 0)), Some(Side::One.regular()));
/// assert_eq!(board.piece_at(Square::new(4, 1)), None);
///
/// assert_eq!(board.to_string(), concat!(
///     "  a b c d e f g h\n",
///     "A . O . O . O . O\n",
///     "B O . O . O . O .\n",
///     "C . O . O . O . O\n",
///     "D . . . . . . . .\n",
///     "E . . . . . . . .\n",
///     "F X . X . X . X .\n",
///     "G . X . X . X . X\n",
///     "H X . X . X . X .\n",
/// ));
/// ```
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    size: BoardSize,
    by_side: BySide<Bitboard>,
    kings: Bitboard,
}

impl Board {
    /// The starting layout: each side fills the playable squares of the
    /// rows nearest to its own edge, leaving two empty rows in the middle.
    pub fn new(size: BoardSize) -> Board {
        let mut board = Board::empty(size);
        for sq in Bitboard::playable(size) {
            for side in Side::ALL {
                if size.is_home_row(side, sq.row()) {
                    board.by_side.get_mut(side).add(sq);
                }
            }
        }
        board
    }

    pub fn empty(size: BoardSize) -> Board {
        Board {
            size,
            by_side: BySide::default(),
            kings: Bitboard::EMPTY,
        }
    }

    #[inline]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.by_side.one | self.by_side.two
    }

    #[inline]
    pub fn by_side(&self, side: Side) -> Bitboard {
        *self.by_side.get(side)
    }

    #[inline]
    pub fn kings(&self) -> Bitboard {
        self.kings
    }

    #[inline]
    pub fn regulars(&self) -> Bitboard {
        self.occupied() & !self.kings
    }

    #[inline]
    pub fn by_role(&self, role: Role) -> Bitboard {
        match role {
            Role::Regular => self.regulars(),
            Role::King => self.kings,
        }
    }

    #[inline]
    pub fn by_piece(&self, piece: Piece) -> Bitboard {
        self.by_side(piece.side) & self.by_role(piece.role)
    }

    #[inline]
    pub fn side_at(&self, sq: Square) -> Option<Side> {
        self.by_side.find(|bb| bb.contains(sq))
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.side_at(sq).map(|side| Piece {
            side,
            role: if self.kings.contains(sq) {
                Role::King
            } else {
                Role::Regular
            },
        })
    }

    pub fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_at(sq);
        if let Some(p) = piece {
            self.by_side.get_mut(p.side).discard(sq);
            self.kings.discard(sq);
        }
        piece
    }

    pub fn set_piece_at(&mut self, sq: Square, Piece { side, role }: Piece) {
        self.by_side.get_mut(side.other()).discard(sq);
        self.by_side.get_mut(side).add(sq);
        self.kings.set(sq, role.is_king());
    }

    /// Turns the regular piece on `sq` into a king. Returns `false` if
    /// there is no regular piece to promote.
    pub fn promote(&mut self, sq: Square) -> bool {
        if self.regulars().contains(sq) {
            self.kings.add(sq);
            true
        } else {
            false
        }
    }

    pub fn material_side(&self, side: Side) -> Material {
        let ours = self.by_side(side);
        Material {
            regulars: (ours & !self.kings).count(),
            kings: (ours & self.kings).count(),
        }
    }

    pub fn material(&self) -> BySide<Material> {
        BySide::new_with(|side| self.material_side(side))
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new(BoardSize::default())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.size.len();
        f.write_char(' ')?;
        for col in 0..len {
            write!(f, " {}", Square::new(0, col).col_char())?;
        }
        f.write_char('\n')?;

        for row in 0..len {
            f.write_char(Square::new(row, 0).row_char())?;
            for col in 0..len {
                let sq = Square::new(row, col);
                f.write_char(' ')?;
                f.write_char(self.piece_at(sq).map_or('.', Piece::char))?;
            }
            f.write_char('\n')?;
        }

        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})\n{}", self.size, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_material() {
        for size in BoardSize::ALL {
            let board = Board::new(size);
            for side in Side::ALL {
                let material = board.material_side(side);
                assert_eq!(material.regulars, size.pieces_per_side());
                assert_eq!(material.kings, 0);
            }
            assert!(board
                .occupied()
                .into_iter()
                .all(|sq| sq.is_playable() && size.contains(sq)));
        }
    }

    #[test]
    fn test_middle_band_is_empty() {
        let board = Board::new(BoardSize::Ten);
        assert!((Bitboard::row(BoardSize::Ten, 4) & board.occupied()).is_empty());
        assert!((Bitboard::row(BoardSize::Ten, 5) & board.occupied()).is_empty());
        assert!(Bitboard::row(BoardSize::Ten, 3).intersects(board.by_side(Side::Two)));
        assert!(Bitboard::row(BoardSize::Ten, 6).intersects(board.by_side(Side::One)));
    }

    #[test]
    fn test_set_remove_promote() {
        let mut board = Board::empty(BoardSize::Six);
        let sq = Square::new(2, 1);
        board.set_piece_at(sq, Side::Two.regular());
        assert_eq!(board.piece_at(sq), Some(Side::Two.regular()));
        assert!(board.promote(sq));
        assert_eq!(board.piece_at(sq), Some(Side::Two.king()));
        assert!(!board.promote(sq));
        board.set_piece_at(sq, Side::One.regular());
        assert_eq!(board.piece_at(sq), Some(Side::One.regular()));
        assert!(board.by_side(Side::Two).is_empty());
        assert_eq!(board.remove_piece_at(sq), Some(Side::One.regular()));
        assert_eq!(board.remove_piece_at(sq), None);
        assert!(board.occupied().is_empty());
    }

    #[test]
    fn test_display_six() {
        assert_eq!(
            Board::new(BoardSize::Six).to_string(),
            concat!(
                "  a b c d e f\n",
                "A . O . O . O\n",
                "B O . O . O .\n",
                "C . . . . . .\n",
                "D . . . . . .\n",
                "E . X . X . X\n",
                "F X . X . X .\n",
            )
        );
    }
}
