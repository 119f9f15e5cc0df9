use core::{error::Error, fmt};

use bitflags::bitflags;

use crate::{
    attacks,
    bitboard::Bitboard,
    board::Board,
    m::{Move, MoveList},
    role::Role,
    side::Side,
    square::{BoardSize, Square},
    types::Piece,
};

/// Reason why a move was rejected.
///
/// Validation checks run in the order the variants are listed here, with
/// [`IllegalMove::MustContinueChain`] checked right after ownership.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum IllegalMove {
    /// Origin or destination is not on the board.
    OutOfBounds,
    /// There is no piece on the origin square.
    NoPieceAtOrigin,
    /// The piece on the origin square belongs to the other player.
    NotOwnedByCurrentPlayer,
    /// A capture chain is in progress and must be continued by the piece on
    /// `from`.
    MustContinueChain { from: Square },
    /// The destination square is not empty.
    DestinationOccupied,
    /// Origin and destination are not one or two squares apart on a
    /// diagonal.
    NotDiagonal,
    /// Regular pieces may only move toward the opponent.
    WrongDirectionForRank,
    /// A capture is available, so steps are not allowed.
    CaptureRequiredButSimpleMoveAttempted,
    /// A jump must pass over an opposing piece.
    NoPieceToCapture,
}

impl IllegalMove {
    /// A stable identifier for the reason, e.g. for translations.
    pub const fn code(&self) -> &'static str {
        match *self {
            IllegalMove::OutOfBounds => "out_of_bounds",
            IllegalMove::NoPieceAtOrigin => "no_piece_at_origin",
            IllegalMove::NotOwnedByCurrentPlayer => "not_owned_by_current_player",
            IllegalMove::MustContinueChain { .. } => "must_continue_chain",
            IllegalMove::DestinationOccupied => "destination_occupied",
            IllegalMove::NotDiagonal => "not_diagonal",
            IllegalMove::WrongDirectionForRank => "wrong_direction_for_rank",
            IllegalMove::CaptureRequiredButSimpleMoveAttempted => {
                "capture_required_but_simple_move_attempted"
            }
            IllegalMove::NoPieceToCapture => "no_piece_to_capture",
        }
    }
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            IllegalMove::OutOfBounds => f.write_str("move leaves the board"),
            IllegalMove::NoPieceAtOrigin => f.write_str("no piece at origin"),
            IllegalMove::NotOwnedByCurrentPlayer => {
                f.write_str("piece at origin belongs to the other player")
            }
            IllegalMove::MustContinueChain { from } => {
                write!(f, "capture chain must be continued from {from}")
            }
            IllegalMove::DestinationOccupied => f.write_str("destination is occupied"),
            IllegalMove::NotDiagonal => {
                f.write_str("move must be one or two squares along a diagonal")
            }
            IllegalMove::WrongDirectionForRank => {
                f.write_str("regular pieces can only move forward")
            }
            IllegalMove::CaptureRequiredButSimpleMoveAttempted => {
                f.write_str("a capture is available and must be made")
            }
            IllegalMove::NoPieceToCapture => f.write_str("no opposing piece to capture"),
        }
    }
}

impl Error for IllegalMove {}

bitflags! {
    /// Reasons for a [`Setup`] not being a valid [`Position`].
    #[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
    pub struct PositionErrorKinds: u32 {
        /// There are no pieces on the board.
        const EMPTY_BOARD = 1 << 0;
        /// A piece stands on a light square or outside of the board.
        const UNPLAYABLE_SQUARE = 1 << 1;
        /// A regular piece stands on the row where it would have been
        /// promoted.
        const REGULAR_ON_PROMOTION_ROW = 1 << 2;
        /// A side has more pieces than the starting layout provides.
        const TOO_MANY_PIECES = 1 << 3;
    }
}

/// Error when trying to create a [`Position`] from an invalid [`Setup`].
#[derive(Clone, Debug)]
pub struct PositionError {
    kinds: PositionErrorKinds,
}

impl PositionError {
    pub fn kinds(&self) -> PositionErrorKinds {
        self.kinds
    }
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("illegal position")?;

        let mut reasons = self.kinds.iter_names().map(|(name, _)| name);
        if let Some(first) = reasons.next() {
            write!(f, ": {}", first.to_ascii_lowercase().replace('_', " "))?;
            for reason in reasons {
                write!(f, ", {}", reason.to_ascii_lowercase().replace('_', " "))?;
            }
        }

        Ok(())
    }
}

impl Error for PositionError {}

/// A board and the side to move, not yet validated.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Setup {
    pub board: Board,
    pub turn: Side,
}

impl Setup {
    pub fn empty(size: BoardSize) -> Setup {
        Setup {
            board: Board::empty(size),
            turn: Side::One,
        }
    }
}

/// What happened when a move was played.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct MoveOutcome {
    /// The square of the piece that was captured.
    pub captured: Option<Square>,
    /// The moved piece became a king.
    pub promoted: bool,
    /// The same piece must jump again, so the turn did not pass.
    pub chain_continues: bool,
}

/// A position: pieces, the side to move and a possibly pending capture
/// chain.
///
/// # Examples
///
/// ```
/// use checkers::{notation, BoardSize, Position, Side};
///
/// let mut pos = Position::new(BoardSize::Eight);
/// let m = notation::parse_move("Fc>Ed", BoardSize::Eight)?;
/// let outcome = pos.play(m)?;
///
/// assert!(!outcome.chain_continues);
/// assert_eq!(pos.turn(), Side::Two);
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Position {
    board: Board,
    turn: Side,
    chain: Option<Square>,
    quiet_turns: u32,
}

impl Position {
    /// The starting position for the given board size, player one to move.
    pub fn new(size: BoardSize) -> Position {
        Position {
            board: Board::new(size),
            turn: Side::One,
            chain: None,
            quiet_turns: 0,
        }
    }

    /// Validates a [`Setup`] and turns it into a position.
    pub fn from_setup(setup: Setup) -> Result<Position, PositionError> {
        let Setup { board, turn } = setup;
        let size = board.size();
        let mut kinds = PositionErrorKinds::empty();

        if board.occupied().is_empty() {
            kinds |= PositionErrorKinds::EMPTY_BOARD;
        }
        if board.occupied() & !Bitboard::playable(size) != Bitboard::EMPTY {
            kinds |= PositionErrorKinds::UNPLAYABLE_SQUARE;
        }
        for side in Side::ALL {
            let regulars = board.by_piece(side.regular());
            if regulars.intersects(Bitboard::row(size, size.promotion_row(side))) {
                kinds |= PositionErrorKinds::REGULAR_ON_PROMOTION_ROW;
            }
            if board.by_side(side).count() > size.pieces_per_side() {
                kinds |= PositionErrorKinds::TOO_MANY_PIECES;
            }
        }

        if kinds.is_empty() {
            Ok(Position {
                board,
                turn,
                chain: None,
                quiet_turns: 0,
            })
        } else {
            Err(PositionError { kinds })
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// The square of the piece that must continue capturing, if a capture
    /// chain is in progress.
    #[inline]
    pub fn chain(&self) -> Option<Square> {
        self.chain
    }

    /// Number of consecutive completed turns without a capture or a
    /// promotion.
    #[inline]
    pub fn quiet_turns(&self) -> u32 {
        self.quiet_turns
    }

    fn gen_jumps(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        let empty = !self.board.occupied();
        let theirs = self.board.by_side(!piece.side);
        for to in attacks::jump_targets(self.size(), piece, from) & empty {
            if from.midpoint(to).is_some_and(|over| theirs.contains(over)) {
                moves.push(Move::new(from, to));
            }
        }
    }

    fn gen_steps(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        let empty = !self.board.occupied();
        for to in attacks::step_targets(self.size(), piece, from) & empty {
            moves.push(Move::new(from, to));
        }
    }

    fn pieces_to_move(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        let movers = match self.chain {
            Some(sq) => Bitboard::from_square(sq),
            None => self.board.by_side(self.turn),
        };
        movers
            .into_iter()
            .filter_map(|sq| self.board.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Collects all capturing moves of the side to move.
    pub fn capture_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for (from, piece) in self.pieces_to_move() {
            self.gen_jumps(from, piece, &mut moves);
        }
        moves
    }

    /// Tests if the side to move has to capture.
    pub fn has_capture(&self) -> bool {
        !self.capture_moves().is_empty()
    }

    /// Collects all legal moves of the side to move.
    ///
    /// If any capture is available, only captures are legal. While a chain
    /// is in progress, only further jumps of the chain piece are legal.
    /// Moves are ordered by origin and then by destination, both in
    /// row-major order.
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = self.capture_moves();
        if moves.is_empty() && self.chain.is_none() {
            for (from, piece) in self.pieces_to_move() {
                self.gen_steps(from, piece, &mut moves);
            }
        }
        moves
    }

    /// Checks a candidate move against all rules.
    pub fn validate(&self, m: Move) -> Result<(), IllegalMove> {
        let size = self.size();
        if !size.contains(m.from) || !size.contains(m.to) {
            return Err(IllegalMove::OutOfBounds);
        }

        let piece = self
            .board
            .piece_at(m.from)
            .ok_or(IllegalMove::NoPieceAtOrigin)?;
        if piece.side != self.turn {
            return Err(IllegalMove::NotOwnedByCurrentPlayer);
        }
        if let Some(from) = self.chain {
            if m.from != from {
                return Err(IllegalMove::MustContinueChain { from });
            }
        }
        if self.board.occupied().contains(m.to) {
            return Err(IllegalMove::DestinationOccupied);
        }
        if !m.is_diagonal() {
            return Err(IllegalMove::NotDiagonal);
        }
        if !piece.role.may_advance(piece.side, m.row_direction()) {
            return Err(IllegalMove::WrongDirectionForRank);
        }

        match m.captured() {
            None => {
                if self.chain.is_some() || self.has_capture() {
                    return Err(IllegalMove::CaptureRequiredButSimpleMoveAttempted);
                }
            }
            Some(over) => {
                if !self.board.by_side(!self.turn).contains(over) {
                    return Err(IllegalMove::NoPieceToCapture);
                }
            }
        }

        Ok(())
    }

    /// Tests a move for legality.
    pub fn is_legal(&self, m: Move) -> bool {
        self.validate(m).is_ok()
    }

    /// Validates and plays a move.
    pub fn play(&mut self, m: Move) -> Result<MoveOutcome, IllegalMove> {
        self.validate(m)?;
        Ok(self.play_unchecked(m))
    }

    /// Plays a move. It is the callers responsibility to ensure the move is
    /// legal.
    ///
    /// After a jump, the turn only passes if the piece cannot jump again
    /// from its landing square. Promotion is applied when the turn passes,
    /// never in the middle of a chain.
    pub fn play_unchecked(&mut self, m: Move) -> MoveOutcome {
        let Some(piece) = self.board.remove_piece_at(m.from) else {
            return MoveOutcome {
                captured: None,
                promoted: false,
                chain_continues: false,
            };
        };

        let captured = m.captured();
        if let Some(over) = captured {
            self.board.remove_piece_at(over);
        }
        self.board.set_piece_at(m.to, piece);

        if captured.is_some() {
            let mut further = MoveList::new();
            self.gen_jumps(m.to, piece, &mut further);
            if !further.is_empty() {
                self.chain = Some(m.to);
                return MoveOutcome {
                    captured,
                    promoted: false,
                    chain_continues: true,
                };
            }
        }

        self.chain = None;
        let promoted = piece.role == Role::Regular
            && m.to.row() == self.size().promotion_row(piece.side)
            && self.board.promote(m.to);

        if captured.is_some() || promoted {
            self.quiet_turns = 0;
        } else {
            self.quiet_turns += 1;
        }
        self.turn = !self.turn;

        MoveOutcome {
            captured,
            promoted,
            chain_continues: false,
        }
    }

    /// The side to move has no pieces or no legal moves.
    pub fn is_stuck(&self) -> bool {
        self.legal_moves().is_empty()
    }

    /// The winner, if the side to move is stuck.
    pub fn winner(&self) -> Option<Side> {
        if self.is_stuck() {
            Some(!self.turn)
        } else {
            None
        }
    }
}

impl Default for Position {
    fn default() -> Position {
        Position::new(BoardSize::default())
    }
}
