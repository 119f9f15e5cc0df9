use core::{error::Error, fmt};

use tracing::{debug, trace, warn};

use crate::{
    board::Board,
    computer::{FirstLegal, Selector},
    m::{Chain, Move, MoveList},
    player::{validate_name, NameError, Player},
    position::{IllegalMove, MoveOutcome, Position},
    settings::Settings,
    side::{BySide, Side},
    square::{BoardSize, InvalidBoardSize, Square},
    types::Piece,
};

/// State of a round.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Status {
    InProgress,
    Player1Won,
    Player2Won,
    Tie,
    /// The player to move gave up.
    Quit,
}

impl Status {
    #[inline]
    pub const fn won(side: Side) -> Status {
        match side {
            Side::One => Status::Player1Won,
            Side::Two => Status::Player2Won,
        }
    }

    /// The winning side, if the round was won by elimination or blockade.
    #[inline]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Status::Player1Won => Some(Side::One),
            Status::Player2Won => Some(Side::Two),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Status::InProgress)
    }

    #[inline]
    pub const fn is_terminal(self) -> bool {
        !self.is_in_progress()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            Status::InProgress => "in progress",
            Status::Player1Won => "player 1 won",
            Status::Player2Won => "player 2 won",
            Status::Tie => "tie",
            Status::Quit => "quit",
        })
    }
}

/// Error when a game cannot be set up.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    InvalidBoardSize(InvalidBoardSize),
    /// The name of the player on `side` was rejected.
    InvalidName { side: Side, error: NameError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBoardSize(error) => write!(f, "invalid board size: {error}"),
            ConfigError::InvalidName { side, error } => {
                write!(f, "invalid name for {side}: {error}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::InvalidBoardSize(error) => Some(error),
            ConfigError::InvalidName { error, .. } => Some(error),
        }
    }
}

impl From<InvalidBoardSize> for ConfigError {
    fn from(error: InvalidBoardSize) -> ConfigError {
        ConfigError::InvalidBoardSize(error)
    }
}

/// Error when a move cannot be made.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PlayError {
    /// The move breaks a rule. Nothing changed, ask again.
    IllegalMove(IllegalMove),
    /// The round has already ended with the given status.
    RoundOver(Status),
    /// The computer was asked to move without any legal move. This cannot
    /// happen for a round in progress, unless a custom [`Selector`]
    /// misbehaves.
    NoMoveAvailable,
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::IllegalMove(reason) => write!(f, "illegal move: {reason}"),
            PlayError::RoundOver(status) => write!(f, "round is over ({status})"),
            PlayError::NoMoveAvailable => f.write_str("no move available"),
        }
    }
}

impl Error for PlayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PlayError::IllegalMove(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<IllegalMove> for PlayError {
    fn from(reason: IllegalMove) -> PlayError {
        PlayError::IllegalMove(reason)
    }
}

/// A session between two players: the current round and the cumulative
/// scores.
///
/// # Examples
///
/// ```
/// use checkers::{notation, Game, Status};
///
/// let mut game = Game::new(8, "Alice", "Bob", false)?;
/// assert_eq!(game.current_player().name(), "Alice");
///
/// let m = notation::parse_move("Fc>Ed", game.board_size())?;
/// game.make_move(m)?;
///
/// assert_eq!(game.current_player().name(), "Bob");
/// assert_eq!(game.last_move(), Some(m));
/// assert_eq!(game.status(), Status::InProgress);
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Game {
    players: BySide<Player>,
    position: Position,
    status: Status,
    last: Option<(Side, Move)>,
    settings: Settings,
    selector: Box<dyn Selector>,
}

impl Game {
    /// Sets up a session and starts its first round. If `vs_computer` is
    /// set, player 2 is played by the computer.
    pub fn new(
        size: u32,
        player1: &str,
        player2: &str,
        vs_computer: bool,
    ) -> Result<Game, ConfigError> {
        let size = BoardSize::try_from(size)?;
        Game::from_position(Position::new(size), player1, player2, vs_computer)
    }

    /// Sets up a session whose first round continues from `position`, for
    /// example one built with [`Position::from_setup()`]. Later rounds start
    /// from the usual layout.
    pub fn from_position(
        position: Position,
        player1: &str,
        player2: &str,
        vs_computer: bool,
    ) -> Result<Game, ConfigError> {
        for (side, name) in [(Side::One, player1), (Side::Two, player2)] {
            validate_name(name).map_err(|error| ConfigError::InvalidName { side, error })?;
        }
        if player1 == player2 {
            return Err(ConfigError::InvalidName {
                side: Side::Two,
                error: NameError::Duplicate,
            });
        }

        let mut game = Game {
            players: BySide {
                one: Player::new(player1, Side::One, false),
                two: Player::new(player2, Side::Two, vs_computer),
            },
            position,
            status: Status::InProgress,
            last: None,
            settings: Settings::default(),
            selector: Box::new(FirstLegal),
        };
        game.start_round();
        Ok(game)
    }

    /// Replaces the settings. The round may end right away, e.g. if the
    /// quiet turn limit is already reached.
    #[must_use]
    pub fn with_settings(mut self, settings: Settings) -> Game {
        self.settings = settings;
        if self.status.is_in_progress() && self.position.chain().is_none() {
            self.check_turn_start();
        }
        self
    }

    /// Replaces the policy used by [`Game::make_computer_move()`].
    #[must_use]
    pub fn with_selector<S: Selector + 'static>(mut self, selector: S) -> Game {
        self.selector = Box::new(selector);
        self
    }

    /// Starts a new round on a fresh board. Scores are kept. On an invalid
    /// size nothing changes.
    pub fn reset(&mut self, size: u32) -> Result<(), ConfigError> {
        let size = BoardSize::try_from(size)?;
        self.position = Position::new(size);
        self.status = Status::InProgress;
        self.last = None;
        self.start_round();
        Ok(())
    }

    fn start_round(&mut self) {
        debug!(
            size = %self.position.size(),
            player1 = self.players.one.name(),
            player2 = self.players.two.name(),
            "round started"
        );
        self.check_turn_start();
    }

    #[inline]
    pub fn player(&self, side: Side) -> &Player {
        self.players.get(side)
    }

    #[inline]
    pub fn player1(&self) -> &Player {
        &self.players.one
    }

    #[inline]
    pub fn player2(&self) -> &Player {
        &self.players.two
    }

    /// The player to move. After [`Game::quit()`] this is the player who
    /// quit.
    #[inline]
    pub fn current_player(&self) -> &Player {
        self.players.get(self.position.turn())
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The winner of a round that was won on the board.
    pub fn winner(&self) -> Option<&Player> {
        self.status.winner().map(|side| self.player(side))
    }

    /// Like [`Game::winner()`], but after a quit this is the opponent of
    /// the player who quit.
    pub fn de_facto_winner(&self) -> Option<&Player> {
        match self.status {
            Status::Quit => Some(self.player(!self.position.turn())),
            _ => self.winner(),
        }
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.position.board()
    }

    #[inline]
    pub fn board_size(&self) -> BoardSize {
        self.position.size()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last.map(|(_, m)| m)
    }

    pub fn last_player(&self) -> Option<&Player> {
        self.last.map(|(side, _)| self.player(side))
    }

    /// Legal moves of the player to move. Empty once the round is over.
    pub fn legal_moves(&self) -> MoveList {
        if self.status.is_in_progress() {
            self.position.legal_moves()
        } else {
            MoveList::new()
        }
    }

    fn square(&self, row: u32, col: u32) -> Option<Square> {
        let len = self.board_size().len();
        (row < len && col < len).then(|| Square::new(row, col))
    }

    /// The piece on a cell, or `None` for empty or off-board cells.
    pub fn piece_at(&self, row: u32, col: u32) -> Option<Piece> {
        self.square(row, col).and_then(|sq| self.board().piece_at(sq))
    }

    /// The piece on a cell, only if it belongs to `side`.
    pub fn piece_of(&self, side: Side, row: u32, col: u32) -> Option<Piece> {
        self.piece_at(row, col).filter(|piece| piece.side == side)
    }

    /// Value of the remaining pieces of `side`. See
    /// [`Material::points()`](crate::Material::points).
    pub fn compute_points(&self, side: Side) -> u32 {
        self.board()
            .material_side(side)
            .points(self.settings.king_points)
    }

    fn ensure_in_progress(&self) -> Result<(), PlayError> {
        if self.status.is_in_progress() {
            Ok(())
        } else {
            Err(PlayError::RoundOver(self.status))
        }
    }

    /// Validates and plays a single step or jump of the player to move.
    ///
    /// If the jump can be continued, the same player stays on move and
    /// [`MoveOutcome::chain_continues`] is set. Rejected moves change
    /// nothing.
    pub fn make_move(&mut self, m: Move) -> Result<MoveOutcome, PlayError> {
        self.ensure_in_progress()?;

        let mover = self.position.turn();
        let outcome = self.position.play(m).map_err(|reason| {
            trace!(%mover, %m, %reason, "move rejected");
            PlayError::IllegalMove(reason)
        })?;
        self.last = Some((mover, m));

        debug!(
            %mover,
            %m,
            captured = ?outcome.captured,
            promoted = outcome.promoted,
            chain_continues = outcome.chain_continues,
            "move played"
        );

        if !outcome.chain_continues {
            self.check_turn_start();
        }

        Ok(outcome)
    }

    /// Lets the computer play a whole turn for the player to move, including
    /// all jumps of a capture chain.
    ///
    /// If the selector picks an illegal move in the middle of a chain, the
    /// jumps made so far stay on the board and the chain remains pending,
    /// see [`Position::chain()`].
    pub fn make_computer_move(&mut self) -> Result<Chain, PlayError> {
        self.ensure_in_progress()?;

        let mut chain = Chain::new();
        loop {
            let m = self
                .selector
                .select(&self.position)
                .ok_or(PlayError::NoMoveAvailable)?;
            let outcome = self.make_move(m).inspect_err(|err| {
                if !chain.is_empty() {
                    warn!(%chain, %m, %err, "computer chain interrupted");
                }
            })?;
            chain.push(m);
            if !outcome.chain_continues {
                return Ok(chain);
            }
        }
    }

    /// The player to move gives up the round. Scores do not change.
    pub fn quit(&mut self) -> Result<(), PlayError> {
        self.ensure_in_progress()?;
        debug!(quitter = %self.position.turn(), "round quit");
        self.status = Status::Quit;
        Ok(())
    }

    /// Ends the round in a tie, e.g. when both players agree to a draw.
    pub fn declare_tie(&mut self) -> Result<(), PlayError> {
        self.ensure_in_progress()?;
        self.finish(Status::Tie);
        Ok(())
    }

    fn check_turn_start(&mut self) {
        if let Some(winner) = self.position.winner() {
            self.finish(Status::won(winner));
        } else if self
            .settings
            .quiet_turn_limit
            .is_some_and(|limit| self.position.quiet_turns() >= limit)
        {
            self.finish(Status::Tie);
        }
    }

    fn finish(&mut self, status: Status) {
        self.status = status;

        let Some(winner) = status.winner() else {
            debug!(%status, "round over");
            return;
        };

        let delta = self
            .compute_points(winner)
            .abs_diff(self.compute_points(!winner));
        let player = self.players.get_mut(winner);
        player.add_score(delta);
        debug!(%status, winner = player.name(), delta, score = player.score(), "round over");
    }
}
