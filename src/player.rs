use core::{error::Error, fmt};

use crate::{side::Side, types::Piece};

/// Maximum length of a player name, in characters.
pub const MAX_NAME_LEN: usize = 20;

/// Name conventionally given to the computer opponent.
pub const COMPUTER_NAME: &str = "Computer";

/// Error when a player name is rejected.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum NameError {
    Empty,
    TooLong,
    ContainsWhitespace,
    /// Both players would have the same name.
    Duplicate,
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            NameError::Empty => f.write_str("name must not be empty"),
            NameError::TooLong => write!(f, "name must be at most {MAX_NAME_LEN} characters"),
            NameError::ContainsWhitespace => f.write_str("name must not contain spaces"),
            NameError::Duplicate => f.write_str("name is already taken by the other player"),
        }
    }
}

impl Error for NameError {}

/// Checks a player name: non-empty, at most [`MAX_NAME_LEN`] characters
/// and without whitespace.
///
/// # Examples
///
/// ```
/// use checkers::player::{validate_name, NameError};
///
/// assert_eq!(validate_name("Alice"), Ok(()));
/// assert_eq!(validate_name("Alice Smith"), Err(NameError::ContainsWhitespace));
/// assert_eq!(validate_name(""), Err(NameError::Empty));
/// ```
pub fn validate_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        Err(NameError::Empty)
    } else if name.chars().count() > MAX_NAME_LEN {
        Err(NameError::TooLong)
    } else if name.chars().any(char::is_whitespace) {
        Err(NameError::ContainsWhitespace)
    } else {
        Ok(())
    }
}

/// A participant of a session. The score accumulates over rounds.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Player {
    name: String,
    side: Side,
    score: u32,
    is_computer: bool,
}

impl Player {
    pub(crate) fn new(name: &str, side: Side, is_computer: bool) -> Player {
        Player {
            name: name.to_owned(),
            side,
            score: 0,
            is_computer,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_computer(&self) -> bool {
        self.is_computer
    }

    /// The symbol of this player's regular pieces.
    pub fn regular(&self) -> Piece {
        self.side.regular()
    }

    pub fn king(&self) -> Piece {
        self.side.king()
    }

    pub(crate) fn add_score(&mut self, delta: u32) {
        self.score = self.score.saturating_add(delta);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
