//! A library for checkers rules, turn orchestration and a baseline computer
//! opponent.
//!
//! # Examples
//!
//! Generate legal moves in the starting position:
//!
//! ```
//! use checkers::{BoardSize, Position};
//!
//! let pos = Position::new(BoardSize::Eight);
//! let legals = pos.legal_moves();
//! assert_eq!(legals.len(), 7);
//! ```
//!
//! Play a session between two players, the second of which is the
//! computer:
//!
//! ```
//! use checkers::{notation, Game, Status};
//!
//! let mut game = Game::new(6, "Alice", "Computer", true)?;
//!
//! // Alice moves by typing a move in "Fc>Ed" notation.
//! let m = notation::parse_move("Eb>Dc", game.board_size())?;
//! game.make_move(m)?;
//!
//! // The computer plays a whole turn, including capture chains.
//! assert!(game.current_player().is_computer());
//! let chain = game.make_computer_move()?;
//! assert!(!chain.is_empty());
//! assert_eq!(game.status(), Status::InProgress);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! Detect the end of a round:
//!
//! ```
//! # use checkers::{Game, Status};
//! # let mut game = Game::new(8, "Alice", "Bob", false)?;
//! game.quit()?;
//! assert_eq!(game.status(), Status::Quit);
//! assert_eq!(game.winner(), None);
//! assert_eq!(game.de_facto_winner().map(|p| p.name()), Some("Bob"));
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! # Feature flags
//!
//! * `arbitrary`: Implements
//!   [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for board sizes, squares, sides, pieces and moves, for fuzzing.

#![doc(html_root_url = "https://docs.rs/checkers/0.1.0")]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod game;
mod m;
mod material;
mod perft;
mod position;
mod role;
mod settings;
mod side;
mod square;
mod types;

pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod computer;
pub mod notation;
pub mod player;

pub use bitboard::Bitboard;
pub use board::Board;
pub use game::{ConfigError, Game, PlayError, Status};
pub use m::{Chain, Move, MoveList, MAX_CHAIN};
pub use material::{Material, DEFAULT_KING_POINTS, REGULAR_POINTS};
pub use perft::perft;
pub use player::Player;
pub use position::{
    IllegalMove, MoveOutcome, Position, PositionError, PositionErrorKinds, Setup,
};
pub use role::Role;
pub use settings::Settings;
pub use side::{BySide, Side};
pub use square::{BoardSize, InvalidBoardSize, ParseSquareError, Square};
pub use types::Piece;
