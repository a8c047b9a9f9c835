//! Noughts engine - tic-tac-toe game state without any I/O.
//!
//! The engine owns a 3x3 board, the turn count, the two players and the
//! game status. A presentation layer feeds it cell indices through
//! [`Game::play`] and renders what comes back.
//!
//! # Example
//!
//! ```
//! use noughts_engine::{Game, Position, Token};
//!
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.play(index).expect("legal move");
//! }
//!
//! assert!(game.is_game_over());
//! assert_eq!(game.verdict().to_string(), "X wins");
//! let win = game.status().win().copied().expect("won game");
//! assert_eq!(win.token(), Token::X);
//! assert_eq!(win.line(), [Position::TopLeft, Position::TopCenter, Position::TopRight]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod player;
mod position;
mod snapshot;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{MoveError, NamingError};
pub use game::{Game, Turn, Verdict};
pub use player::{Player, Roster};
pub use position::Position;
pub use snapshot::GameSnapshot;
pub use types::{Board, GameStatus, Move, Square, Token, Win};
