//! Rejection reasons reported by the engine.
//!
//! Rejected calls leave the game untouched; these values tell the caller why.

use crate::Position;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is not a board cell (valid cells are 0-8).
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Why player names were not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum NamingError {
    /// Moves have already been played this game.
    #[display("Names can only be set before the first move ({} moves played)", turn_count)]
    GameUnderway {
        /// Moves played so far.
        turn_count: usize,
    },
}

impl std::error::Error for NamingError {}
