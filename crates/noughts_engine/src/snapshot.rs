//! Serializable view of a game for presentation layers.

use crate::game::Game;
use crate::types::{GameStatus, Move, Square, Token};
use serde::{Deserialize, Serialize};

/// Everything a presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Squares in row-major order.
    pub board: [Square; 9],
    /// Accepted moves so far.
    pub turn_count: usize,
    /// Game status.
    pub status: GameStatus,
    /// Display name of the first player (X).
    pub first_player: String,
    /// Display name of the second player (O).
    pub second_player: String,
    /// Token to move next, `None` once the game is over.
    pub to_move: Option<Token>,
    /// `"<name> wins"`, `"Draw"` or `"no result yet"`.
    pub verdict: String,
    /// Board indices of the winning line, for highlighting.
    pub winning_line: Option<[usize; 3]>,
    /// Accepted moves in order.
    pub history: Vec<Move>,
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        Self {
            board: game.print_board(),
            turn_count: game.turn_count(),
            status: *game.status(),
            first_player: game.roster().first().name().clone(),
            second_player: game.roster().second().name().clone(),
            to_move: game.to_move().map(|player| player.token()),
            verdict: game.verdict().to_string(),
            winning_line: game.status().win().map(|win| win.indices()),
            history: game.history().to_vec(),
        }
    }
}
