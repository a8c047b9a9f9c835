//! Core domain types for tic-tac-toe.

use crate::position::Position;
use crate::rules;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The mark a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Token {
    /// Token X (moves first).
    #[display("X")]
    X,
    /// Token O (moves second).
    #[display("O")]
    O,
}

impl Token {
    /// Token that moves on the given turn count (even: X, odd: O).
    pub fn for_turn(turn_count: usize) -> Self {
        if turn_count % 2 == 0 { Token::X } else { Token::O }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a token.
    Occupied(Token),
}

/// A completed line: the token that owns it and the three positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    token: Token,
    line: [Position; 3],
}

impl Win {
    /// Creates a win record.
    pub fn new(token: Token, line: [Position; 3]) -> Self {
        Self { token, line }
    }

    /// The winning token.
    pub fn token(&self) -> Token {
        self.token
    }

    /// The winning line, in the order the rules list it.
    pub fn line(&self) -> [Position; 3] {
        self.line
    }

    /// The winning line as board indices, for highlighting.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::index)
    }
}

/// An accepted move: a token placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The token that was placed.
    pub token: Token,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.token, self.position.label())
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// True iff `index` is on the board (0-8) and that square is empty.
    pub fn is_move_valid(&self, index: usize) -> bool {
        Position::from_index(index).is_some_and(|pos| self.get(pos) == Square::Empty)
    }

    /// Writes `token` at `pos` without any check.
    ///
    /// Callers validate with [`Board::is_move_valid`] first; an occupied
    /// square is overwritten.
    pub fn fill_square(&mut self, pos: Position, token: Token) {
        self.squares[pos.index()] = Square::Occupied(token);
    }

    /// First completed line in rule order, `None` when nobody has three in a row.
    pub fn check_for_winner(&self) -> Option<Win> {
        rules::check_winner(self)
    }

    /// True iff no empty square remains.
    ///
    /// Only means "draw" when [`Board::check_for_winner`] is `None`.
    pub fn check_for_draw(&self) -> bool {
        rules::is_full(self)
    }

    /// Empties every square.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Formats the board as a 3x3 grid; empty squares show their index.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => pos.to_string(),
                    Square::Occupied(token) => token.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended with a completed line.
    Won(Win),
    /// Board filled with no completed line.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The win record when the game was won.
    pub fn win(&self) -> Option<&Win> {
        match self {
            GameStatus::Won(win) => Some(win),
            _ => None,
        }
    }

    /// Evaluates a board: winner first, then a full board, else in progress.
    pub fn evaluate(board: &Board) -> Self {
        if let Some(win) = board.check_for_winner() {
            GameStatus::Won(win)
        } else if board.check_for_draw() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}
