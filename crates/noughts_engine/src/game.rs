//! Turn-based game controller.
//!
//! [`Game`] is the session object a presentation layer owns: it accepts
//! cell indices, alternates tokens, and settles the game as won or drawn.
//! Finished games stay frozen until [`Game::new_game`].

use crate::action::{MoveError, NamingError};
use crate::invariants::assert_invariants;
use crate::player::{Player, Roster};
use crate::snapshot::GameSnapshot;
use crate::types::{Board, GameStatus, Move, Square, Token, Win};
use crate::Position;
use tracing::{debug, info, instrument, warn};

/// An accepted move and the status it left the game in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// The move that was applied.
    pub applied: Move,
    /// Turn count after the move.
    pub turn_count: usize,
    /// Status after the move.
    pub status: GameStatus,
}

/// Human-facing result of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// No result yet.
    Pending,
    /// A player completed a line.
    Winner {
        /// Display name of the winner.
        name: String,
        /// The completed line.
        win: Win,
    },
    /// Board filled without a completed line.
    Draw,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Pending => write!(f, "no result yet"),
            Verdict::Winner { name, .. } => write!(f, "{} wins", name),
            Verdict::Draw => write!(f, "Draw"),
        }
    }
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) turn_count: usize,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
    roster: Roster,
    defaults: Roster,
    names_supplied: bool,
}

impl Game {
    /// Creates a new game with players named after their tokens.
    #[instrument]
    pub fn new() -> Self {
        Self::with_roster(Roster::default())
    }

    /// Creates a new game whose default players are `defaults`.
    ///
    /// [`Game::new_game`] restores this roster.
    #[instrument]
    pub fn with_roster(defaults: Roster) -> Self {
        Self {
            board: Board::new(),
            turn_count: 0,
            status: GameStatus::InProgress,
            history: Vec::new(),
            roster: defaults.clone(),
            defaults,
            names_supplied: false,
        }
    }

    /// Plays the current player's token at `index` (0-8).
    ///
    /// Even turn counts place X (first player), odd turn counts place O.
    /// After the token lands the board is evaluated for a completed line,
    /// then for a full board.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game is won or drawn
    /// - [`MoveError::OutOfRange`] for indices above 8
    /// - [`MoveError::SquareOccupied`] for a taken square
    ///
    /// A rejected move changes nothing.
    #[instrument(skip(self), fields(turn_count = self.turn_count))]
    pub fn play(&mut self, index: usize) -> Result<Turn, MoveError> {
        let pos = self
            .check_move(index)
            .inspect_err(|error| warn!(index, %error, "Move rejected"))?;

        let token = Token::for_turn(self.turn_count);
        self.board.fill_square(pos, token);
        self.turn_count += 1;
        let applied = Move::new(token, pos);
        self.history.push(applied);
        self.status = GameStatus::evaluate(&self.board);

        match self.status {
            GameStatus::Won(win) => {
                info!(winner = %win.token(), line = ?win.indices(), "Game won")
            }
            GameStatus::Draw => info!("Game drawn"),
            GameStatus::InProgress => debug!(%applied, "Move applied"),
        }

        assert_invariants(self);

        Ok(Turn {
            applied,
            turn_count: self.turn_count,
            status: self.status,
        })
    }

    /// Validates a move without applying it.
    fn check_move(&self, index: usize) -> Result<Position, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        if !self.board.is_move_valid(index) {
            return Err(MoveError::SquareOccupied(pos));
        }
        Ok(pos)
    }

    /// Starts over: empty board, turn count 0, default players restored.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.board.reset_board();
        self.turn_count = 0;
        self.status = GameStatus::InProgress;
        self.history.clear();
        self.roster = self.defaults.clone();
        self.names_supplied = false;
        info!("New game started");
    }

    /// Sets the display names of the first (X) and second (O) player.
    ///
    /// Names are trimmed; a blank name keeps that player's default name.
    /// Tokens are fixed and never change.
    ///
    /// # Errors
    ///
    /// [`NamingError::GameUnderway`] once any move has been played.
    #[instrument(skip(self))]
    pub fn supply_player_names(&mut self, first: &str, second: &str) -> Result<(), NamingError> {
        if self.turn_count > 0 {
            let error = NamingError::GameUnderway {
                turn_count: self.turn_count,
            };
            warn!(%error, "Names rejected");
            return Err(error);
        }

        for (token, name) in [(Token::X, first), (Token::O, second)] {
            let name = match name.trim() {
                "" => self.defaults.by_token(token).name().clone(),
                trimmed => trimmed.to_string(),
            };
            self.roster.by_token_mut(token).rename(name);
        }
        self.names_supplied = true;
        debug!(
            first = %self.roster.first().name(),
            second = %self.roster.second().name(),
            "Player names supplied"
        );
        Ok(())
    }

    /// True once names were supplied since the last [`Game::new_game`].
    pub fn have_player_names_been_supplied(&self) -> bool {
        self.names_supplied
    }

    /// True when the game is won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    /// The result of the game: `"<name> wins"`, `"Draw"` or `"no result yet"`
    /// when displayed.
    pub fn verdict(&self) -> Verdict {
        match self.status {
            GameStatus::InProgress => Verdict::Pending,
            GameStatus::Won(win) => Verdict::Winner {
                name: self.roster.by_token(win.token()).name().clone(),
                win,
            },
            GameStatus::Draw => Verdict::Draw,
        }
    }

    /// A copy of the current squares.
    pub fn print_board(&self) -> [Square; 9] {
        *self.board.squares()
    }

    /// Replays `indices` on a fresh game.
    ///
    /// # Errors
    ///
    /// The first rejected move's error.
    #[instrument(skip(indices))]
    pub fn replay(indices: impl IntoIterator<Item = usize>) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for index in indices {
            game.play(index)?;
        }
        Ok(game)
    }

    /// Serializable view of the whole game.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of accepted moves.
    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the current players.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Player whose turn it is, `None` once the game is over.
    pub fn to_move(&self) -> Option<&Player> {
        (!self.status.is_over()).then(|| self.roster.by_token(Token::for_turn(self.turn_count)))
    }

    /// Accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The completed line when the game was won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.status.win().map(Win::line)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_move_is_x_then_o() {
        let mut game = Game::new();
        let turn = game.play(4).expect("valid move");
        assert_eq!(turn.applied, Move::new(Token::X, Position::Center));
        assert_eq!(turn.turn_count, 1);
        assert_eq!(game.to_move().map(Player::token), Some(Token::O));

        game.play(0).expect("valid move");
        assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Token::O));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut game = Game::new();
        assert_eq!(game.play(9), Err(MoveError::OutOfRange(9)));
        assert_eq!(game.turn_count(), 0);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_occupied_rejected() {
        let mut game = Game::new();
        game.play(4).expect("valid move");
        assert_eq!(game.play(4), Err(MoveError::SquareOccupied(Position::Center)));
        assert_eq!(game.turn_count(), 1);
        assert_eq!(game.board().get(Position::Center), Square::Occupied(Token::X));
    }

    #[test]
    fn test_top_row_win() {
        let game = Game::replay([0, 3, 1, 4, 2]).expect("legal sequence");
        assert!(game.is_game_over());
        assert_eq!(
            game.winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        assert_eq!(game.verdict().to_string(), "X wins");
        assert!(game.to_move().is_none());
    }

    #[test]
    fn test_game_over_wins_over_bad_index() {
        let mut game = Game::replay([0, 3, 1, 4, 2]).expect("legal sequence");
        assert_eq!(game.play(42), Err(MoveError::GameOver));
        assert_eq!(game.play(0), Err(MoveError::GameOver));
    }

    #[test]
    fn test_names_locked_after_first_move() {
        let mut game = Game::new();
        game.supply_player_names("Ada", "  ").expect("before first move");
        assert!(game.have_player_names_been_supplied());
        assert_eq!(game.roster().first().name(), "Ada");
        assert_eq!(game.roster().second().name(), "O");

        game.play(0).expect("valid move");
        assert_eq!(
            game.supply_player_names("Bob", "Eve"),
            Err(NamingError::GameUnderway { turn_count: 1 })
        );
        assert_eq!(game.roster().first().name(), "Ada");
    }

    #[test]
    fn test_pending_verdict_text() {
        let game = Game::new();
        assert_eq!(game.verdict(), Verdict::Pending);
        assert_eq!(game.verdict().to_string(), "no result yet");
    }
}
