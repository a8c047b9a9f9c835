//! Outcome invariant: the stored status matches the board.

use super::Invariant;
use crate::{Game, GameStatus};

/// Invariant: re-evaluating the board yields the stored status.
pub struct ConsistentOutcomeInvariant;

impl Invariant<Game> for ConsistentOutcomeInvariant {
    fn holds(game: &Game) -> bool {
        GameStatus::evaluate(game.board()) == *game.status()
    }

    fn description() -> &'static str {
        "Game status agrees with the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_won_game_holds() {
        let game = Game::replay([0, 3, 1, 4, 2]).expect("legal sequence");
        assert!(ConsistentOutcomeInvariant::holds(&game));
    }

    #[test]
    fn test_stale_status_violates() {
        let mut game = Game::replay([0, 3, 1, 4, 2]).expect("legal sequence");
        game.status = GameStatus::InProgress;
        assert!(!ConsistentOutcomeInvariant::holds(&game));
    }
}
