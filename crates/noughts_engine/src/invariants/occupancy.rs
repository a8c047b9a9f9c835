//! Occupancy invariant: every accepted move fills exactly one square.

use super::Invariant;
use crate::{Game, Square};

/// Invariant: occupied squares == turn count == history length, and every
/// recorded move's square still holds its token.
pub struct OccupancyMatchesTurnsInvariant;

impl Invariant<Game> for OccupancyMatchesTurnsInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        board.occupied_count() == game.turn_count()
            && game.history().len() == game.turn_count()
            && game
                .history()
                .iter()
                .all(|mv| board.get(mv.position) == Square::Occupied(mv.token))
    }

    fn description() -> &'static str {
        "Occupied squares match the turn count and move history"
    }
}
