//! Alternating token invariant: X, O, X, O, ...

use super::Invariant;
use crate::{Game, Token};

/// Invariant: the n-th accepted move placed X for even n and O for odd n.
pub struct AlternatingTokensInvariant;

impl Invariant<Game> for AlternatingTokensInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .iter()
            .enumerate()
            .all(|(turn, mv)| mv.token == Token::for_turn(turn))
    }

    fn description() -> &'static str {
        "Tokens alternate (X, O, X, O, ...)"
    }
}
