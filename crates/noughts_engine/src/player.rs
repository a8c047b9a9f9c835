//! Player identities: a display name bound to a fixed token.

use crate::Token;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A player: display name plus the token they place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Token placed by this player.
    #[getter(skip)]
    token: Token,
}

impl Player {
    /// Creates a player.
    pub fn new(name: impl Into<String>, token: Token) -> Self {
        Self {
            name: name.into(),
            token,
        }
    }

    /// Token placed by this player.
    pub fn token(&self) -> Token {
        self.token
    }

    /// Replaces the display name; the token never changes.
    pub(crate) fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

/// The two seats of a game. The first player always holds X.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Roster {
    /// First mover (X).
    first: Player,
    /// Second mover (O).
    second: Player,
}

impl Roster {
    /// Creates a roster with the given display names.
    pub fn new(first_name: impl AsRef<str>, second_name: impl AsRef<str>) -> Self {
        Self {
            first: Player::new(first_name.as_ref(), Token::X),
            second: Player::new(second_name.as_ref(), Token::O),
        }
    }

    /// Player holding `token`.
    pub fn by_token(&self, token: Token) -> &Player {
        match token {
            Token::X => &self.first,
            Token::O => &self.second,
        }
    }

    pub(crate) fn by_token_mut(&mut self, token: Token) -> &mut Player {
        match token {
            Token::X => &mut self.first,
            Token::O => &mut self.second,
        }
    }
}

impl Default for Roster {
    /// Anonymous players named after their tokens.
    fn default() -> Self {
        Self::new(Token::X.to_string(), Token::O.to_string())
    }
}
