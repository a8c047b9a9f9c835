//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a [`Board`](crate::Board). The board
//! methods and the controller both go through these.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};
