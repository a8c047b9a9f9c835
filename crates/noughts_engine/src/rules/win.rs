//! Win detection logic for tic-tac-toe.

use crate::{Board, Position, Square, Win};
use tracing::instrument;

/// The 8 winning lines in evaluation order: rows top to bottom, columns
/// left to right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the first line in [`LINES`] order whose three squares hold the
/// same token, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Win> {
    LINES.into_iter().find_map(|line @ [a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(token) if sq == board.get(b) && sq == board.get(c) => {
                Some(Win::new(token, line))
            }
            _ => None,
        }
    })
}
