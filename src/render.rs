//! Text formatting shared by the interactive console and replay.

use noughts_engine::{Game, MoveError, Position, Verdict};

/// The board grid followed by the status line.
pub fn frame(game: &Game) -> String {
    format!("{}\n{}", game.board().render(), status_line(game))
}

/// Whose turn it is, or the verdict once the game is over.
pub fn status_line(game: &Game) -> String {
    match game.verdict() {
        Verdict::Pending => match game.to_move() {
            Some(player) => format!("{} ({}) to move", player.name(), player.token()),
            None => Verdict::Pending.to_string(),
        },
        Verdict::Winner { win, .. } => format!(
            "{} with {}",
            game.verdict(),
            winning_line(win.line())
        ),
        Verdict::Draw => game.verdict().to_string(),
    }
}

/// A winning line as indices plus labels, e.g. `0-1-2 (Top-left, Top-center, Top-right)`.
pub fn winning_line(line: [Position; 3]) -> String {
    let [a, b, c] = line;
    format!(
        "{}-{}-{} ({}, {}, {})",
        a.index(),
        b.index(),
        c.index(),
        a,
        b,
        c
    )
}

/// Notice for a rejected move.
pub fn rejection(error: &MoveError) -> String {
    format!("Move rejected: {}", error)
}

/// Notice for an index the engine cannot even represent (negative or too
/// large for an integer).
pub fn out_of_range(index: impl std::fmt::Display) -> String {
    format!("Move rejected: Position {} is out of bounds (must be 0-8)", index)
}
