//! Non-interactive replay of a move list.

use crate::render;
use anyhow::{Context, Result};
use noughts_engine::{Game, GameSnapshot, Roster};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::{info, instrument};

/// JSON output of a replay: the rejection notices and the final game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayReport {
    /// One notice per rejected move, in input order.
    pub rejected: Vec<String>,
    /// The final game.
    pub game: GameSnapshot,
}

/// Plays `indices` on a fresh game, reporting rejected moves and skipping
/// them, then prints the final frame. With `json` the notices and the final
/// snapshot are printed together as a [`ReplayReport`].
///
/// Returns the final game.
#[instrument(skip(roster, output))]
pub fn replay<W: Write>(roster: Roster, indices: &[i64], json: bool, output: &mut W) -> Result<Game> {
    let mut game = Game::with_roster(roster);
    let mut rejected = Vec::new();

    for &index in indices {
        let notice = match usize::try_from(index) {
            Ok(index) => game.play(index).err().map(|error| render::rejection(&error)),
            Err(_) => Some(render::out_of_range(index)),
        };
        if let Some(notice) = notice {
            if !json {
                writeln!(output, "{}", notice)?;
            }
            rejected.push(notice);
        }
    }

    info!(
        played = game.turn_count(),
        rejected = rejected.len(),
        verdict = %game.verdict(),
        "Replay finished"
    );

    if json {
        let report = ReplayReport {
            rejected,
            game: game.snapshot(),
        };
        let text = serde_json::to_string_pretty(&report).context("Failed to serialize replay report")?;
        writeln!(output, "{}", text)?;
    } else {
        writeln!(output, "{}", render::frame(&game))?;
    }

    Ok(game)
}
