//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe engine with a terminal front end", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play,

    /// Play a sequence of cell indices on a fresh game and print the result
    Replay {
        /// Cell indices (0-8) in the order they are played
        #[arg(allow_negative_numbers = true)]
        indices: Vec<i64>,

        /// Print the final game as JSON
        #[arg(long)]
        json: bool,
    },
}
