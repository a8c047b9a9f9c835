//! Noughts - tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use noughts::noughts_engine::Game;
use noughts::{AppConfig, Cli, Command, Console};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;
    initialize_tracing(&config);

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { indices, json } => run_replay(&config, &indices, json),
    }
}

/// Logs go to stderr so stdout carries only the game.
fn initialize_tracing(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: &AppConfig) -> Result<()> {
    info!("Starting interactive game");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(
        stdin.lock(),
        stdout.lock(),
        Game::with_roster(config.roster()),
    );
    console.run()
}

/// Replay a move list and print the outcome
#[instrument(skip(config))]
fn run_replay(config: &AppConfig, indices: &[i64], json: bool) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    noughts::replay(config.roster(), indices, json, &mut stdout)?;
    Ok(())
}
