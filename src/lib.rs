//! Noughts - a tic-tac-toe engine with a terminal front end.
//!
//! The game logic lives in [`noughts_engine`]; this crate is the
//! presentation layer around it.
//!
//! # Architecture
//!
//! - **Console**: interactive line-oriented session over any reader/writer
//! - **Replay**: plays a list of indices and prints the final game
//! - **Render**: board and status text shared by both
//! - **Config**: default player names and log filter from TOML
//!
//! # Example
//!
//! ```
//! use noughts::{Console, noughts_engine::Game};
//!
//! # fn example() -> anyhow::Result<()> {
//! let input = std::io::Cursor::new("0\n3\n1\n4\n2\nquit\n");
//! let mut console = Console::new(input, Vec::new(), Game::new());
//! console.run()?;
//! assert_eq!(console.game().verdict().to_string(), "X wins");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod replay;

pub mod render;

pub use noughts_engine;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Presentation
pub use console::{Console, Flow, Input};
pub use replay::{ReplayReport, replay};
