//! Line-oriented terminal front end.
//!
//! The console owns one [`Game`] and translates input lines into engine
//! calls. It keeps no game state of its own; everything it prints comes
//! back from the engine.

use crate::render;
use anyhow::{Context, Result};
use noughts_engine::{Game, Position};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  <0-8> or <label>      play a cell (e.g. `4` or `center`)
  names <first> <second> set player names (before the first move)
  new                   start a new game
  board                 redraw the board
  help                  show this help
  quit                  leave";

const NAMES_USAGE: &str = "Usage: names <first> <second> (one word each)";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A numeric cell index, possibly out of range.
    Cell(i64),
    /// An integer too large to hold as an index.
    OutOfRange(String),
    /// A cell given by label.
    Label(Position),
    /// Start over.
    NewGame,
    /// Set player names.
    Names(String, String),
    /// Redraw the board.
    Board,
    /// Show the command list.
    Help,
    /// End the session.
    Quit,
    /// A known command used wrongly; carries the usage text.
    Usage(&'static str),
    /// Nothing typed.
    Blank,
    /// Anything else.
    Unknown(String),
}

impl Input {
    /// Parses one line of user input.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Input::Blank;
        };

        match head.to_ascii_lowercase().as_str() {
            "new" => Input::NewGame,
            "board" => Input::Board,
            "help" | "?" => Input::Help,
            "quit" | "exit" | "q" => Input::Quit,
            "names" => {
                let names: Vec<&str> = words.collect();
                match names.as_slice() {
                    [] => Input::Usage(NAMES_USAGE),
                    [first] => Input::Names(first.to_string(), String::new()),
                    [first, second] => Input::Names(first.to_string(), second.to_string()),
                    _ => Input::Usage(NAMES_USAGE),
                }
            }
            _ => {
                if let Ok(index) = line.parse::<i64>() {
                    Input::Cell(index)
                } else if is_integer(line) {
                    Input::OutOfRange(line.to_string())
                } else if let Some(pos) = Position::from_label_or_number(line) {
                    Input::Label(pos)
                } else {
                    Input::Unknown(line.to_string())
                }
            }
        }
    }
}

/// Optional minus sign followed by at least one ASCII digit.
fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Whether the session continues after an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading input.
    Continue,
    /// Stop the session.
    Quit,
}

/// Interactive session driving one game.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    game: Game,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given input and output.
    pub fn new(input: R, output: W, game: Game) -> Self {
        Self {
            input,
            output,
            game,
        }
    }

    /// Reads lines until `quit` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        info!("Console session started");
        writeln!(self.output, "{}\n", HELP)?;
        self.show_frame()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush().context("Failed to flush output")?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read input")?;
            if read == 0 {
                writeln!(self.output)?;
                break;
            }
            if self.handle(&line)? == Flow::Quit {
                break;
            }
        }

        info!(turn_count = self.game.turn_count(), "Console session ended");
        Ok(())
    }

    /// Applies one input line to the game and prints the response.
    #[instrument(skip(self))]
    pub fn handle(&mut self, line: &str) -> Result<Flow> {
        let input = Input::parse(line);
        debug!(?input, "Parsed input");

        match input {
            Input::Cell(index) => match usize::try_from(index) {
                Ok(index) => self.play(index)?,
                Err(_) => writeln!(self.output, "{}", render::out_of_range(index))?,
            },
            Input::OutOfRange(text) => writeln!(self.output, "{}", render::out_of_range(text))?,
            Input::Label(pos) => self.play(pos.index())?,
            Input::NewGame => {
                self.game.new_game();
                writeln!(self.output, "New game.")?;
                self.show_frame()?;
            }
            Input::Names(first, second) => self.supply_names(&first, &second)?,
            Input::Board => self.show_frame()?,
            Input::Help => writeln!(self.output, "{}", HELP)?,
            Input::Quit => return Ok(Flow::Quit),
            Input::Usage(usage) => writeln!(self.output, "{}", usage)?,
            Input::Blank => {}
            Input::Unknown(text) => {
                writeln!(self.output, "Unrecognized input `{}`; type `help`", text)?
            }
        }
        Ok(Flow::Continue)
    }

    fn play(&mut self, index: usize) -> Result<()> {
        match self.game.play(index) {
            Ok(_) => {
                self.show_frame()?;
                if self.game.is_game_over() {
                    writeln!(self.output, "Game over. Type `new` to play again.")?;
                }
            }
            Err(error) => writeln!(self.output, "{}", render::rejection(&error))?,
        }
        Ok(())
    }

    fn supply_names(&mut self, first: &str, second: &str) -> Result<()> {
        if self.game.have_player_names_been_supplied() {
            writeln!(
                self.output,
                "Names are already set; start a `new` game to change them."
            )?;
            return Ok(());
        }

        match self.game.supply_player_names(first, second) {
            Ok(()) => {
                let roster = self.game.roster();
                writeln!(
                    self.output,
                    "{} plays {}, {} plays {}.",
                    roster.first().name(),
                    roster.first().token(),
                    roster.second().name(),
                    roster.second().token()
                )?;
                self.show_frame()?;
            }
            Err(error) => writeln!(self.output, "{}", error)?,
        }
        Ok(())
    }

    fn show_frame(&mut self) -> Result<()> {
        writeln!(self.output, "{}", render::frame(&self.game))?;
        Ok(())
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the console, returning the game and the output sink.
    pub fn into_parts(self) -> (Game, W) {
        (self.game, self.output)
    }
}
