//! Line-oriented terminal screens.
//!
//! Every screen reads commands from a `BufRead` and renders to a `Write`, so a whole
//! session can be driven from in-memory buffers.

pub mod flashcard;
pub mod menu;
pub mod quiz;
pub mod scoreboard;

use crate::db::DbError;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use thiserror::Error;

pub use menu::MenuChoice;

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("terminal i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("history error: {0}")]
    History(#[from] DbError),
}

pub type Result<T> = std::result::Result<T, ScreenError>;

/// Input and output streams for the screens.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line of output.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Show a prompt and read the reply, without its line terminator.
    ///
    /// Returns `None` at end of input.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
