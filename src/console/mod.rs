//! Text console front end.
//!
//! Everything is generic over [`BufRead`] and [`Write`] so a game can be
//! driven from stdin/stdout or from in-memory buffers.

mod error;
mod input;
mod orchestrator;

pub use error::ConsoleError;
pub use input::{InputError, parse_position};
pub use orchestrator::Orchestrator;

use crate::games::tictactoe::{Board, Mark, Move, Outcome, Position};
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

/// Prompt shown before the first read of a turn.
pub const ENTER_POSITION: &str = "Enter the position you want to mark : ";
/// Prompt shown after a rejected line.
pub const INVALID_POSITION: &str = "Invalid position! Try again : ";

/// Line-oriented console.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes the board followed by a blank line.
    pub fn render(&mut self, board: &Board) -> Result<(), ConsoleError> {
        write!(self.output, "{}\n\n", board)?;
        Ok(())
    }

    /// Prompts `player` until a line names an empty square.
    ///
    /// Lines that are not numbers (invalid UTF-8 included), are outside 1-9,
    /// or name a marked square are rejected and re-prompted without limit.
    ///
    /// # Errors
    ///
    /// `ConsoleError::EndOfInput` if input closes first, `ConsoleError::Io`
    /// on read or write failure.
    #[instrument(skip(self, board, player), fields(player = %player))]
    pub fn read_move(&mut self, board: &Board, player: Mark) -> Result<Position, ConsoleError> {
        writeln!(self.output, "{}'s turn!", player)?;
        self.render(board)?;
        write!(self.output, "\n{}", ENTER_POSITION)?;
        self.output.flush()?;

        let mut line = Vec::new();
        loop {
            line.clear();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Err(ConsoleError::EndOfInput);
            }

            // Bytes that are not UTF-8 can't spell a number; they fail parsing below.
            match parse_position(&String::from_utf8_lossy(&line), board) {
                Ok(pos) => {
                    debug!(%pos, "Accepted move");
                    return Ok(pos);
                }
                Err(err) => {
                    warn!(%err, "Rejected input");
                    write!(self.output, "{}", INVALID_POSITION)?;
                    self.output.flush()?;
                }
            }
        }
    }

    /// Shows the final board and the result.
    pub fn announce(&mut self, board: &Board, outcome: &Outcome) -> Result<(), ConsoleError> {
        self.render(board)?;
        writeln!(self.output, "\n{}", outcome)?;
        self.output.flush()?;
        Ok(())
    }

    /// Writes the moves of a game as pretty JSON.
    pub fn write_history(&mut self, moves: &[Move]) -> Result<(), ConsoleError> {
        serde_json::to_writer_pretty(&mut self.output, moves)?;
        writeln!(self.output)?;
        self.output.flush()?;
        Ok(())
    }

    /// Gives back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
