//! Game loop driving a [`Game`] from a [`Console`].

use super::{Console, ConsoleError};
use crate::games::tictactoe::{Game, GameStatus, Outcome};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Alternates turns between two console players until the game ends.
#[derive(Debug)]
pub struct Orchestrator<R, W> {
    game: Game,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Orchestrator<R, W> {
    /// Creates an orchestrator with a fresh game.
    pub fn new(console: Console<R, W>) -> Self {
        Self {
            game: Game::new(),
            console,
        }
    }

    /// Runs the game loop.
    ///
    /// The status of the current board is checked at the top of every
    /// turn, before the first move included. On a win or draw the final
    /// board is shown and the result announced; no further prompt follows.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Outcome, ConsoleError> {
        info!("Starting game orchestration");

        loop {
            match self.game.status() {
                GameStatus::Finished(outcome) => {
                    info!(%outcome, moves = self.game.moves().len(), "Game over");
                    self.console.announce(self.game.board(), &outcome)?;
                    return Ok(outcome);
                }
                GameStatus::InProgress(player) => {
                    let pos = self.console.read_move(self.game.board(), player)?;
                    let status = self.game.play(pos)?;
                    debug!(%player, %pos, ?status, "Turn complete");
                }
            }
        }
    }

    /// Prints the moves of the game as JSON.
    pub fn print_history(&mut self) -> Result<(), ConsoleError> {
        let moves = self.game.moves();
        self.console.write_history(&moves)
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Ends the session, releasing the game history and returning the console.
    pub fn finish(self) -> Console<R, W> {
        self.game.finish();
        self.console
    }
}
