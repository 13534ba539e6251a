//! Tic-tac-toe game state machine.
//!
//! A [`Game`] owns the board history, the id of the current board and the
//! player to move. Its status is always recomputed from the current board:
//! a win for X, then a win for O, then a full board.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::history::{BoardId, History};
use super::phases::{GameStatus, Outcome};
use super::rules;
use super::{Board, Player, Position};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone)]
pub struct Game {
    pub(super) history: History,
    pub(super) current: BoardId,
    pub(super) to_move: Player,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        info!("Starting new game");
        Self {
            history: History::new(),
            current: BoardId::ROOT,
            to_move: Player::FIRST,
        }
    }

    /// Replays 0-indexed positions from a fresh game, alternating players.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for pos in positions {
            game.play(*pos)?;
        }
        Ok(game)
    }

    /// Marks `position` for the player to move and advances the game.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::GameOver` once the game is finished and
    /// `MoveError::SquareOccupied` for a marked square.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        let action = Move::new(self.to_move, position);
        MoveContract::pre(self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.current = self.history.derive(self.current, position, self.to_move)?;
        self.to_move = self.to_move.opponent();

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        let status = self.status();
        debug!(?status, "Move applied");
        Ok(status)
    }

    /// Evaluates the current board.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        let board = self.board();
        for player in [Player::X, Player::O] {
            if let Some(line) = rules::winning_line(board, player) {
                return GameStatus::Finished(Outcome::Winner { player, line });
            }
        }
        if rules::is_full(board) {
            return GameStatus::Finished(Outcome::Draw);
        }
        GameStatus::InProgress(self.to_move)
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        // `current` only ever holds ids handed out by `history`.
        self.history.get(self.current).unwrap_or_else(|| self.history.root())
    }

    /// Id of the current board.
    pub fn current(&self) -> BoardId {
        self.current
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the board history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Moves played so far, oldest first.
    pub fn moves(&self) -> Vec<Move> {
        self.history.moves()
    }

    /// Returns valid positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(self.board())
    }

    /// Ends the game, releasing its history.
    #[instrument(skip(self))]
    pub fn finish(self) {
        self.history.release();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
