//! Game phases and outcomes.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Winner {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: [Position; 3],
    },
    /// Board filled without a winner.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner { player, .. } => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { player, .. } => write!(f, "{} wins!!", player),
            Outcome::Draw => write!(f, "It's a draw!!"),
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the given player to move.
    InProgress(Player),
    /// Game is over.
    Finished(Outcome),
}

impl GameStatus {
    /// True once a win or draw has been reached.
    pub fn is_finished(&self) -> bool {
        matches!(self, GameStatus::Finished(_))
    }
}
