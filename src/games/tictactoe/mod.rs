//! Tic-tac-toe: board history, rules and the move state machine.

mod action;
mod contracts;
mod game;
mod history;
mod invariants;
#[cfg(kani)]
mod kani_support;
mod phases;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{Contract, GameNotOver, LegalMove, MoveContract, SquareIsEmpty};
pub use game::Game;
pub use history::{BoardId, History};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, TicTacToeInvariants,
};
pub use phases::{GameStatus, Outcome};
pub use position::Position;
pub use types::{Board, Player, Square};

/// Alias for clarity at the console, where players are known by their mark.
pub type Mark = Player;
