//! Strictly Tic-Tac-Toe - two-player console tic-tac-toe
//!
//! # Architecture
//!
//! - **Games**: the tic-tac-toe domain. Every move derives a new board from
//!   the latest one into an append-only [`History`]; rules are pure
//!   predicates over a [`Board`].
//! - **Console**: prompts, input validation and the game loop, generic over
//!   any reader and writer.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Console, Orchestrator, Outcome, Player};
//!
//! let input = "1\n4\n2\n5\n3\n";
//! let mut output = Vec::new();
//! let mut orchestrator = Orchestrator::new(Console::new(input.as_bytes(), &mut output));
//! let outcome = orchestrator.run().unwrap();
//! assert_eq!(outcome.winner(), Some(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod console;
mod games;

// Crate-level exports - Console front end
pub use console::{
    Console, ConsoleError, ENTER_POSITION, INVALID_POSITION, InputError, Orchestrator,
    parse_position,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingTurnInvariant, Board, BoardId, Contract, Game, GameStatus, History,
    HistoryConsistentInvariant, Invariant, InvariantSet, Mark, MonotonicBoardInvariant, Move,
    MoveContract, MoveError, Outcome, Player, Position, Square, TicTacToeInvariants, rules,
};
