//! Console error types.

use crate::games::tictactoe::MoveError;
use derive_more::{Display, Error};

/// Failure that ends a console game early.
///
/// Invalid moves typed by a player are not errors; they are re-prompted
/// inside [`Console::read_move`](super::Console::read_move).
#[derive(Debug, Display, Error)]
pub enum ConsoleError {
    /// Reading stdin or writing stdout failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),

    /// Input closed before the game finished.
    #[display("Input ended before the game finished")]
    EndOfInput,

    /// The move history could not be serialized.
    #[display("History serialization failed: {}", _0)]
    Json(serde_json::Error),

    /// A validated move could not be applied.
    #[display("Move derivation failed: {}", _0)]
    Move(MoveError),
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<MoveError> for ConsoleError {
    fn from(err: MoveError) -> Self {
        Self::Move(err)
    }
}

impl From<serde_json::Error> for ConsoleError {
    /// Write failures surfaced through `serde_json` stay I/O errors.
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Io(err.into())
        } else {
            Self::Json(err)
        }
    }
}
