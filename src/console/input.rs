//! Parsing and validation of typed moves.

use crate::games::tictactoe::{Board, Position};
use derive_more::{Display, Error};
use tracing::instrument;

/// Why a typed line was not accepted as a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// The line is not an integer.
    #[display("Not a number: {:?}", _0)]
    NotANumber(#[error(not(source))] String),

    /// The number is outside 1-9.
    #[display("Position {} is outside 1-9", _0)]
    OutOfRange(#[error(not(source))] i64),

    /// The square is already marked.
    #[display("Position {} is already taken", _0)]
    Occupied(#[error(not(source))] Position),
}

/// Validates one line of console input against the board.
///
/// Accepts a 1-based square number (surrounding whitespace ignored) whose
/// square is still empty, and returns it as a [`Position`].
#[instrument(skip(board))]
pub fn parse_position(line: &str, board: &Board) -> Result<Position, InputError> {
    let trimmed = line.trim();
    let number: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;

    let pos = usize::try_from(number)
        .ok()
        .and_then(Position::from_number)
        .ok_or(InputError::OutOfRange(number))?;

    if !board.is_empty(pos) {
        return Err(InputError::Occupied(pos));
    }
    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Game;

    #[test]
    fn test_accepts_numbers_one_to_nine() {
        let board = Board::new();
        assert_eq!(parse_position("1", &board), Ok(Position::TopLeft));
        assert_eq!(parse_position(" 5\n", &board), Ok(Position::Center));
        assert_eq!(parse_position("9\r\n", &board), Ok(Position::BottomRight));
    }

    #[test]
    fn test_rejects_out_of_range() {
        let board = Board::new();
        assert_eq!(parse_position("0", &board), Err(InputError::OutOfRange(0)));
        assert_eq!(parse_position("10", &board), Err(InputError::OutOfRange(10)));
        assert_eq!(parse_position("-3", &board), Err(InputError::OutOfRange(-3)));
    }

    #[test]
    fn test_rejects_garbage() {
        let board = Board::new();
        assert!(matches!(
            parse_position("five", &board),
            Err(InputError::NotANumber(_))
        ));
        assert!(matches!(
            parse_position("", &board),
            Err(InputError::NotANumber(_))
        ));
        assert!(matches!(
            parse_position("4.5", &board),
            Err(InputError::NotANumber(_))
        ));
    }

    #[test]
    fn test_rejects_occupied() {
        let game = Game::replay(&[Position::Center]).unwrap();
        assert_eq!(
            parse_position("5", game.board()),
            Err(InputError::Occupied(Position::Center))
        );
    }
}
