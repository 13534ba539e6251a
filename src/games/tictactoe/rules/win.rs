//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// Every line a player can complete to win.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line fully occupied by `player`, if any.
///
/// Each line stops comparing at its first foreign square, and the scan
/// stops at the first complete line.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, player: Player) -> Option<[Position; 3]> {
    let mark = Square::Occupied(player);
    WINNING_LINES
        .iter()
        .find(|line| line.iter().all(|pos| board.get(*pos) == mark))
        .copied()
}

/// Checks whether `player` has three in a row.
pub fn has_won(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// Checks if there is a winner on the board.
///
/// X is checked before O. Returns `None` when neither has a line.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|player| has_won(board, *player))
}
