//! History consistency invariant: the game sits on the tail of its history.

use super::super::{Game, Square};
use super::Invariant;

/// Invariant: Board depth matches marks, and the current board is the tail.
///
/// The board at depth `k` holds exactly `k` marks, and the game always
/// plays from the latest board.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        let depths_match = history.iter().all(|(id, board)| {
            let occupied = board
                .squares()
                .iter()
                .filter(|s| **s != Square::Empty)
                .count();
            occupied == id.index()
        });

        depths_match && game.current() == history.tail()
    }

    fn description() -> &'static str {
        "Board depth matches number of occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, BoardId, Player, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_full_game_holds() {
        let game = Game::replay(&[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
        ])
        .unwrap();
        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.history().len(), 9);
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut game = Game::new();
        let corrupt = Board::new()
            .with_mark(Position::Center, Player::X)
            .with_mark(Position::TopLeft, Player::O);
        game.current = game.history.push_unchecked(corrupt);
        assert!(!HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_detached_current_violates() {
        let mut game = Game::replay(&[Position::Center]).unwrap();
        game.current = BoardId::ROOT;
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
