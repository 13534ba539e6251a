//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Moves recovered from the history must show X, O, X, O, ...
/// and the player to move must be the one after the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let moves = game.moves();

        // A board that isn't a single added mark has no move; count mismatch.
        if moves.len() + 1 != game.history().len() {
            return false;
        }

        let alternates = moves.iter().enumerate().all(|(i, mov)| {
            let expected = if i % 2 == 0 { Player::FIRST } else { Player::FIRST.opponent() };
            mov.player == expected
        });

        let expected_next = if moves.len() % 2 == 0 {
            Player::FIRST
        } else {
            Player::FIRST.opponent()
        };

        alternates && game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
