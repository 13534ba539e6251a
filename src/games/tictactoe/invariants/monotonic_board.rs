//! Monotonic board invariant: each board adds exactly one mark.

use super::super::history::added_mark;
use super::super::{Board, Game};
use super::Invariant;

/// Invariant: Every board is its predecessor plus one mark.
///
/// The root is empty, and each successor differs from its predecessor in
/// exactly one square, which was empty before. Squares are never
/// overwritten or cleared.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();
        if *history.root() != Board::new() {
            return false;
        }

        let boards: Vec<&Board> = history.iter().map(|(_, board)| board).collect();
        boards
            .windows(2)
            .all(|pair| added_mark(pair[0], pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Each board adds exactly one mark to its predecessor"
    }
}
