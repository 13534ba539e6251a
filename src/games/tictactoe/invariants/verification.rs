//! Kani proof harnesses for board derivation and win detection.

use crate::games::tictactoe::history::added_mark;
use crate::games::tictactoe::rules::{WINNING_LINES, has_won};
use crate::games::tictactoe::{Board, Player, Position, Square};

/// Deriving a board marks exactly the requested square and nothing else.
#[kani::proof]
fn verify_with_mark_adds_one_mark() {
    let board: Board = kani::any();
    let pos: Position = kani::any();
    let player: Player = kani::any();
    kani::assume(board.is_empty(pos));

    let next = board.with_mark(pos, player);

    assert_eq!(next.get(pos), Square::Occupied(player));
    assert_eq!(added_mark(&board, &next).map(|m| m.position), Some(pos));
}

/// A win is reported exactly when some line is uniformly the player's mark.
#[kani::proof]
#[kani::unwind(10)]
fn verify_win_matches_lines() {
    let board: Board = kani::any();
    let player: Player = kani::any();

    let expected = WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|p| board.get(*p) == Square::Occupied(player)));

    assert_eq!(has_won(&board, player), expected);
}
