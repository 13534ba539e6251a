//! Tests for the board history.

use strictly_tictactoe::{Board, BoardId, History, MoveError, Player, Position, Square};

#[test]
fn test_derive_marks_only_target_square() {
    let mut history = History::new();
    let mut current = BoardId::ROOT;

    for (i, pos) in [Position::Center, Position::TopLeft, Position::BottomRight]
        .into_iter()
        .enumerate()
    {
        let player = if i % 2 == 0 { Player::X } else { Player::O };
        let before = history.get(current).cloned().expect("Board exists");
        let next = history.derive(current, pos, player).expect("Valid derive");
        let after = history.get(next).expect("Board exists");

        for other in Position::ALL {
            if other == pos {
                assert_eq!(after.get(other), Square::Occupied(player));
            } else {
                assert_eq!(after.get(other), before.get(other));
            }
        }
        // Source snapshot is unchanged.
        assert_eq!(history.get(current), Some(&before));
        current = next;
    }

    assert_eq!(history.len(), 4);
    assert_eq!(history.tail(), current);
}

#[test]
fn test_derive_refuses_marked_square() {
    let mut history = History::new();
    let first = history
        .derive(BoardId::ROOT, Position::Center, Player::X)
        .expect("Valid derive");

    let result = history.derive(first, Position::Center, Player::O);
    assert!(matches!(result, Err(MoveError::SquareOccupied(Position::Center))));
    assert_eq!(history.len(), 2);
}

#[test]
fn test_history_is_linear() {
    let mut history = History::new();
    history
        .derive(BoardId::ROOT, Position::Center, Player::X)
        .expect("Valid derive");

    // Root already has a successor.
    let result = history.derive(BoardId::ROOT, Position::TopLeft, Player::O);
    assert!(matches!(result, Err(MoveError::StaleBoard { .. })));
}

#[test]
fn test_iter_runs_root_to_tail() {
    let mut history = History::new();
    let a = history
        .derive(BoardId::ROOT, Position::TopLeft, Player::X)
        .expect("Valid derive");
    history
        .derive(a, Position::TopCenter, Player::O)
        .expect("Valid derive");

    let depths: Vec<usize> = history.iter().map(|(_, board)| board.occupied()).collect();
    assert_eq!(depths, vec![0, 1, 2]);
    assert_eq!(history.root(), &Board::new());
    history.release();
}
