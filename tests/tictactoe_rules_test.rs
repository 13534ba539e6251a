//! Tests for win and draw detection and board rendering.

use strictly_tictactoe::rules::{WINNING_LINES, check_winner, has_won, is_draw, winning_line};
use strictly_tictactoe::{Board, Game, GameStatus, Outcome, Player, Position, Square};

fn board_from(cells: &str) -> Board {
    let mut squares = [Square::Empty; 9];
    for (square, c) in squares.iter_mut().zip(cells.chars()) {
        *square = match c {
            'X' => Square::Occupied(Player::X),
            'O' => Square::Occupied(Player::O),
            _ => Square::Empty,
        };
    }
    Board::from_squares(squares)
}

#[test]
fn test_empty_board_has_no_winner() {
    let board = Board::new();
    assert!(!has_won(&board, Player::X));
    assert!(!has_won(&board, Player::O));
    assert_eq!(check_winner(&board), None);
}

#[test]
fn test_win_iff_uniform_line() {
    let cases = [
        ("XXX......", Some(Player::X)),
        ("...OOO...", Some(Player::O)),
        ("X..X..X..", Some(Player::X)),
        ("..O.O.O..", Some(Player::O)),
        ("XXO......", None),
        ("XOXOXOOXO", None),
        ("X...X...O", None),
    ];
    for (cells, expected) in cases {
        let board = board_from(cells);
        assert_eq!(check_winner(&board), expected, "board {cells}");
        for player in [Player::X, Player::O] {
            let uniform = WINNING_LINES
                .iter()
                .any(|line| line.iter().all(|p| board.get(*p) == Square::Occupied(player)));
            assert_eq!(has_won(&board, player), uniform, "board {cells}");
        }
    }
}

#[test]
fn test_winning_line_reported() {
    let board = board_from("O.X.X.X.O");
    assert_eq!(
        winning_line(&board, Player::X),
        Some([Position::TopRight, Position::Center, Position::BottomLeft])
    );
}

#[test]
fn test_draw_needs_full_board_without_line() {
    assert!(is_draw(&board_from("XOXXOOOXX")));
    assert!(!is_draw(&board_from("XOXXOOOX.")));
    assert!(!is_draw(&board_from("XXXOOXOXO")));
}

#[test]
fn test_render_empty_board() {
    assert_eq!(
        Board::new().to_string(),
        " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 "
    );
}

#[test]
fn test_render_center_o() {
    let game = Game::replay(&[Position::TopLeft, Position::Center]).expect("Valid replay");
    assert_eq!(
        game.board().display(),
        " X | 2 | 3 \n---+---+---\n 4 | O | 6 \n---+---+---\n 7 | 8 | 9 "
    );
}

#[test]
fn test_game_reports_draw() {
    let game = Game::replay(&[
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::Center,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ])
    .expect("Valid replay");
    assert_eq!(game.status(), GameStatus::Finished(Outcome::Draw));
}
