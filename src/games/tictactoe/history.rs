//! Append-only history of board snapshots.
//!
//! Boards live in an arena addressed by [`BoardId`]. Each board after the
//! root is derived from its predecessor by marking exactly one empty square,
//! and only the tail may be extended, so the chain stays linear.

use super::action::{Move, MoveError};
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Index of a board inside a [`History`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoardId(usize);

impl BoardId {
    /// The empty board every history starts from.
    pub const ROOT: BoardId = BoardId(0);

    /// Position of the board in the chain (root is 0).
    pub fn index(self) -> usize {
        self.0
    }
}

/// The chain of boards from the empty root to the current tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    boards: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
        }
    }

    /// Derives the successor of `from` with `position` marked by `player`.
    ///
    /// `from` must be the tail and the square must be empty in it.
    #[instrument(skip(self), fields(len = self.boards.len()))]
    pub fn derive(
        &mut self,
        from: BoardId,
        position: Position,
        player: Player,
    ) -> Result<BoardId, MoveError> {
        let board = self.get(from).ok_or(MoveError::UnknownBoard(from))?;
        let tail = self.tail();
        if from != tail {
            return Err(MoveError::StaleBoard { from, tail });
        }
        if !board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        let next = board.with_mark(position, player);
        self.boards.push(next);
        let id = self.tail();
        debug!(?id, %position, %player, "Derived board");
        Ok(id)
    }

    /// Releases every board in the chain at once.
    #[instrument(skip(self), fields(len = self.boards.len()))]
    pub fn release(self) {
        debug!("Releasing board history");
        drop(self.boards);
    }

    /// Looks up a board.
    pub fn get(&self, id: BoardId) -> Option<&Board> {
        self.boards.get(id.0)
    }

    /// The empty board the chain starts from.
    pub fn root(&self) -> &Board {
        &self.boards[0]
    }

    /// Id of the latest board.
    pub fn tail(&self) -> BoardId {
        BoardId(self.boards.len() - 1)
    }

    /// Number of boards, root included. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Boards from root to tail.
    pub fn iter(&self) -> impl Iterator<Item = (BoardId, &Board)> {
        self.boards.iter().enumerate().map(|(i, b)| (BoardId(i), b))
    }

    /// The board derived from `id`, if any.
    pub fn successor(&self, id: BoardId) -> Option<BoardId> {
        let next = BoardId(id.0 + 1);
        self.get(next).map(|_| next)
    }

    /// The board `id` was derived from; `None` for the root.
    pub fn predecessor(&self, id: BoardId) -> Option<BoardId> {
        match id.0 {
            0 => None,
            i if i < self.boards.len() => Some(BoardId(i - 1)),
            _ => None,
        }
    }

    /// Appends a board without any checks, for corrupting histories in tests.
    #[cfg(test)]
    pub(crate) fn push_unchecked(&mut self, board: Board) -> BoardId {
        self.boards.push(board);
        self.tail()
    }

    /// The move that produced each board after the root.
    ///
    /// Recovered by diffing consecutive boards. A pair that does not differ
    /// by exactly one newly occupied square yields no move.
    pub fn moves(&self) -> Vec<Move> {
        self.boards
            .windows(2)
            .filter_map(|pair| added_mark(&pair[0], &pair[1]))
            .collect()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// The single mark present in `after` but not in `before`.
pub(super) fn added_mark(before: &Board, after: &Board) -> Option<Move> {
    let mut added = None;
    for pos in Position::ALL {
        match (before.get(pos), after.get(pos)) {
            (a, b) if a == b => {}
            (Square::Empty, Square::Occupied(player)) if added.is_none() => {
                added = Some(Move::new(player, pos));
            }
            _ => return None,
        }
    }
    added
}
