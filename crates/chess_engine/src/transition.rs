//! Result of attempting a move

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::moves::Move;

/// Outcome of [`crate::Player::make_move`] or [`crate::Player::unmake_move`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveStatus {
    /// The move was applied
    Done,
    /// The move is not one this side can play here at all
    IllegalMove,
    /// The move fits the piece's geometry but would leave the mover's king attacked
    LeavesPlayerInCheck,
}

impl MoveStatus {
    pub fn is_done(self) -> bool {
        self == MoveStatus::Done
    }
}

/// A board transition and its status
///
/// When the status is not [`MoveStatus::Done`], `to_board` equals `from_board`: nothing
/// was applied.
#[derive(Clone, Debug)]
pub struct MoveTransition {
    from_board: Board,
    to_board: Board,
    transition_move: Move,
    status: MoveStatus,
}

impl MoveTransition {
    pub(crate) fn done(from_board: &Board, to_board: Board, transition_move: Move) -> Self {
        MoveTransition {
            from_board: from_board.clone(),
            to_board,
            transition_move,
            status: MoveStatus::Done,
        }
    }

    pub(crate) fn rejected(board: &Board, transition_move: Move, status: MoveStatus) -> Self {
        MoveTransition {
            from_board: board.clone(),
            to_board: board.clone(),
            transition_move,
            status,
        }
    }

    pub fn from_board(&self) -> &Board {
        &self.from_board
    }

    pub fn to_board(&self) -> &Board {
        &self.to_board
    }

    /// Consume the transition, keeping the resulting board
    pub fn into_board(self) -> Board {
        self.to_board
    }

    pub fn transition_move(&self) -> &Move {
        &self.transition_move
    }

    pub fn status(&self) -> MoveStatus {
        self.status
    }

    pub fn is_done(&self) -> bool {
        self.status.is_done()
    }
}
